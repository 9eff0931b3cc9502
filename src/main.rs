//! tally - frequency-ranked pattern matching over a tree of text files
//!
//! tally chains four lazy stages, each pulled on demand by the next:
//! - glob expansion into file paths
//! - line emission, one open file at a time
//! - anchored pattern filtering
//! - frequency aggregation
//!
//! The command driver drains the final stage and renders the result in a
//! unified output format (text/jsonl/json/md).

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod pipeline;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
