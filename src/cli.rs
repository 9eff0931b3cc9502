//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::render::{OutputFormat, RenderConfig};

/// tally - scan a file tree with a glob, grep lines by pattern, and rank
/// matches by frequency.
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(
    author,
    version,
    about,
    long_about = r#"tally chains glob expansion, line emission, anchored pattern matching
and frequency counting into a single lazy pipeline, the way
`grep | sort | uniq -c | sort -nr` would.

Each command prints its results in the selected format (default: text).

Output formats:
- text: one result per line ("<count> <value>" for counts)
- jsonl: one JSON object per line (best for piping into tools)
- json: a single JSON array
- md: human-friendly Markdown

Examples:
    tally files "src/**/*.rs"
    tally match "^use " "src/**/*.rs"
    tally count "^import .*" "**/*.py" --strip-prefix "import "
"#
)]
pub struct Cli {
    /// Root directory against which relative globs resolve.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory against which relative glob patterns resolve (defaults to\n\
the current directory).\n\n\
Paths emitted by the files command are reported relative to this root."
    )]
    pub root: PathBuf,

    /// Output format (text/jsonl/json/md).
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default): one result per line, counts as \"<count> <value>\"\n\
- jsonl: one JSON object per line\n\
- json: a single JSON array\n\
- md (markdown)"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL output with indentation for human readability.\n\n\
Has no effect on text/md formats."
    )]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand a glob pattern and list matching files.
    #[command(
        long_about = "Expand GLOB under ROOT and emit one file result per match. Directories\n\
are skipped; a glob matching nothing produces empty output, not an error.\n\n\
Examples:\n\
  tally files\n\
  tally files \"**/*.py\"\n\
  tally files \"src/*.rs\" --format jsonl\n"
    )]
    Files {
        /// Glob pattern (supports *, ?, [..] and recursive **).
        #[arg(value_name = "GLOB", default_value = "**/*")]
        glob: String,
    },

    /// Emit the matched prefix of every line matching PATTERN.
    #[command(
        long_about = "Read every file GLOB matches, line by line, and emit the leading\n\
substring of each line that PATTERN matches at the start of the line.\n\
Lines that do not match at the start are dropped.\n\n\
Examples:\n\
  tally match \"^import .*\" \"**/*.py\"\n\
  tally match \"^use \" \"src/**/*.rs\"\n"
    )]
    Match {
        /// Regex matched against the start of each line.
        #[arg(value_name = "PATTERN")]
        pattern: String,

        /// Glob pattern selecting the files to scan.
        #[arg(value_name = "GLOB", default_value = "**/*")]
        glob: String,
    },

    /// Count matching lines and rank distinct values by frequency.
    #[command(
        long_about = "Run the full pipeline: expand GLOB, emit lines, keep the leading match\n\
of PATTERN per line, then count occurrences of each distinct value and\n\
print them ordered by descending count. Values tied on count keep their\n\
first-seen order.\n\n\
Examples:\n\
  tally count \"^import .*\" \"**/*.py\" --strip-prefix \"import \"\n\
  tally count \"^(ERROR|WARN)\" \"logs/**/*.log\"\n"
    )]
    Count {
        /// Regex matched against the start of each line.
        #[arg(value_name = "PATTERN")]
        pattern: String,

        /// Glob pattern selecting the files to scan.
        #[arg(value_name = "GLOB", default_value = "**/*")]
        glob: String,

        /// Literal prefix stripped from each match before counting.
        #[arg(
            long,
            value_name = "LITERAL",
            long_help = "Strip a literal prefix from each matched value before counting.\n\n\
Example: --strip-prefix \"import \" turns the match \"import sys\" into the\n\
counted value \"sys\". Values without the prefix are counted unchanged."
        )]
        strip_prefix: Option<String>,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let config = RenderConfig::with_pretty(format, cli.pretty);

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    match cli.command {
        Commands::Files { glob } => crate::pipeline::files::run_files(&root, &glob, config),

        Commands::Match { pattern, glob } => {
            crate::pipeline::filter::run_match(&root, &pattern, &glob, config)
        }

        Commands::Count {
            pattern,
            glob,
            strip_prefix,
        } => crate::pipeline::counts::run_count(
            &root,
            &pattern,
            &glob,
            strip_prefix.as_deref(),
            config,
        ),
    }
}
