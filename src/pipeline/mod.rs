//! Pipeline module - Lazy stream-processing stages
//!
//! Four composable stages, each an `Iterator` pulled on demand by its
//! consumer:
//! - [`files::GlobFiles`]: glob pattern -> file paths
//! - [`lines::FileLines`]: file paths -> lines (terminators preserved)
//! - [`filter::MatchFilter`]: lines -> leading matched substrings
//! - [`counts::MatchCounter`]: matches -> frequency-ranked counts
//!
//! Stages communicate only through the pull protocol; constructing a
//! pipeline does no work until the final stage is polled.

pub mod counts;
pub mod files;
pub mod filter;
pub mod lines;

use std::path::{Path, PathBuf};
use thiserror::Error;

use self::counts::MatchCounter;
use self::files::GlobFiles;
use self::filter::MatchFilter;
use self::lines::FileLines;

/// Errors produced while constructing or driving a pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Malformed glob pattern, rejected before any filesystem access
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Malformed regular expression, rejected before any data flows
    #[error("invalid match pattern: {0}")]
    Regex(#[from] regex::Error),

    /// A file could not be opened or read; terminates the pipeline
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Compose stages 1-3: glob expansion, line emission, pattern filtering.
///
/// Both patterns are validated here; no file is touched until the returned
/// iterator is polled.
pub fn matches(
    root: &Path,
    glob_pattern: &str,
    pattern: &str,
) -> Result<MatchFilter<FileLines<GlobFiles>>, PipelineError> {
    let paths = GlobFiles::new(root, glob_pattern)?;
    let lines = FileLines::new(paths);
    MatchFilter::new(lines, pattern)
}

/// Compose the full pipeline, ending in the frequency aggregator.
pub fn frequencies(
    root: &Path,
    glob_pattern: &str,
    pattern: &str,
    strip_prefix: Option<&str>,
) -> Result<MatchCounter<MatchFilter<FileLines<GlobFiles>>>, PipelineError> {
    let matched = matches(root, glob_pattern, pattern)?;
    let counter = match strip_prefix {
        Some(prefix) => MatchCounter::new(matched).with_strip_prefix(prefix),
        None => MatchCounter::new(matched),
    };
    Ok(counter)
}
