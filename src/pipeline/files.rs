//! Path enumerator - glob expansion into a lazy sequence of file paths

use anyhow::Result;
use glob::Paths;
use std::path::{Path, PathBuf};

use crate::core::model::{ResultItem, ResultSet};
use crate::core::paths::{make_relative, resolve_glob};
use crate::core::render::{RenderConfig, Renderer};
use crate::pipeline::PipelineError;

/// Lazy sequence of file paths matching a glob pattern.
///
/// The pattern is validated up front; the filesystem is only touched as the
/// iterator advances. Matches are yielded in the order the underlying glob
/// walk produces them. Directories are skipped, as are entries the walk
/// cannot read.
pub struct GlobFiles {
    inner: Paths,
}

impl GlobFiles {
    /// Build an enumerator for `pattern` resolved against `root`.
    ///
    /// Absolute patterns ignore `root`. A pattern matching nothing yields an
    /// empty sequence, not an error.
    pub fn new(root: &Path, pattern: &str) -> Result<Self, PipelineError> {
        let resolved = resolve_glob(root, pattern);
        Ok(Self {
            inner: glob::glob(&resolved)?,
        })
    }
}

impl Iterator for GlobFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                // unreadable entry mid-walk: skip, not fatal
                Err(_) => continue,
            };

            if entry.is_file() {
                return Some(entry);
            }
        }
    }
}

/// Run the files command
pub fn run_files(root: &Path, pattern: &str, config: RenderConfig) -> Result<()> {
    let mut result_set = ResultSet::new();

    for path in GlobFiles::new(root, pattern)? {
        let relative = make_relative(&path, root).unwrap_or_else(|| path.display().to_string());
        result_set.push(ResultItem::file(relative));
    }

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}
