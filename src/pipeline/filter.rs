//! Pattern filter - anchored matching against each line
//!
//! The pattern is compiled exactly once, at construction. A line is kept
//! only when the pattern matches at position 0, and the yielded value is the
//! full matched span (group 0), never a capture group.

use anyhow::Result;
use regex::Regex;
use std::path::Path;

use crate::core::model::{ResultItem, ResultSet};
use crate::core::render::{RenderConfig, Renderer};
use crate::pipeline::PipelineError;

/// Lazy sequence of the leading matched substring of each matching line.
///
/// Upstream errors pass through untouched so the consumer sees them in
/// stream order.
pub struct MatchFilter<I> {
    lines: I,
    pattern: Regex,
}

impl<I> MatchFilter<I> {
    /// Compile `pattern` and wrap `lines`. A malformed pattern fails here,
    /// before any data flows.
    pub fn new(lines: I, pattern: &str) -> Result<Self, PipelineError> {
        Ok(Self {
            lines,
            pattern: Regex::new(pattern)?,
        })
    }
}

impl<I> Iterator for MatchFilter<I>
where
    I: Iterator<Item = Result<String, PipelineError>>,
{
    type Item = Result<String, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    // leftmost match starting at 0 == the pattern matches a
                    // prefix of the line
                    if let Some(m) = self.pattern.find(&line) {
                        if m.start() == 0 {
                            return Some(Ok(m.as_str().to_string()));
                        }
                    }
                }
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

/// Run the match command
pub fn run_match(
    root: &Path,
    pattern: &str,
    glob_pattern: &str,
    config: RenderConfig,
) -> Result<()> {
    let matched: Vec<String> =
        crate::pipeline::matches(root, glob_pattern, pattern)?.collect::<Result<_, _>>()?;

    let result_set: ResultSet = matched.into_iter().map(ResultItem::matched).collect();

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn lines(input: &[&str]) -> std::vec::IntoIter<Result<String, PipelineError>> {
        input
            .iter()
            .map(|s| Ok(s.to_string()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_keeps_only_anchored_matches() {
        let input = lines(&["import sys\n", "  import os\n", "x = 1\n", "import re\n"]);
        let matched: Vec<String> = MatchFilter::new(input, "import .*")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(matched, vec!["import sys", "import re"]);
    }

    #[test]
    fn test_yields_full_matched_span_not_groups() {
        let input = lines(&["import sys\n"]);
        let matched: Vec<String> = MatchFilter::new(input, r"(import) (\w+)")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(matched, vec!["import sys"]);
    }

    #[test]
    fn test_match_excludes_unmatched_tail() {
        let input = lines(&["import sys\n"]);
        let matched: Vec<String> = MatchFilter::new(input, r"import \w")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        // only the matched prefix is yielded, not the rest of the line
        assert_eq!(matched, vec!["import s"]);
    }

    #[test]
    fn test_no_matches_is_empty() {
        let input = lines(&["x = 1\n", "y = 2\n"]);
        let matched: Vec<String> = MatchFilter::new(input, "^import")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert!(matched.is_empty());
    }

    #[test]
    fn test_invalid_pattern_fails_at_construction() {
        let input = lines(&[]);
        assert!(matches!(
            MatchFilter::new(input, "("),
            Err(PipelineError::Regex(_))
        ));
    }

    #[test]
    fn test_upstream_errors_pass_through() {
        let input = vec![
            Ok("import sys\n".to_string()),
            Err(PipelineError::Io {
                path: PathBuf::from("gone.txt"),
                source: std::io::Error::other("boom"),
            }),
        ]
        .into_iter();

        let mut filter = MatchFilter::new(input, "^import .*").unwrap();
        assert_eq!(filter.next().unwrap().unwrap(), "import sys");
        assert!(filter.next().unwrap().is_err());
        assert!(filter.next().is_none());
    }
}
