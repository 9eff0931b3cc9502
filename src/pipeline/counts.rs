//! Frequency aggregator - two-phase match counting
//!
//! The only stateful stage. It consumes its upstream to completion before
//! emitting anything: first pull drains every match into an
//! insertion-ordered count map (ACCUMULATING), then the frozen counts are
//! yielded in descending order (EMITTING). The transition happens exactly
//! once and cannot be reversed; no data can be added once emission begins.

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::model::{ResultItem, ResultSet};
use crate::core::render::{RenderConfig, Renderer};
use crate::pipeline::PipelineError;

/// A distinct matched value and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCount {
    pub count: u64,
    pub value: String,
}

enum State {
    Accumulating,
    Emitting(std::vec::IntoIter<MatchCount>),
}

/// Lazy sequence of [`MatchCount`] entries ordered by descending count.
///
/// Entries tied on count keep the first-seen order of the underlying count
/// map. Callers must not rely on any ordering beyond the count itself.
pub struct MatchCounter<I> {
    matches: I,
    strip_prefix: Option<String>,
    state: State,
}

impl<I> MatchCounter<I> {
    pub fn new(matches: I) -> Self {
        Self {
            matches,
            strip_prefix: None,
            state: State::Accumulating,
        }
    }

    /// Strip a literal prefix from each value before counting.
    ///
    /// Values that do not start with the prefix are counted unchanged.
    pub fn with_strip_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.strip_prefix = Some(prefix.into());
        self
    }
}

impl<I> Iterator for MatchCounter<I>
where
    I: Iterator<Item = Result<String, PipelineError>>,
{
    type Item = Result<MatchCount, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                State::Accumulating => {
                    let mut tallies: IndexMap<String, u64> = IndexMap::new();

                    for item in self.matches.by_ref() {
                        let value = match item {
                            Ok(value) => value,
                            Err(err) => {
                                // no partial results: drop the counts and
                                // move straight to an empty emission
                                self.state = State::Emitting(Vec::new().into_iter());
                                return Some(Err(err));
                            }
                        };

                        let value = match self.strip_prefix.as_deref() {
                            Some(prefix) => {
                                value.strip_prefix(prefix).unwrap_or(value.as_str()).to_string()
                            }
                            None => value,
                        };

                        *tallies.entry(value).or_insert(0) += 1;
                    }

                    let mut entries: Vec<MatchCount> = tallies
                        .into_iter()
                        .map(|(value, count)| MatchCount { count, value })
                        .collect();
                    // stable sort: equal counts keep first-seen order
                    entries.sort_by(|a, b| b.count.cmp(&a.count));

                    self.state = State::Emitting(entries.into_iter());
                }
                State::Emitting(ref mut entries) => return entries.next().map(Ok),
            }
        }
    }
}

/// Run the count command
pub fn run_count(
    root: &Path,
    pattern: &str,
    glob_pattern: &str,
    strip_prefix: Option<&str>,
    config: RenderConfig,
) -> Result<()> {
    let entries: Vec<MatchCount> =
        crate::pipeline::frequencies(root, glob_pattern, pattern, strip_prefix)?
            .collect::<Result<_, _>>()?;

    let result_set: ResultSet = entries
        .into_iter()
        .map(|entry| ResultItem::count(entry.count, entry.value))
        .collect();

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}
