//! Check request construction.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Which part of the document a check covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckRange {
    Full,
    /// Inclusive line span.
    Lines { from: usize, to: usize },
}

impl CheckRange {
    /// Smallest range covering both `self` and `other`. A full range
    /// absorbs everything.
    pub fn union(self, other: CheckRange) -> CheckRange {
        match (self, other) {
            (CheckRange::Lines { from: a, to: b }, CheckRange::Lines { from: c, to: d }) => {
                CheckRange::Lines {
                    from: a.min(c),
                    to: b.max(d),
                }
            }
            _ => CheckRange::Full,
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, CheckRange::Full)
    }

    /// First document line the range covers.
    pub fn from_line(&self) -> usize {
        match self {
            CheckRange::Full => 0,
            CheckRange::Lines { from, .. } => *from,
        }
    }
}

/// Payload sent to the engine. Wire field names follow the engine's
/// camelCase contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    /// Exactly the text of the requested range, newline-joined.
    pub content: String,
    pub file_path: String,
    /// Global plus per-file ignored words. Duplicates permitted; the engine
    /// de-duplicates.
    pub ignore_words: Vec<String>,
    /// Global plus per-file user dictionary words.
    pub dictionary_words: Vec<String>,
}

impl CheckRequest {
    /// Build a request for `range` against the current document text.
    pub fn build(
        range: CheckRange,
        text: &str,
        path: &Path,
        ignore_words: Vec<String>,
        dictionary_words: Vec<String>,
    ) -> Self {
        let content = match range {
            CheckRange::Full => text.to_string(),
            CheckRange::Lines { from, to } => text
                .lines()
                .skip(from)
                .take(to.saturating_sub(from) + 1)
                .collect::<Vec<_>>()
                .join("\n"),
        };
        Self {
            content,
            file_path: path.display().to_string(),
            ignore_words,
            dictionary_words,
        }
    }
}
