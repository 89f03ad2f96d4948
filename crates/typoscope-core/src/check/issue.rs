//! Issue model and offset normalization.

use serde::{Deserialize, Serialize};

use crate::engine::EngineIssue;

/// One misspelling occurrence, positioned against the full document.
///
/// `document_offset` always equals the document-absolute position of
/// `line_char_start` on `line_number`; [`normalize`] establishes this for
/// engine output and merging preserves it. All offsets count Unicode scalar
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// The misspelled token.
    pub word: String,
    /// Best correction candidate, if the engine offered one.
    pub suggestion: Option<String>,
    /// Absolute character offset in the full document.
    pub document_offset: usize,
    /// Zero-indexed line number.
    pub line_number: usize,
    /// Start column within the line.
    pub line_char_start: usize,
    /// End column within the line (`line_char_start` plus word length).
    pub line_char_end: usize,
    /// Full text of the containing line. Informational only.
    pub line_text: String,
}

/// Character offset of the start of `line` in `text`: the lengths of all
/// preceding lines plus one separator character each.
pub fn offset_of_line(text: &str, line: usize) -> usize {
    text.lines()
        .take(line)
        .map(|l| l.chars().count() + 1)
        .sum()
}

/// Convert engine issues, whose offsets are relative to the checked
/// substring, into document-absolute coordinates. `from_line` is the line
/// the substring starts on and `offset_adjustment` is the document offset of
/// that line's start.
///
/// Line-relative columns are computed from the raw offsets before the
/// adjustment is applied; the adjustment cancels out within a line.
pub fn normalize(
    raw: Vec<EngineIssue>,
    from_line: usize,
    offset_adjustment: usize,
) -> Vec<Issue> {
    raw.into_iter()
        .map(|issue| {
            let line_char_start = issue.offset.saturating_sub(issue.line.offset);
            Issue {
                suggestion: issue
                    .suggestions
                    .into_iter()
                    .next()
                    .filter(|s| !s.trim().is_empty()),
                word: issue.text,
                document_offset: issue.offset + offset_adjustment,
                line_number: issue.line.position.line + from_line,
                line_char_start,
                line_char_end: line_char_start + issue.length,
                line_text: issue.line.text,
            }
        })
        .collect()
}
