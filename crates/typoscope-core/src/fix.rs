//! Cursor queries and typo fixes.

use crate::check::Issue;

/// A replacement the host applies to correct one misspelling. Offsets are
/// absolute character positions in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypoFix {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

/// The issue whose word contains the cursor, if any. Column bounds are
/// inclusive so a cursor sitting just after the last character still hits.
pub fn issue_at(issues: &[Issue], line: usize, ch: usize) -> Option<&Issue> {
    issues.iter().find(|issue| {
        issue.line_number == line && ch >= issue.line_char_start && ch <= issue.line_char_end
    })
}

/// Whether the cursor position sits on a misspelled word. Hosts use this to
/// enable or disable their menu entries.
pub fn is_misspelled_at(issues: &[Issue], line: usize, ch: usize) -> bool {
    issue_at(issues, line, ch).is_some()
}

/// Fix for one issue. `None` when the engine offered no usable suggestion.
pub fn fix_for(issue: &Issue) -> Option<TypoFix> {
    let replacement = issue.suggestion.as_deref()?.trim();
    if replacement.is_empty() {
        return None;
    }
    Some(TypoFix {
        start: issue.document_offset,
        end: issue.document_offset + issue.word.chars().count(),
        replacement: replacement.to_string(),
    })
}

/// Fixes for every issue carrying a suggestion, ordered back to front so
/// applying them one by one leaves earlier offsets valid.
pub fn fixes_for_all(issues: &[Issue]) -> Vec<TypoFix> {
    let mut fixes: Vec<TypoFix> = issues.iter().filter_map(fix_for).collect();
    fixes.sort_by(|a, b| b.start.cmp(&a.start));
    fixes
}

/// Apply fixes to a text snapshot. Fixes must be non-overlapping and
/// ordered back to front, as produced by [`fixes_for_all`].
pub fn apply_fixes(text: &str, fixes: &[TypoFix]) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    for fix in fixes {
        if fix.start > fix.end || fix.end > chars.len() {
            continue;
        }
        chars.splice(fix.start..fix.end, fix.replacement.chars());
    }
    chars.into_iter().collect()
}
