//! Merging fresh line-range results into the cached issue set.

use super::issue::Issue;

/// Replace the issues for lines `from..=to` with `fresh`, keeping cached
/// issues on untouched lines. Output order: cached issues before the range,
/// cached issues after it, then the fresh issues. Consumers must not rely on
/// issue order; this one is kept deterministic for testability.
pub fn merge(previous: Vec<Issue>, from: usize, to: usize, fresh: Vec<Issue>) -> Vec<Issue> {
    let (before, after): (Vec<_>, Vec<_>) = previous
        .into_iter()
        .filter(|issue| issue.line_number < from || issue.line_number > to)
        .partition(|issue| issue.line_number < from);

    let mut merged = before;
    merged.extend(after);
    merged.extend(fresh);
    merged
}
