//! Per-document scheduling state machine.
//!
//! Pure state: which range is pending, how many checks are in flight, and
//! the generation counter that detects stale completions. Timing (the edit
//! debounce and the periodic full re-check) is driven from the session
//! actor so this piece stays synchronous and directly testable.

use crate::check::CheckRange;
use crate::document::ChangeEvent;

/// A check that has been issued to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckJob {
    pub range: CheckRange,
    /// Generation the job was tagged with at issue time.
    pub generation: u64,
}

/// What to do with a completed job's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The generation is unchanged since issuance; apply the result.
    Apply,
    /// A full check superseded this job while it was in flight; discard the
    /// result entirely.
    Stale,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Option<CheckRange>,
    in_flight: usize,
    generation: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit. Returns `true` when the debounce timer should be
    /// (re)armed. A line-scoped edit coalesces with a pending line range
    /// into the union of the spans; anything wider supersedes the pending
    /// range with a full check.
    pub fn note_edit(&mut self, change: &ChangeEvent) -> bool {
        let incoming = if change.is_line_scoped() {
            CheckRange::Lines {
                from: change.from_line,
                to: change.to_line,
            }
        } else {
            CheckRange::Full
        };
        self.pending = Some(match self.pending.take() {
            Some(prev) => prev.union(incoming),
            None => incoming,
        });
        true
    }

    /// Queue a full check (periodic self-heal timer). Supersedes any pending
    /// line range; returns `true` so the caller re-arms the debounce.
    pub fn request_full(&mut self) -> bool {
        self.pending = Some(CheckRange::Full);
        true
    }

    /// Whether the pending range may begin. Queued pendings wait for
    /// in-flight work to complete; only [`Self::begin_full_now`] bypasses
    /// the queue.
    pub fn ready(&self) -> bool {
        self.pending.is_some() && self.in_flight == 0
    }

    /// Take the pending range and mark it in flight. Full checks bump the
    /// generation; line checks are tagged with the current value.
    pub fn begin_pending(&mut self) -> Option<CheckJob> {
        if self.in_flight > 0 {
            return None;
        }
        let range = self.pending.take()?;
        Some(self.begin(range))
    }

    /// Issue a full check immediately, bypassing queue and debounce. Used
    /// for document activation and explicit user commands; it may race an
    /// in-flight line check, which the generation bump then invalidates.
    pub fn begin_full_now(&mut self) -> CheckJob {
        // any queued pending is redundant once the whole document re-checks
        self.pending = None;
        self.begin(CheckRange::Full)
    }

    fn begin(&mut self, range: CheckRange) -> CheckJob {
        if range.is_full() {
            self.generation += 1;
        }
        self.in_flight += 1;
        CheckJob {
            range,
            generation: self.generation,
        }
    }

    /// Record a job completion and decide whether its result still stands.
    pub fn finish(&mut self, job: &CheckJob) -> Outcome {
        self.in_flight = self.in_flight.saturating_sub(1);
        if job.generation == self.generation {
            Outcome::Apply
        } else {
            Outcome::Stale
        }
    }

    pub fn is_checking(&self) -> bool {
        self.in_flight > 0
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop queued work and invalidate in-flight results. Used when the
    /// issue cache is cleared after an engine failure or when checking is
    /// disabled for the document.
    pub fn reset(&mut self) {
        self.pending = None;
        self.generation += 1;
    }
}
