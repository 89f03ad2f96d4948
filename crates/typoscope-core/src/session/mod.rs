//! Per-document check sessions.
//!
//! Each open document gets an actor task owning its scheduler state and its
//! cached issues; [`CheckManager`] is the host-facing handle that routes
//! change notifications and user commands to the right session. All cache
//! mutation happens inside one actor, so the only cross-operation ordering
//! hazard is the stale-response race, which the scheduler's generation
//! counter resolves without locking.

pub mod scheduler;

use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::check::{merge, normalize, offset_of_line, CheckRange, CheckRequest, Issue};
use crate::config::CheckSettings;
use crate::document::{ChangeEvent, TextSource};
use crate::engine::{EngineIssue, SpellEngine};
use crate::error::Result;
use crate::prefs::{Preferences, Scope, WordList};
use scheduler::{CheckJob, Outcome, Scheduler};

/// Events the core emits for the host UI to consume.
#[derive(Debug, Clone)]
pub enum CheckEvent {
    /// A document's issue set changed; replace any markers shown for it.
    IssuesUpdated { path: PathBuf, issues: Vec<Issue> },
    /// A check failed and the document's cached issues were cleared.
    CheckFailed { path: PathBuf },
}

enum SessionCommand {
    Changed(ChangeEvent),
    CheckNow,
    Clear,
    Shutdown,
}

struct SessionHandle {
    tx: mpsc::UnboundedSender<SessionCommand>,
}

/// Host-facing manager: one session per open document. Sessions for
/// different documents are fully independent; they share only the engine
/// handle and the (read-mostly) preferences.
pub struct CheckManager {
    sessions: HashMap<PathBuf, SessionHandle>,
    engine: Arc<dyn SpellEngine>,
    prefs: Arc<RwLock<Preferences>>,
    settings: CheckSettings,
    event_tx: mpsc::UnboundedSender<CheckEvent>,
}

impl CheckManager {
    pub fn new(
        engine: Arc<dyn SpellEngine>,
        prefs: Preferences,
        settings: CheckSettings,
        event_tx: mpsc::UnboundedSender<CheckEvent>,
    ) -> Self {
        Self {
            sessions: HashMap::new(),
            engine,
            prefs: Arc::new(RwLock::new(prefs)),
            settings,
            event_tx,
        }
    }

    /// Open (or re-activate) a document. Spawns a session actor when none
    /// exists and issues an immediate full check either way.
    pub fn open_document(&mut self, path: &Path, source: Arc<dyn TextSource>) {
        if let Some(handle) = self.sessions.get(path) {
            let _ = handle.tx.send(SessionCommand::CheckNow);
            return;
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let session = Session {
            path: path.to_path_buf(),
            source,
            engine: self.engine.clone(),
            prefs: self.prefs.clone(),
            settings: self.settings,
            event_tx: self.event_tx.clone(),
            scheduler: Scheduler::new(),
            issues: Vec::new(),
        };
        tokio::spawn(session.run(rx));

        let _ = tx.send(SessionCommand::CheckNow);
        self.sessions
            .insert(path.to_path_buf(), SessionHandle { tx });
        info!("opened spell-check session for {}", path.display());
    }

    /// Deliver a change notification from the host editor. Unknown
    /// documents are a silent no-op.
    pub fn document_changed(&self, path: &Path, change: ChangeEvent) {
        if let Some(handle) = self.sessions.get(path) {
            let _ = handle.tx.send(SessionCommand::Changed(change));
        }
    }

    /// Force an immediate full check, bypassing the debounce. No-op for
    /// unknown documents.
    pub fn check_now(&self, path: &Path) {
        if let Some(handle) = self.sessions.get(path) {
            let _ = handle.tx.send(SessionCommand::CheckNow);
        }
    }

    /// Close a document and shut its session down. In-flight engine calls
    /// are abandoned.
    pub fn close_document(&mut self, path: &Path) {
        if let Some(handle) = self.sessions.remove(path) {
            let _ = handle.tx.send(SessionCommand::Shutdown);
            info!("closed spell-check session for {}", path.display());
        }
    }

    /// Add a word to an exception list, persist the preferences, and
    /// re-check the document the word came from.
    pub fn add_word(&self, list: WordList, scope: Scope, word: &str, recheck: &Path) -> Result<()> {
        {
            let mut prefs = self.prefs.write().unwrap_or_else(|e| e.into_inner());
            if prefs.add_word(list, &scope, word) {
                prefs.save()?;
            }
        }
        self.check_now(recheck);
        Ok(())
    }

    /// Remove a word from an exception list, persist, and re-check.
    pub fn remove_word(
        &self,
        list: WordList,
        scope: Scope,
        word: &str,
        recheck: &Path,
    ) -> Result<()> {
        {
            let mut prefs = self.prefs.write().unwrap_or_else(|e| e.into_inner());
            if prefs.remove_word(list, &scope, word) {
                prefs.save()?;
            }
        }
        self.check_now(recheck);
        Ok(())
    }

    /// Toggle the spell checker globally. Disabling clears every session's
    /// issues; enabling triggers a full check everywhere.
    pub fn set_enabled(&self, enabled: bool) -> Result<()> {
        {
            let mut prefs = self.prefs.write().unwrap_or_else(|e| e.into_inner());
            prefs.set_disabled(!enabled);
            prefs.save()?;
        }
        for handle in self.sessions.values() {
            let _ = handle.tx.send(if enabled {
                SessionCommand::CheckNow
            } else {
                SessionCommand::Clear
            });
        }
        Ok(())
    }

    /// Toggle the spell checker for one file.
    pub fn set_enabled_for_file(&self, path: &Path, enabled: bool) -> Result<()> {
        {
            let mut prefs = self.prefs.write().unwrap_or_else(|e| e.into_inner());
            prefs.set_file_disabled(path, !enabled);
            prefs.save()?;
        }
        if let Some(handle) = self.sessions.get(path) {
            let _ = handle.tx.send(if enabled {
                SessionCommand::CheckNow
            } else {
                SessionCommand::Clear
            });
        }
        Ok(())
    }

    pub fn is_open(&self, path: &Path) -> bool {
        self.sessions.contains_key(path)
    }
}

/// Everything a completed engine call carries back to the actor. The line
/// base and offset adjustment are snapshotted at issue time, against the
/// same text the request content was cut from.
struct Completed {
    job: CheckJob,
    from_line: usize,
    adjustment: usize,
    result: Result<Vec<EngineIssue>>,
}

type InFlight = FuturesUnordered<Pin<Box<dyn Future<Output = Completed> + Send>>>;

struct Session {
    path: PathBuf,
    source: Arc<dyn TextSource>,
    engine: Arc<dyn SpellEngine>,
    prefs: Arc<RwLock<Preferences>>,
    settings: CheckSettings,
    event_tx: mpsc::UnboundedSender<CheckEvent>,
    scheduler: Scheduler,
    issues: Vec<Issue>,
}

impl Session {
    async fn run(mut self, mut rx: mpsc::UnboundedReceiver<SessionCommand>) {
        let debounce = Duration::from_millis(self.settings.debounce_ms);
        let period = Duration::from_secs(self.settings.full_recheck_secs.max(1));
        let mut recheck = tokio::time::interval_at(Instant::now() + period, period);
        let mut in_flight: InFlight = FuturesUnordered::new();
        let mut deadline = Instant::now();
        let mut armed = false;

        loop {
            tokio::select! {
                cmd = rx.recv() => match cmd {
                    Some(SessionCommand::Changed(change)) => {
                        if self.enabled() && self.scheduler.note_edit(&change) {
                            deadline = Instant::now() + debounce;
                            armed = true;
                        }
                    }
                    Some(SessionCommand::CheckNow) => {
                        if self.enabled() {
                            let job = self.scheduler.begin_full_now();
                            self.issue_job(job, &mut in_flight);
                            recheck.reset();
                        }
                    }
                    Some(SessionCommand::Clear) => {
                        self.scheduler.reset();
                        self.issues.clear();
                        armed = false;
                        let _ = self.event_tx.send(CheckEvent::IssuesUpdated {
                            path: self.path.clone(),
                            issues: Vec::new(),
                        });
                    }
                    Some(SessionCommand::Shutdown) | None => break,
                },
                _ = tokio::time::sleep_until(deadline), if armed => {
                    armed = false;
                    // with a check still in flight the pending range stays
                    // queued and is picked up on completion
                    if let Some(job) = self.scheduler.begin_pending() {
                        if job.range.is_full() {
                            recheck.reset();
                        }
                        self.issue_job(job, &mut in_flight);
                    }
                }
                Some(done) = in_flight.next() => {
                    self.on_complete(done);
                    if !armed {
                        if let Some(job) = self.scheduler.begin_pending() {
                            if job.range.is_full() {
                                recheck.reset();
                            }
                            self.issue_job(job, &mut in_flight);
                        }
                    }
                }
                _ = recheck.tick() => {
                    if self.enabled() && self.scheduler.request_full() {
                        deadline = Instant::now() + debounce;
                        armed = true;
                    }
                }
            }
        }
        debug!("spell-check session for {} shut down", self.path.display());
    }

    fn enabled(&self) -> bool {
        self.prefs
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_enabled_for(&self.path)
    }

    /// Snapshot the text and exception lists, build the request and push
    /// the engine call into the in-flight set. Empty content short-circuits
    /// to an empty result without an engine round-trip.
    fn issue_job(&self, job: CheckJob, in_flight: &mut InFlight) {
        let text = self.source.text();
        let from_line = job.range.from_line();
        let adjustment = match job.range {
            CheckRange::Full => 0,
            CheckRange::Lines { from, .. } => offset_of_line(&text, from),
        };

        let (ignore_words, dictionary_words) = {
            let prefs = self.prefs.read().unwrap_or_else(|e| e.into_inner());
            (
                prefs.words_for(WordList::Ignored, &self.path),
                prefs.words_for(WordList::Dictionary, &self.path),
            )
        };
        let request =
            CheckRequest::build(job.range, &text, &self.path, ignore_words, dictionary_words);

        if request.content.is_empty() {
            in_flight.push(Box::pin(async move {
                Completed {
                    job,
                    from_line,
                    adjustment,
                    result: Ok(Vec::new()),
                }
            }));
            return;
        }

        let engine = self.engine.clone();
        in_flight.push(Box::pin(async move {
            let result = engine.check(&request).await;
            Completed {
                job,
                from_line,
                adjustment,
                result,
            }
        }));
    }

    fn on_complete(&mut self, done: Completed) {
        if self.scheduler.finish(&done.job) == Outcome::Stale {
            debug!(
                "discarding stale spell-check result for {}",
                self.path.display()
            );
            return;
        }

        match done.result {
            Ok(raw) => {
                let fresh = normalize(raw, done.from_line, done.adjustment);
                self.issues = match done.job.range {
                    CheckRange::Full => fresh,
                    CheckRange::Lines { from, to } => {
                        merge(std::mem::take(&mut self.issues), from, to, fresh)
                    }
                };
                let _ = self.event_tx.send(CheckEvent::IssuesUpdated {
                    path: self.path.clone(),
                    issues: self.issues.clone(),
                });
            }
            Err(e) => {
                warn!("spell check failed for {}: {e}", self.path.display());
                self.issues.clear();
                self.scheduler.reset();
                let _ = self.event_tx.send(CheckEvent::CheckFailed {
                    path: self.path.clone(),
                });
            }
        }
    }
}
