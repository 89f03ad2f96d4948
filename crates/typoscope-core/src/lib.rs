//! Typoscope core: spell-check integration for editor hosts.
//!
//! This crate is the glue between an editor and an out-of-process spell-check
//! engine: it builds check requests from document text, paces them behind a
//! debounce, normalizes the engine's substring-relative offsets back into
//! document coordinates, and merges partial results into the per-document
//! issue cache. The engine itself (tokenization, dictionary lookup,
//! suggestion ranking) lives behind the [`SpellEngine`] trait; the
//! `typoscope-engine` crate implements it over a JSON-RPC sidecar process.

pub mod check;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod fix;
pub mod prefs;
pub mod session;

// Re-export key types
pub use check::{CheckRange, CheckRequest, Issue};
pub use config::Settings;
pub use document::{ChangeEvent, ChangeKind, MemoryDocument, TextSource};
pub use engine::{EngineIssue, SpellEngine};
pub use error::{Result, SpellCheckError};
pub use fix::TypoFix;
pub use prefs::{Preferences, Scope, WordList};
pub use session::{CheckEvent, CheckManager};
