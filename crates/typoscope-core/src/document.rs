//! Text source seam between the host editor and the checker core.

use std::sync::RwLock;

/// Read access to the text of one open document. The host editor implements
/// this over its buffer; [`MemoryDocument`] backs tests and hosts that keep
/// plain strings.
pub trait TextSource: Send + Sync {
    /// Full document text.
    fn text(&self) -> String;

    /// Text of line `n` (zero-indexed), without the trailing newline.
    fn line(&self, n: usize) -> Option<String>;

    /// Number of lines in the document.
    fn line_count(&self) -> usize;
}

/// What kind of edit a change notification describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A single-character insertion.
    Insert,
    /// A single-character deletion.
    Delete,
    /// Anything else: paste, cut, undo/redo, a multi-edit batch.
    Other,
}

/// Change notification from the host, with the affected line range
/// (inclusive on both ends).
#[derive(Debug, Clone, Copy)]
pub struct ChangeEvent {
    pub from_line: usize,
    pub to_line: usize,
    pub kind: ChangeKind,
}

impl ChangeEvent {
    /// Whether this edit is narrow enough to re-check only its own line.
    /// Paste/cut/batch edits and anything spanning lines force a full check.
    pub fn is_line_scoped(&self) -> bool {
        self.from_line == self.to_line && self.kind != ChangeKind::Other
    }
}

/// In-memory [`TextSource`] over a plain string.
pub struct MemoryDocument {
    text: RwLock<String>,
}

impl MemoryDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: RwLock::new(text.into()),
        }
    }

    /// Replace the whole document text. The host still has to deliver the
    /// matching change notification itself.
    pub fn set_text(&self, text: impl Into<String>) {
        let mut guard = self.text.write().unwrap_or_else(|e| e.into_inner());
        *guard = text.into();
    }
}

impl TextSource for MemoryDocument {
    fn text(&self) -> String {
        self.text
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn line(&self, n: usize) -> Option<String> {
        self.text
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .lines()
            .nth(n)
            .map(str::to_string)
    }

    fn line_count(&self) -> usize {
        self.text
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .lines()
            .count()
    }
}
