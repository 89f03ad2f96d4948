//! User preference state: exception words and enable toggles.
//!
//! Holds everything the user curates by explicit action: ignored words and
//! dictionary words (each either global or scoped to one file), the global
//! disable flag and the per-file disable set. Matching is case-insensitive,
//! storage is case-preserving. Persisted as TOML in the user config
//! directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellCheckError};

/// Where an exception word or toggle applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Global,
    File(PathBuf),
}

/// The two user-curated word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordList {
    Ignored,
    Dictionary,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub ignored_words: Vec<String>,
    #[serde(default)]
    pub dictionary_words: Vec<String>,
    #[serde(default)]
    pub ignored_words_per_file: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub dictionary_words_per_file: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub disabled_files: Vec<String>,
    /// Where `save` writes; `None` means the default config location.
    #[serde(skip)]
    storage: Option<PathBuf>,
}

fn file_key(path: &Path) -> String {
    path.display().to_string()
}

impl Preferences {
    pub fn prefs_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("typoscope")
            .join("preferences.toml")
    }

    /// Load from the default location, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        Self::load_from(&Self::prefs_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let mut prefs = if path.exists() {
            std::fs::read_to_string(path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        };
        prefs.storage = Some(path.to_path_buf());
        prefs
    }

    /// Redirect persistence to `path`. Tests use this to stay out of the
    /// real config directory.
    pub fn with_storage(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage = Some(path.into());
        self
    }

    pub fn save(&self) -> Result<()> {
        let path = self
            .storage
            .clone()
            .unwrap_or_else(Self::prefs_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SpellCheckError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    fn words(&self, list: WordList, scope: &Scope) -> Option<&Vec<String>> {
        match (list, scope) {
            (WordList::Ignored, Scope::Global) => Some(&self.ignored_words),
            (WordList::Dictionary, Scope::Global) => Some(&self.dictionary_words),
            (WordList::Ignored, Scope::File(path)) => {
                self.ignored_words_per_file.get(&file_key(path))
            }
            (WordList::Dictionary, Scope::File(path)) => {
                self.dictionary_words_per_file.get(&file_key(path))
            }
        }
    }

    fn words_mut(&mut self, list: WordList, scope: &Scope) -> &mut Vec<String> {
        match (list, scope) {
            (WordList::Ignored, Scope::Global) => &mut self.ignored_words,
            (WordList::Dictionary, Scope::Global) => &mut self.dictionary_words,
            (WordList::Ignored, Scope::File(path)) => self
                .ignored_words_per_file
                .entry(file_key(path))
                .or_default(),
            (WordList::Dictionary, Scope::File(path)) => self
                .dictionary_words_per_file
                .entry(file_key(path))
                .or_default(),
        }
    }

    /// Add `word` to a list, case-preserving, skipping case-insensitive
    /// duplicates. Returns whether anything changed.
    pub fn add_word(&mut self, list: WordList, scope: &Scope, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        let entries = self.words_mut(list, scope);
        if entries
            .iter()
            .any(|w| w.to_lowercase() == word.to_lowercase())
        {
            return false;
        }
        entries.push(word.to_string());
        true
    }

    /// Remove `word` from a list, matching case-insensitively. Returns
    /// whether anything changed.
    pub fn remove_word(&mut self, list: WordList, scope: &Scope, word: &str) -> bool {
        let lowered = word.trim().to_lowercase();
        let entries = self.words_mut(list, scope);
        let before = entries.len();
        entries.retain(|w| w.to_lowercase() != lowered);
        entries.len() != before
    }

    /// Case-insensitive membership check for one scope.
    pub fn contains(&self, list: WordList, scope: &Scope, word: &str) -> bool {
        let lowered = word.to_lowercase();
        self.words(list, scope)
            .map(|entries| entries.iter().any(|w| w.to_lowercase() == lowered))
            .unwrap_or(false)
    }

    /// Global plus per-file words for an engine request. Duplicates are
    /// permitted; de-duplication is the engine's job.
    pub fn words_for(&self, list: WordList, path: &Path) -> Vec<String> {
        let mut words = match list {
            WordList::Ignored => self.ignored_words.clone(),
            WordList::Dictionary => self.dictionary_words.clone(),
        };
        if let Some(extra) = self.words(list, &Scope::File(path.to_path_buf())) {
            words.extend(extra.iter().cloned());
        }
        words
    }

    /// Whether checking is active for `path`, honoring both the global flag
    /// and the per-file disable set.
    pub fn is_enabled_for(&self, path: &Path) -> bool {
        if self.disabled {
            return false;
        }
        let key = file_key(path);
        !self.disabled_files.iter().any(|f| *f == key)
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_file_disabled(&mut self, path: &Path, disabled: bool) {
        let key = file_key(path);
        if disabled {
            if !self.disabled_files.contains(&key) {
                self.disabled_files.push(key);
            }
        } else {
            self.disabled_files.retain(|f| *f != key);
        }
    }
}
