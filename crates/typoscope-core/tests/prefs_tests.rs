use std::path::PathBuf;

use typoscope_core::{Preferences, Scope, WordList};

fn scope_for(path: &str) -> Scope {
    Scope::File(PathBuf::from(path))
}

#[test]
fn test_add_word_preserves_case_and_rejects_duplicates() {
    let mut prefs = Preferences::default();
    assert!(prefs.add_word(WordList::Ignored, &Scope::Global, "Teh"));
    assert_eq!(prefs.ignored_words, vec!["Teh".to_string()]);

    // duplicates match case-insensitively
    assert!(!prefs.add_word(WordList::Ignored, &Scope::Global, "teh"));
    assert!(!prefs.add_word(WordList::Ignored, &Scope::Global, "TEH"));
    assert_eq!(prefs.ignored_words.len(), 1);
}

#[test]
fn test_add_word_trims_and_rejects_blank() {
    let mut prefs = Preferences::default();
    assert!(!prefs.add_word(WordList::Dictionary, &Scope::Global, "   "));
    assert!(prefs.add_word(WordList::Dictionary, &Scope::Global, "  wrds "));
    assert_eq!(prefs.dictionary_words, vec!["wrds".to_string()]);
}

#[test]
fn test_remove_word_matches_case_insensitively() {
    let mut prefs = Preferences::default();
    prefs.add_word(WordList::Ignored, &Scope::Global, "Teh");
    assert!(prefs.remove_word(WordList::Ignored, &Scope::Global, "TEH"));
    assert!(prefs.ignored_words.is_empty());
    assert!(!prefs.remove_word(WordList::Ignored, &Scope::Global, "teh"));
}

#[test]
fn test_contains_checks_one_scope_only() {
    let mut prefs = Preferences::default();
    let scope = scope_for("/tmp/a.md");
    prefs.add_word(WordList::Ignored, &scope, "teh");

    assert!(prefs.contains(WordList::Ignored, &scope, "Teh"));
    assert!(!prefs.contains(WordList::Ignored, &Scope::Global, "teh"));
    assert!(!prefs.contains(WordList::Ignored, &scope_for("/tmp/b.md"), "teh"));
    assert!(!prefs.contains(WordList::Dictionary, &scope, "teh"));
}

#[test]
fn test_words_for_unions_global_and_file_lists() {
    let mut prefs = Preferences::default();
    let path = PathBuf::from("/tmp/a.md");
    prefs.add_word(WordList::Ignored, &Scope::Global, "alpha");
    prefs.add_word(WordList::Ignored, &Scope::File(path.clone()), "beta");
    prefs.add_word(
        WordList::Ignored,
        &scope_for("/tmp/other.md"),
        "gamma",
    );

    let words = prefs.words_for(WordList::Ignored, &path);
    assert_eq!(words, vec!["alpha".to_string(), "beta".to_string()]);
}

#[test]
fn test_enable_toggles() {
    let mut prefs = Preferences::default();
    let a = PathBuf::from("/tmp/a.md");
    let b = PathBuf::from("/tmp/b.md");
    assert!(prefs.is_enabled_for(&a));

    prefs.set_file_disabled(&a, true);
    assert!(!prefs.is_enabled_for(&a));
    assert!(prefs.is_enabled_for(&b));

    prefs.set_disabled(true);
    assert!(!prefs.is_enabled_for(&b));

    prefs.set_disabled(false);
    prefs.set_file_disabled(&a, false);
    assert!(prefs.is_enabled_for(&a));
}

#[test]
fn test_save_and_load_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("preferences.toml");

    let mut prefs = Preferences::default().with_storage(&file);
    prefs.add_word(WordList::Ignored, &Scope::Global, "Teh");
    prefs.add_word(WordList::Dictionary, &scope_for("/tmp/a.md"), "wrds");
    prefs.set_file_disabled(&PathBuf::from("/tmp/b.md"), true);
    prefs.save().unwrap();

    let loaded = Preferences::load_from(&file);
    assert_eq!(loaded.ignored_words, vec!["Teh".to_string()]);
    assert!(loaded.contains(WordList::Dictionary, &scope_for("/tmp/a.md"), "WRDS"));
    assert!(!loaded.is_enabled_for(&PathBuf::from("/tmp/b.md")));
}

#[test]
fn test_load_from_missing_file_returns_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let prefs = Preferences::load_from(&tmp.path().join("nope.toml"));
    assert!(prefs.ignored_words.is_empty());
    assert!(!prefs.disabled);
    assert!(prefs.is_enabled_for(&PathBuf::from("/tmp/a.md")));
}

#[test]
fn test_load_from_malformed_file_returns_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("preferences.toml");
    std::fs::write(&file, "not = [valid").unwrap();

    let prefs = Preferences::load_from(&file);
    assert!(prefs.ignored_words.is_empty());

    // the loaded copy still saves back to the same file
    let mut prefs = prefs;
    prefs.add_word(WordList::Ignored, &Scope::Global, "teh");
    prefs.save().unwrap();
    assert!(Preferences::load_from(&file).contains(
        WordList::Ignored,
        &Scope::Global,
        "teh"
    ));
}
