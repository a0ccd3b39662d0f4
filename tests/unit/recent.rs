//! Recent-searches persistence.

use newsrank::{RecentSearches, MAX_RECENT};
use std::fs;

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recent.json");

    let mut recent = RecentSearches::new();
    recent.record("ai chips");
    recent.record("quantum computing");
    recent.save(&path).unwrap();

    let loaded = RecentSearches::load(&path).unwrap();
    assert_eq!(loaded, recent);
    let entries: Vec<_> = loaded.iter().collect();
    assert_eq!(entries, vec!["quantum computing", "ai chips"]);
}

#[test]
fn loading_a_missing_file_yields_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");

    let recent = RecentSearches::load(&path).unwrap();
    assert!(recent.is_empty());
}

#[test]
fn loading_corrupt_data_is_invalid_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recent.json");
    fs::write(&path, "{{{not json").unwrap();

    let err = RecentSearches::load(&path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn list_written_by_an_older_client_is_recapped_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recent.json");
    fs::write(&path, r#"["a","b","c","d","e","f","g","h"]"#).unwrap();

    let recent = RecentSearches::load(&path).unwrap();
    assert_eq!(recent.len(), MAX_RECENT);
    assert_eq!(recent.iter().next(), Some("a"));
}

#[test]
fn recording_across_sessions_preserves_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recent.json");

    let mut session_one = RecentSearches::new();
    session_one.record("first");
    session_one.save(&path).unwrap();

    let mut session_two = RecentSearches::load(&path).unwrap();
    session_two.record("second");
    session_two.save(&path).unwrap();

    let final_state = RecentSearches::load(&path).unwrap();
    let entries: Vec<_> = final_state.iter().collect();
    assert_eq!(entries, vec!["second", "first"]);
}
