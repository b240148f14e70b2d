//! JSON file store: persistence, legacy import and damaged files.

use std::fs;

use token_namer_engine::store::{JsonFileStore, Store, HISTORY_FILE, PREFERENCES_FILE, PREF_FORMAT};
use token_namer_engine::{HistoryEntry, HistoryLog, NameStyle, Session, StoreError};
use token_namer_test_helpers::{session_with, BUTTON_BACKGROUND};
use token_namer_vocabulary::Framework;

#[test]
fn missing_files_read_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("absent"));
    assert!(store.load_history().unwrap().is_empty());
    assert_eq!(store.load_preference(PREF_FORMAT).unwrap(), None);
}

#[test]
fn history_round_trips_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let session = session_with(Framework::Component, BUTTON_BACKGROUND).unwrap();
    let entry = HistoryEntry::record(session.state(), NameStyle::Slash);

    let mut log = HistoryLog::open(JsonFileStore::new(dir.path()));
    log.add(entry.clone());
    assert!(dir.path().join(HISTORY_FILE).exists());

    let reopened = HistoryLog::open(JsonFileStore::new(dir.path()));
    assert_eq!(reopened.entries(), &[entry]);
}

#[test]
fn preferences_are_merged_not_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path());
    store.save_preference("format", "dot").unwrap();
    store.save_preference("framework", "semantic").unwrap();

    let session = Session::open(JsonFileStore::new(dir.path()));
    assert_eq!(session.style(), NameStyle::Dot);
    assert_eq!(session.active(), Framework::Semantic);
}

#[test]
fn legacy_items_are_normalized_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let legacy = serde_json::json!([
        { "category": "color", "set": "blue", "step": "600", "variant": "muted", "ts": 1_690_000_000_000_i64 },
        { "domain": "admin", "object": "heading", "role": "text" },
        { "something": "else" }
    ]);
    fs::write(dir.path().join(HISTORY_FILE), legacy.to_string()).unwrap();

    let entries = JsonFileStore::new(dir.path()).load_history().unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.token_name.as_str()).collect();
    assert_eq!(names, vec!["color/blue/600/muted", "admin/text/heading"]);
}

#[test]
fn legacy_ids_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let legacy = serde_json::json!([
        { "category": "color", "set": "blue", "step": "600" },
        { "domain": "admin", "object": "heading", "role": "text" }
    ]);
    fs::write(dir.path().join(HISTORY_FILE), legacy.to_string()).unwrap();

    let listed = Session::open(JsonFileStore::new(dir.path()));
    let first_id = listed.history()[0].id;

    let mut session = Session::open(JsonFileStore::new(dir.path()));
    assert_eq!(session.history()[0].id, first_id);
    let remaining = session.remove_history(first_id).unwrap();
    assert_eq!(remaining.len(), 1);

    let reopened = Session::open(JsonFileStore::new(dir.path()));
    let names: Vec<&str> = reopened.history().iter().map(|e| e.token_name.as_str()).collect();
    assert_eq!(names, vec!["admin/text/heading"]);
    let stored: Vec<HistoryEntry> =
        serde_json::from_str(&fs::read_to_string(dir.path().join(HISTORY_FILE)).unwrap()).unwrap();
    assert_eq!(stored[0].id, reopened.history()[0].id);
}

#[test]
fn corrupt_history_is_reported_and_session_still_opens() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(HISTORY_FILE), "{ not json").unwrap();
    fs::write(dir.path().join(PREFERENCES_FILE), "[]").unwrap();

    let store = JsonFileStore::new(dir.path());
    assert!(matches!(store.load_history(), Err(StoreError::Parse { .. })));

    let session = Session::open(store);
    assert!(session.history().is_empty());
    assert_eq!(session.style(), NameStyle::Slash);
}
