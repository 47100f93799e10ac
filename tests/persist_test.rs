use chrono::Utc;
use logos_event_log::domain::{Category, LogContext, LogEntry, Severity};
use logos_event_log::persist::{JsonFileStore, PersistedStore};
use tempfile::TempDir;
use uuid::Uuid;

fn sample_entry(message: &str) -> LogEntry {
    LogEntry {
        id: Uuid::new_v4(),
        timestamp: Utc::now(),
        severity: Severity::Warn,
        category: Category::Security,
        kind: None,
        message: message.to_string(),
        details: Some(serde_json::json!({ "attempts": 3 })),
        tags: vec!["security".to_string()],
        context: LogContext {
            session_id: Some("session-test".to_string()),
            ..LogContext::default()
        },
    }
}

#[test]
fn loading_an_absent_slot_yields_none() {
    let dir = TempDir::new().unwrap();
    let slot = JsonFileStore::new(dir.path(), "never-written");
    assert!(slot.load().unwrap().is_none());
}

#[test]
fn store_then_load_round_trips_the_sequence() {
    let dir = TempDir::new().unwrap();
    let mut slot = JsonFileStore::new(dir.path(), "round-trip");

    let entries = vec![sample_entry("first"), sample_entry("second")];
    slot.store(&entries).unwrap();

    let loaded = slot.load().unwrap().unwrap();
    assert_eq!(loaded, entries);
}

#[test]
fn store_rewrites_the_whole_slot() {
    let dir = TempDir::new().unwrap();
    let mut slot = JsonFileStore::new(dir.path(), "rewrite");

    slot.store(&[sample_entry("a"), sample_entry("b")]).unwrap();
    slot.store(&[sample_entry("only")]).unwrap();

    let loaded = slot.load().unwrap().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].message, "only");
}

#[test]
fn store_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("nested").join("deeper");
    let mut slot = JsonFileStore::new(&nested, "created");

    slot.store(&[sample_entry("entry")]).unwrap();
    assert!(slot.path().exists());
}

#[test]
fn remove_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let mut slot = JsonFileStore::new(dir.path(), "removable");

    slot.remove().unwrap();

    slot.store(&[sample_entry("entry")]).unwrap();
    slot.remove().unwrap();
    slot.remove().unwrap();

    assert!(slot.load().unwrap().is_none());
}

#[test]
fn mirror_files_are_human_diffable_json() {
    let dir = TempDir::new().unwrap();
    let mut slot = JsonFileStore::new(dir.path(), "readable");

    slot.store(&[sample_entry("pretty")]).unwrap();
    let content = std::fs::read_to_string(slot.path()).unwrap();

    // Pretty-printed: one field per line rather than a single long line.
    assert!(content.lines().count() > 5);
    assert!(content.contains("\"severity\": \"WARN\""));
}
