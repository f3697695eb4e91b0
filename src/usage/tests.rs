use super::*;

use crate::store::MemStore;

use tempfile::tempdir;

#[test]
fn test_first_record_starts_from_zero_state() {
    let store = MemStore::new();
    let ledger = record_usage(&store, 100, "fetch").unwrap();

    assert_eq!(ledger.total, 100);
    assert_eq!(ledger.history.len(), 1);
    assert_eq!(ledger.history[0].tokens, 100);
    assert_eq!(ledger.history[0].action, "fetch");
    assert!(!ledger.history[0].timestamp.is_empty());
}

#[test]
fn test_records_accumulate() {
    let store = MemStore::new();
    for (tokens, action) in [(10, "fetch"), (20, "summarize"), (30, "render")] {
        record_usage(&store, tokens, action).unwrap();
    }

    let ledger = read_ledger(&store).unwrap();
    assert_eq!(ledger.total, 60);
    assert_eq!(ledger.history.len(), 3);
    assert_eq!(ledger.history[2].action, "render");
}

#[test]
fn test_total_matches_history_sum() {
    let store = MemStore::new();
    let amounts = [5, 0, 42, 7, 13];
    for tokens in amounts {
        record_usage(&store, tokens, "step").unwrap();
    }

    let ledger = read_ledger(&store).unwrap();
    let summed: i64 = ledger.history.iter().map(|e| e.tokens).sum();
    assert_eq!(ledger.total, summed);
}

#[test]
fn test_negative_amounts_are_accepted() {
    let store = MemStore::new();
    record_usage(&store, 100, "fetch").unwrap();
    let ledger = record_usage(&store, -30, "correction").unwrap();

    assert_eq!(ledger.total, 70);
    assert_eq!(ledger.history.len(), 2);
}

#[test]
fn test_ledger_on_disk_field_names() {
    let store = MemStore::new();
    record_usage(&store, 12, "fetch").unwrap();

    let raw = store.get(USAGE_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["total"], 12);
    let event = &value["history"][0];
    assert_eq!(event["tokens"], 12);
    assert_eq!(event["action"], "fetch");
    assert!(event["timestamp"].as_str().unwrap().contains('T'));
}

#[test]
fn test_read_ledger_without_file_is_zero_state() {
    let ledger = read_ledger(&MemStore::new()).unwrap();
    assert_eq!(ledger.total, 0);
    assert!(ledger.history.is_empty());
}

#[test]
fn test_track_usage_persists_across_invocations() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("chunks");

    track_usage(&out, 100, "fetch").unwrap();
    let ledger = track_usage(&out, 50, "summarize").unwrap();

    assert_eq!(ledger.total, 150);
    assert!(out.join("token-usage.json").is_file());

    let reread = read_ledger(&DirStore::open(&out)).unwrap();
    assert_eq!(reread.total, 150);
    assert_eq!(reread.history.len(), 2);
}
