use budget_report::{
    domain::{BudgetEntry, RawEntryInput},
    ingest,
    store::SnapshotStore,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn sample_entries() -> Vec<BudgetEntry> {
    vec![
        BudgetEntry::new("2567", "โครงการตัวอย่าง", 1000000.0, 500000.0, 50000.0),
        BudgetEntry::new("2568", "B", 0.0, 50.0, 0.0),
    ]
}

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

#[test]
fn snapshot_round_trip_preserves_every_field() {
    let temp = tempdir().unwrap();
    let store = SnapshotStore::new(Some(temp.path().to_path_buf())).unwrap();

    let entries = sample_entries();
    store.save(&entries).expect("save snapshot");
    assert_eq!(store.load(), entries);
}

#[test]
fn snapshot_uses_the_documented_field_names() {
    let temp = tempdir().unwrap();
    let store = SnapshotStore::new(Some(temp.path().to_path_buf())).unwrap();

    store.save(&sample_entries()).unwrap();
    let json = fs::read_to_string(store.snapshot_path()).unwrap();
    for field in [
        "year",
        "projectName",
        "budget",
        "spent",
        "returned",
        "remaining",
        "spentPercentage",
    ] {
        assert!(json.contains(field), "snapshot missing field `{field}`");
    }
}

#[test]
fn object_payload_is_discarded_for_defaults() {
    let temp = tempdir().unwrap();
    let store = SnapshotStore::new(Some(temp.path().to_path_buf())).unwrap();

    fs::write(store.snapshot_path(), r#"{"budget": 100}"#).unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn invalid_text_payload_is_discarded_for_defaults() {
    let temp = tempdir().unwrap();
    let store = SnapshotStore::new(Some(temp.path().to_path_buf())).unwrap();

    fs::write(store.snapshot_path(), "definitely not json").unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn append_grows_by_one_and_keeps_prior_order() {
    let temp = tempdir().unwrap();
    let store = SnapshotStore::new(Some(temp.path().to_path_buf())).unwrap();

    let base = sample_entries();
    store.save(&base).unwrap();

    let added = ingest::build_entry(RawEntryInput {
        year: "2569".into(),
        project_name: "C".into(),
        budget: "250".into(),
        spent: "100".into(),
        returned: "25".into(),
    });
    let updated = store.append(&base, added.clone()).expect("append");

    assert_eq!(updated.len(), base.len() + 1);
    assert_eq!(&updated[..base.len()], &base[..]);
    assert_eq!(updated.last().unwrap(), &added);
    assert_eq!(store.load(), updated);
}

#[test]
fn failed_atomic_save_preserves_the_previous_snapshot() {
    let temp = tempdir().unwrap();
    let store = SnapshotStore::new(Some(temp.path().to_path_buf())).unwrap();

    let entries = sample_entries();
    store.save(&entries).expect("initial save");
    let original = fs::read_to_string(store.snapshot_path()).unwrap();

    // A directory at the staging path forces the temp-file write to fail.
    let tmp_path = tmp_path_for(store.snapshot_path());
    fs::create_dir_all(&tmp_path).unwrap();

    let mut grown = entries.clone();
    grown.push(BudgetEntry::new("2570", "D", 1.0, 0.0, 0.0));
    assert!(store.save(&grown).is_err());

    let current = fs::read_to_string(store.snapshot_path()).unwrap();
    assert_eq!(
        current, original,
        "a failed save must not corrupt the existing snapshot"
    );
}
