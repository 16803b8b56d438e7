use rollcall_core::{
    RecordStore, RosterConfig, RosterService, StoreError, StudentRecord, StudentUpdate,
    ValidationError,
};
use std::collections::BTreeMap;

#[test]
fn add_and_find_by_roll() {
    let mut store = RecordStore::new();
    store.add(record("Asha Rao", "21")).unwrap();
    store.add(record("Ben Carter", "22")).unwrap();

    let index = store.find_by_roll("22").expect("roll 22 should exist");
    assert_eq!(index, 1);
    assert_eq!(store.get(index).unwrap().roll, "22");
    assert_eq!(store.find_by_roll("99"), None);
}

#[test]
fn duplicate_add_is_rejected_and_length_unchanged() {
    let mut store = RecordStore::new();
    store.add(record("Asha Rao", "21")).unwrap();

    let err = store.add(record("Ben Carter", "21")).unwrap_err();
    assert_eq!(err, StoreError::DuplicateRoll("21".to_string()));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(0).unwrap().name, "Asha Rao");
}

#[test]
fn add_rejects_invalid_record() {
    let mut store = RecordStore::new();

    let err = store.add(record("4sha", "21")).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(store.is_empty());
}

#[test]
fn edit_updates_subset_and_preserves_identity() {
    let mut store = RecordStore::new();
    store.add(full_record("Asha Rao", "21", 80, 90, 70)).unwrap();

    let update = StudentUpdate {
        name: None,
        marks: vec![("Maths".to_string(), 95)],
    };
    store.edit(0, &update).unwrap();

    let edited = store.get(0).unwrap();
    assert_eq!(edited.roll, "21");
    assert_eq!(edited.name, "Asha Rao");
    assert_eq!(edited.marks["Maths"], 95);
    assert_eq!(edited.marks["Physics"], 90);
    assert_eq!(edited.marks["Chemistry"], 70);
}

#[test]
fn edit_can_replace_name_only() {
    let mut store = RecordStore::new();
    store.add(full_record("Asha Rao", "21", 80, 90, 70)).unwrap();

    let update = StudentUpdate {
        name: Some("Asha Iyer".to_string()),
        marks: Vec::new(),
    };
    store.edit(0, &update).unwrap();

    let edited = store.get(0).unwrap();
    assert_eq!(edited.name, "Asha Iyer");
    assert_eq!(edited.marks["Maths"], 80);
}

#[test]
fn edit_rejects_out_of_range_index() {
    let mut store = RecordStore::new();
    store.add(record("Asha Rao", "21")).unwrap();

    let err = store.edit(5, &StudentUpdate::default()).unwrap_err();
    assert_eq!(err, StoreError::IndexOutOfRange { index: 5, len: 1 });
}

#[test]
fn failed_edit_leaves_record_unchanged() {
    let mut store = RecordStore::new();
    store.add(full_record("Asha Rao", "21", 80, 90, 70)).unwrap();

    let update = StudentUpdate {
        name: Some("4sha".to_string()),
        marks: vec![("Maths".to_string(), 95)],
    };
    let err = store.edit(0, &update).unwrap_err();
    assert_eq!(
        err,
        StoreError::Validation(ValidationError::NonAlphabetic("4sha".to_string()))
    );

    let unchanged = store.get(0).unwrap();
    assert_eq!(unchanged.name, "Asha Rao");
    assert_eq!(unchanged.marks["Maths"], 80);
}

#[test]
fn records_preserve_insertion_order() {
    let mut store = RecordStore::new();
    store.add(record("Asha Rao", "30")).unwrap();
    store.add(record("Ben Carter", "10")).unwrap();
    store.add(record("Chitra Nair", "20")).unwrap();

    let rolls: Vec<&str> = store
        .records()
        .iter()
        .map(|record| record.roll.as_str())
        .collect();
    assert_eq!(rolls, ["30", "10", "20"]);
}

#[test]
fn roll_set_tracks_collection_contents() {
    let mut store = RecordStore::new();
    store.add(record("Asha Rao", "21")).unwrap();
    store.add(record("Ben Carter", "22")).unwrap();

    let rolls = store.roll_set();
    assert!(rolls.contains("21"));
    assert!(rolls.contains("22"));
    assert_eq!(rolls.len(), 2);
}

#[test]
fn from_records_rejects_duplicate_rolls() {
    let result = RecordStore::from_records(vec![
        record("Asha Rao", "21"),
        record("Ben Carter", "21"),
    ]);
    assert_eq!(
        result.unwrap_err(),
        StoreError::DuplicateRoll("21".to_string())
    );
}

#[test]
fn from_records_rejects_out_of_range_mark() {
    let mut bad = record("Asha Rao", "21");
    bad.marks.insert("Maths".to_string(), 150);

    let result = RecordStore::from_records(vec![bad]);
    assert!(matches!(
        result.unwrap_err(),
        StoreError::Validation(ValidationError::MarkOutOfRange { .. })
    ));
}

#[test]
fn service_wraps_store_calls() {
    let mut service = RosterService::with_store(RosterConfig::default(), RecordStore::new());
    service.add(full_record("Asha Rao", "21", 80, 90, 70)).unwrap();

    let (index, found) = service.find_by_roll("21").expect("roll 21 should exist");
    assert_eq!(index, 0);
    assert_eq!(found.name, "Asha Rao");

    let update = StudentUpdate {
        name: None,
        marks: vec![("Physics".to_string(), 100)],
    };
    service.edit_by_roll("21", &update).unwrap();
    let (_, edited) = service.find_by_roll("21").unwrap();
    assert_eq!(edited.marks["Physics"], 100);

    let err = service.edit_by_roll("99", &update).unwrap_err();
    assert_eq!(err, StoreError::NotFound("99".to_string()));
}

#[test]
fn service_exposes_configured_subjects() {
    let service = RosterService::with_store(RosterConfig::default(), RecordStore::new());
    assert_eq!(service.subjects(), ["Maths", "Physics", "Chemistry"]);
}

fn record(name: &str, roll: &str) -> StudentRecord {
    StudentRecord::new(name, roll, BTreeMap::new())
}

fn full_record(name: &str, roll: &str, maths: u8, physics: u8, chemistry: u8) -> StudentRecord {
    let marks = [
        ("Maths".to_string(), maths),
        ("Physics".to_string(), physics),
        ("Chemistry".to_string(), chemistry),
    ]
    .into_iter()
    .collect();
    StudentRecord::new(name, roll, marks)
}
