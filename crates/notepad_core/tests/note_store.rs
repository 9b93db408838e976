use chrono::NaiveDate;
use notepad_core::{
    FixedClock, MemoryNoteMirror, NoteStore, NoteValidationError, StoreError,
};
use uuid::Uuid;

fn may_24() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2025, 5, 24).unwrap())
}

fn empty_store() -> NoteStore<MemoryNoteMirror, FixedClock> {
    // An empty JSON array blob, so opening does not seed samples.
    NoteStore::open(MemoryNoteMirror::with_raw("[]"), may_24()).unwrap()
}

#[test]
fn create_prepends_exactly_one_note() {
    let mut store = empty_store();

    let first = store.create("Groceries", "milk, eggs").unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.notes()[0].id, first);

    let second = store.create("Standup", "demo notes").unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.notes()[0].id, second);
    assert_eq!(store.notes()[1].id, first);
}

#[test]
fn create_stamps_date_from_injected_clock() {
    let mut store = empty_store();
    store.create("Groceries", "milk, eggs").unwrap();
    assert_eq!(store.notes()[0].date, "May 24");
}

#[test]
fn blank_title_or_content_leaves_collection_unchanged() {
    let mut store = empty_store();
    let id = store.create("keep", "me").unwrap();
    let before = store.notes().to_vec();

    let err = store.create("   ", "body").unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(NoteValidationError::BlankTitle)
    ));

    let err = store.create("title", "\t").unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(NoteValidationError::BlankContent)
    ));

    let err = store.update(id, "title", "  ").unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(NoteValidationError::BlankContent)
    ));

    assert_eq!(store.notes(), before.as_slice());
}

#[test]
fn update_touches_only_the_target_and_preserves_order() {
    let mut store = empty_store();
    let a = store.create("A", "alpha body").unwrap();
    let b = store.create("B", "beta body").unwrap();

    // Order is [B, A]; editing A must not move it.
    store.update(a, "A2", "x").unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.notes()[0].id, b);
    assert_eq!(store.notes()[0].title, "B");
    assert_eq!(store.notes()[0].content, "beta body");
    assert_eq!(store.notes()[1].id, a);
    assert_eq!(store.notes()[1].title, "A2");
    assert_eq!(store.notes()[1].content, "x");
}

#[test]
fn update_keeps_the_id_and_restamps_the_date() {
    let mirror = MemoryNoteMirror::with_raw("[]");
    let mut store = NoteStore::open(mirror, may_24()).unwrap();
    let id = store.create("draft", "body").unwrap();

    store.update(id, "draft 2", "body 2").unwrap();
    let note = store.get(id).expect("note should still exist");
    assert_eq!(note.id, id);
    assert_eq!(note.date, "May 24");
}

#[test]
fn update_unknown_id_is_reported_and_changes_nothing() {
    let mut store = empty_store();
    store.create("only", "note").unwrap();
    let before = store.notes().to_vec();

    let missing = Uuid::new_v4();
    let err = store.update(missing, "t", "c").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
    assert_eq!(store.notes(), before.as_slice());
}

#[test]
fn remove_shrinks_by_one_then_second_call_is_a_no_op() {
    let mut store = empty_store();
    let a = store.create("A", "alpha").unwrap();
    store.create("B", "beta").unwrap();

    assert!(store.remove(a).unwrap());
    assert_eq!(store.len(), 1);

    assert!(!store.remove(a).unwrap());
    assert_eq!(store.len(), 1);
}

#[test]
fn search_filters_by_title_and_content_case_insensitively() {
    let mut store = empty_store();
    store.create("Groceries", "milk, eggs").unwrap();

    let hits = store.search("milk");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Groceries");

    assert!(store.search("bread").is_empty());
    assert_eq!(store.search("MILK"), store.search("milk"));
}

#[test]
fn empty_search_term_returns_the_full_collection_in_order() {
    let mut store = empty_store();
    store.create("A", "alpha").unwrap();
    store.create("B", "beta").unwrap();

    let hits = store.search("");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].title, "B");
    assert_eq!(hits[1].title, "A");
}

#[test]
fn every_mutation_writes_through_to_the_mirror() {
    let probe = MemoryNoteMirror::with_raw("[]");
    let mut store = NoteStore::open(probe.clone(), may_24()).unwrap();

    let id = store.create("Groceries", "milk, eggs").unwrap();
    assert_eq!(mirror_titles(&probe), vec!["Groceries"]);

    store.update(id, "Groceries!", "milk, eggs, bread").unwrap();
    assert_eq!(mirror_titles(&probe), vec!["Groceries!"]);

    store.remove(id).unwrap();
    assert!(mirror_titles(&probe).is_empty());
}

fn mirror_titles(probe: &MemoryNoteMirror) -> Vec<String> {
    let blob = probe.raw().expect("mirror should hold a blob");
    let notes: Vec<notepad_core::Note> = serde_json::from_str(&blob).unwrap();
    notes.into_iter().map(|note| note.title).collect()
}
