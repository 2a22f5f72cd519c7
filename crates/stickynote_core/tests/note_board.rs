use std::collections::HashSet;
use stickynote_core::{
    encode_notes, load_notes, BoardConfig, BoardError, BoardView, DeleteOutcome, KeyValueStore,
    MemoryStore, MemoryView, Note, NoteBoard, NoteId, NotificationKind, StoreError, StoreResult,
    ViewError, ViewResult,
};

fn empty_board(store: &mut MemoryStore) -> NoteBoard<&mut MemoryStore, MemoryView> {
    NoteBoard::load(BoardConfig::default(), store, MemoryView::new()).unwrap()
}

fn persisted(store: &MemoryStore) -> Vec<Note> {
    load_notes(store, "notes").unwrap()
}

#[test]
fn load_without_prior_state_yields_empty_board() {
    let mut store = MemoryStore::new();
    let board = empty_board(&mut store);

    assert!(board.notes().is_empty());
    assert!(board.view().nodes().is_empty());
    assert_eq!(board.view().redraws(), 1);
}

#[test]
fn create_one_note_then_reload_restores_it() {
    let mut store = MemoryStore::new();
    let id = {
        let mut board = empty_board(&mut store);
        let id = board.create().unwrap();

        assert_eq!(board.notes().len(), 1);
        assert_eq!(board.notes()[0].id, id);
        assert_eq!(board.notes()[0].text, "");
        assert!(!id.as_str().is_empty());
        id
    };

    let reloaded = empty_board(&mut store);
    assert_eq!(reloaded.notes(), &[Note::with_id(id)]);
    assert_eq!(reloaded.view().nodes().len(), 1);
}

#[test]
fn repeated_creates_append_unique_ids_in_order() {
    let mut store = MemoryStore::new();
    let mut board = empty_board(&mut store);

    let created = (0..25)
        .map(|_| board.create().unwrap())
        .collect::<Vec<_>>();

    assert_eq!(board.notes().len(), 25);
    let listed = board
        .notes()
        .iter()
        .map(|note| note.id.clone())
        .collect::<Vec<_>>();
    assert_eq!(listed, created);
    assert_eq!(created.iter().collect::<HashSet<_>>().len(), 25);
}

#[test]
fn create_redraws_persists_and_notifies() {
    let mut store = MemoryStore::new();
    let mut board = empty_board(&mut store);
    board.create().unwrap();

    assert_eq!(board.view().redraws(), 2);
    assert_eq!(
        board.view().notifications(),
        &[(
            NotificationKind::Success,
            "The note has been successfully created.".to_string()
        )]
    );
    let notes = board.notes().to_vec();
    drop(board);
    assert_eq!(persisted(&store), notes);
}

#[test]
fn edit_changes_only_the_target_note() {
    let mut store = MemoryStore::new();
    let mut board = empty_board(&mut store);
    let first = board.create().unwrap();
    let second = board.create().unwrap();
    let third = board.create().unwrap();
    board.edit(&first, "keep me").unwrap();

    board.edit(&second, "groceries").unwrap();

    let notes = board.notes().to_vec();
    assert_eq!(
        notes.iter().map(|n| n.id.clone()).collect::<Vec<_>>(),
        vec![first.clone(), second.clone(), third.clone()]
    );
    assert_eq!(board.get(&first).unwrap().text, "keep me");
    assert_eq!(board.get(&second).unwrap().text, "groceries");
    assert_eq!(board.get(&third).unwrap().text, "");
    assert_eq!(board.view().nodes()[1].text, "groceries");

    drop(board);
    assert_eq!(persisted(&store), notes);
}

#[test]
fn edit_full_redraws_without_notification() {
    let mut store = MemoryStore::new();
    let mut board = empty_board(&mut store);
    let id = board.create().unwrap();
    let redraws_before = board.view().redraws();

    board.edit(&id, "text").unwrap();

    assert_eq!(board.view().redraws(), redraws_before + 1);
    assert_eq!(board.view().notifications().len(), 1);
}

#[test]
fn edit_unknown_id_is_silent_no_op() {
    let mut store = MemoryStore::new();
    let mut board = empty_board(&mut store);
    board.create().unwrap();
    let before = board.notes().to_vec();

    board
        .edit(&NoteId::parse("missing").unwrap(), "lost")
        .unwrap();

    assert_eq!(board.notes(), before.as_slice());
    drop(board);
    assert_eq!(persisted(&store), before);
}

#[test]
fn confirmed_delete_removes_exactly_one_note() {
    let mut store = MemoryStore::new();
    let mut board = empty_board(&mut store);
    let first = board.create().unwrap();
    let second = board.create().unwrap();
    let third = board.create().unwrap();
    let redraws_before = board.view().redraws();

    let outcome = board.delete(&second).unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(
        board.notes().iter().map(|n| n.id.clone()).collect::<Vec<_>>(),
        vec![first.clone(), third.clone()]
    );
    assert_eq!(board.view().redraws(), redraws_before);
    assert_eq!(board.view().removed(), &[second]);
    assert_eq!(board.view().nodes().len(), 2);
    assert_eq!(
        board.view().prompts(),
        &["Are you sure you want to delete the note?".to_string()]
    );
    assert_eq!(
        board.view().notifications().last().unwrap().1,
        "The note has been successfully deleted."
    );

    let notes = board.notes().to_vec();
    drop(board);
    assert_eq!(persisted(&store), notes);
}

#[test]
fn declined_delete_changes_nothing() {
    let mut store = MemoryStore::new();
    let mut board = empty_board(&mut store);
    let id = board.create().unwrap();
    board.edit(&id, "stay").unwrap();
    board.view_mut().push_answer(false);
    let notifications_before = board.view().notifications().len();

    let outcome = board.delete(&id).unwrap();

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert_eq!(board.notes().len(), 1);
    assert!(board.view().removed().is_empty());
    assert_eq!(board.view().nodes().len(), 1);
    assert_eq!(board.view().notifications().len(), notifications_before);
    drop(board);
    assert_eq!(persisted(&store)[0].text, "stay");
}

#[test]
fn unparsable_blob_loads_as_empty_and_is_overwritten_on_create() {
    let mut store = MemoryStore::with_item("notes", "{not json");
    let mut board = empty_board(&mut store);
    assert!(board.notes().is_empty());

    board.create().unwrap();
    drop(board);

    assert_eq!(persisted(&store).len(), 1);
}

#[test]
fn load_reads_blob_written_by_other_producers() {
    let raw = r#"[{"text":"from before","id":"lq2x9a8f"}]"#;
    let mut store = MemoryStore::with_item("notes", raw);

    let board = empty_board(&mut store);

    assert_eq!(board.notes().len(), 1);
    assert_eq!(board.notes()[0].id.as_str(), "lq2x9a8f");
    assert_eq!(board.view().nodes()[0].text, "from before");
}

#[test]
fn custom_storage_key_isolates_boards() {
    let mut store = MemoryStore::new();
    {
        let config = BoardConfig::default().with_storage_key("work");
        let mut board = NoteBoard::load(config, &mut store, MemoryView::new()).unwrap();
        board.create().unwrap();
    }

    assert!(store.get_item("notes").unwrap().is_none());
    assert_eq!(load_notes(&store, "work").unwrap().len(), 1);
}

#[test]
fn every_mutation_round_trips_through_the_blob() {
    let mut store = MemoryStore::new();
    let mut board = empty_board(&mut store);
    let a = board.create().unwrap();
    let b = board.create().unwrap();
    board.edit(&a, "alpha").unwrap();
    board.edit(&b, "beta").unwrap();
    board.delete(&a).unwrap();
    let expected = board.notes().to_vec();
    drop(board);

    assert_eq!(
        store.get_item("notes").unwrap().unwrap(),
        encode_notes(&expected).unwrap()
    );
    let reloaded = empty_board(&mut store);
    assert_eq!(reloaded.notes(), expected.as_slice());
}

struct FailingView;

impl BoardView for FailingView {
    fn render_notes(&mut self, _notes: &[Note]) -> ViewResult<()> {
        Err(ViewError("detached".to_string()))
    }

    fn remove_note(&mut self, _id: &NoteId) -> ViewResult<()> {
        Ok(())
    }

    fn notify(&mut self, _kind: NotificationKind, _message: &str) {}

    fn confirm(&mut self, _message: &str) -> ViewResult<bool> {
        Ok(true)
    }
}

#[test]
fn view_failures_propagate_to_the_caller() {
    let err = NoteBoard::load(BoardConfig::default(), MemoryStore::new(), FailingView)
        .err()
        .unwrap();
    assert!(err.to_string().contains("detached"));
}

/// Renders like `MemoryView` but cannot show a confirmation dialog.
#[derive(Default)]
struct BlockedDialogView {
    inner: MemoryView,
}

impl BoardView for BlockedDialogView {
    fn render_notes(&mut self, notes: &[Note]) -> ViewResult<()> {
        self.inner.render_notes(notes)
    }

    fn remove_note(&mut self, id: &NoteId) -> ViewResult<()> {
        self.inner.remove_note(id)
    }

    fn notify(&mut self, kind: NotificationKind, message: &str) {
        self.inner.notify(kind, message);
    }

    fn confirm(&mut self, _message: &str) -> ViewResult<bool> {
        Err(ViewError("dialog blocked".to_string()))
    }
}

#[test]
fn confirm_failure_aborts_delete_without_changes() {
    let raw = r#"[{"id":"a","text":"keep"}]"#;
    let mut store = MemoryStore::with_item("notes", raw);
    let mut board = NoteBoard::load(
        BoardConfig::default(),
        &mut store,
        BlockedDialogView::default(),
    )
    .unwrap();

    let err = board.delete(&NoteId::parse("a").unwrap()).unwrap_err();

    assert!(matches!(err, BoardError::View(ViewError(ref message)) if message == "dialog blocked"));
    assert_eq!(board.notes().len(), 1);
    assert!(board.view().inner.removed().is_empty());
    assert!(board.view().inner.notifications().is_empty());
    drop(board);
    assert_eq!(store.get_item("notes").unwrap().as_deref(), Some(raw));
}

#[test]
fn whitespace_ids_from_storage_stay_addressable() {
    let mut store = MemoryStore::with_item("notes", r#"[{"id":" a ","text":"x"}]"#);
    let mut board = empty_board(&mut store);
    let id = NoteId::parse(" a ").unwrap();

    board.edit(&id, "edited").unwrap();
    assert_eq!(board.get(&id).unwrap().text, "edited");

    assert_eq!(board.delete(&id).unwrap(), DeleteOutcome::Deleted);
    assert!(board.notes().is_empty());
    assert!(board.view().nodes().is_empty());
    drop(board);
    assert!(persisted(&store).is_empty());
}

#[test]
fn empty_ids_from_storage_are_not_loaded() {
    let mut store = MemoryStore::with_item(
        "notes",
        r#"[{"id":"","text":"ghost"},{"id":"b","text":"real"}]"#,
    );
    let board = empty_board(&mut store);

    assert_eq!(board.notes().len(), 1);
    assert_eq!(board.notes()[0].id.as_str(), "b");
    assert_eq!(board.view().nodes().len(), 1);
}

/// Store that reads fine but rejects every write.
#[derive(Default)]
struct QuotaExceededStore {
    inner: MemoryStore,
}

impl KeyValueStore for QuotaExceededStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.get_item(key)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::Backend("quota".to_string()))
    }

    fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        self.inner.remove_item(key)
    }
}

#[test]
fn store_failures_propagate_and_keep_the_new_in_memory_state() {
    let mut board = NoteBoard::load(
        BoardConfig::default(),
        QuotaExceededStore::default(),
        MemoryView::new(),
    )
    .unwrap();

    let err = board.create().unwrap_err();

    assert!(matches!(err, BoardError::Store(StoreError::Backend(ref message)) if message == "quota"));
    assert_eq!(board.notes().len(), 1);
    assert_eq!(board.view().nodes().len(), 1);
    assert!(board.view().notifications().is_empty());
    assert!(board.store().get_item("notes").unwrap().is_none());
}

#[test]
fn store_failure_on_delete_skips_the_success_notification() {
    let raw = r#"[{"id":"a","text":"x"}]"#;
    let store = QuotaExceededStore {
        inner: MemoryStore::with_item("notes", raw),
    };
    let mut board = NoteBoard::load(BoardConfig::default(), store, MemoryView::new()).unwrap();

    let err = board.delete(&NoteId::parse("a").unwrap()).unwrap_err();

    assert!(matches!(err, BoardError::Store(_)));
    assert!(board.notes().is_empty());
    assert!(board.view().notifications().is_empty());
    assert_eq!(board.store().get_item("notes").unwrap().as_deref(), Some(raw));
}
