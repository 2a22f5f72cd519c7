use rusqlite::Connection;
use stickynote_core::db::{latest_version, open_db, open_db_in_memory, require_table};
use stickynote_core::{
    BoardConfig, KeyValueStore, MemoryView, NoteBoard, SqliteKeyValueStore, StoreError,
};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv_store");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stickynote.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "kv_store");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        StoreError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn store_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let err = SqliteKeyValueStore::try_new(conn).err().unwrap();
    assert!(matches!(err, StoreError::MissingTable("kv_store")));
}

#[test]
fn require_table_names_the_missing_table() {
    let conn = open_db_in_memory().unwrap();

    require_table(&conn, "kv_store").unwrap();
    let err = require_table(&conn, "notes_archive").unwrap_err();

    assert!(matches!(err, StoreError::MissingTable("notes_archive")));
    assert_eq!(err.to_string(), "required table `notes_archive` is missing");
}

#[test]
fn sqlite_failures_surface_as_store_errors() {
    let dir = tempfile::tempdir().unwrap();

    let err = SqliteKeyValueStore::open(dir.path()).err().unwrap();

    assert!(matches!(err, StoreError::Sqlite(_)));
}

#[test]
fn set_get_remove_follow_overwrite_semantics() {
    let mut store = SqliteKeyValueStore::open_in_memory().unwrap();
    assert!(store.get_item("notes").unwrap().is_none());

    store.set_item("notes", "[]").unwrap();
    store.set_item("notes", r#"[{"id":"a","text":""}]"#).unwrap();
    store.set_item("other", "x").unwrap();

    assert_eq!(
        store.get_item("notes").unwrap().as_deref(),
        Some(r#"[{"id":"a","text":""}]"#)
    );
    assert_eq!(store.keys().unwrap(), vec!["notes", "other"]);

    store.remove_item("notes").unwrap();
    store.remove_item("notes").unwrap();
    assert!(store.get_item("notes").unwrap().is_none());
}

#[test]
fn board_state_survives_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.db");

    let (id, expected) = {
        let store = SqliteKeyValueStore::open(&path).unwrap();
        let mut board = NoteBoard::load(BoardConfig::default(), store, MemoryView::new()).unwrap();
        let id = board.create().unwrap();
        board.create().unwrap();
        board.edit(&id, "buy milk").unwrap();
        (id, board.notes().to_vec())
    };

    let store = SqliteKeyValueStore::open(&path).unwrap();
    let board = NoteBoard::load(BoardConfig::default(), store, MemoryView::new()).unwrap();
    assert_eq!(board.notes(), expected.as_slice());
    assert_eq!(board.get(&id).unwrap().text, "buy milk");
    assert_eq!(board.view().nodes().len(), 2);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &'static str) {
    require_table(conn, table_name).unwrap();
}
