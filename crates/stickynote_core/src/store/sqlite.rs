//! SQLite-backed key-value store for native front ends.
//!
//! # Responsibility
//! - Persist `localStorage`-style string entries in the `kv_store` table.
//!
//! # Invariants
//! - Connections handed to `try_new` must already be migrated.
//! - `set_item` is a single upsert statement, so a value is never half-written.

use super::{KeyValueStore, StoreResult};
use crate::db::{open_db, open_db_in_memory, require_table, KV_TABLE};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Key-value store over one SQLite connection.
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    /// Opens (and migrates) a database file.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self { conn: open_db(path)? })
    }

    /// Opens a fresh in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Wraps a migrated connection.
    ///
    /// # Errors
    /// - `StoreError::MissingTable` when `kv_store` does not exist.
    pub fn try_new(conn: Connection) -> StoreResult<Self> {
        require_table(&conn, KV_TABLE)?;
        Ok(Self { conn })
    }

    /// Returns all stored keys in ascending order.
    pub fn keys(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv_store ORDER BY key ASC;")?;
        let mut rows = stmt.query([])?;
        let mut keys = Vec::new();
        while let Some(row) = rows.next()? {
            keys.push(row.get(0)?);
        }
        Ok(keys)
    }

    pub fn into_connection(self) -> Connection {
        self.conn
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [key])?;
        Ok(())
    }
}
