//! Versioned schema of the key-value database.
//!
//! Entry `n` of `STEPS` (1-based) moves a database from `user_version` `n - 1`
//! to `n`. The list is append-only; shipped steps are never edited.

use crate::store::{StoreError, StoreResult};
use log::info;
use rusqlite::Connection;

const STEPS: &[&str] = &[include_str!("sql/kv_store_v1.sql")];

/// Schema versions before and after `migrate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaChange {
    pub from: u32,
    pub to: u32,
}

impl SchemaChange {
    /// Number of steps run; zero when the database was already current.
    pub fn applied(self) -> u32 {
        self.to - self.from
    }
}

/// Schema version this build writes.
pub fn latest_version() -> u32 {
    STEPS.len() as u32
}

/// Brings `conn` up to `latest_version()` in one transaction.
///
/// # Errors
/// - `StoreError::SchemaTooNew` when the file was written by a newer build;
///   nothing is touched in that case.
pub fn migrate(conn: &mut Connection) -> StoreResult<SchemaChange> {
    let from: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    let to = latest_version();
    if from > to {
        return Err(StoreError::SchemaTooNew {
            found: from,
            supported: to,
        });
    }
    if from == to {
        return Ok(SchemaChange { from, to });
    }

    let tx = conn.transaction()?;
    for sql in STEPS.iter().skip(from as usize) {
        tx.execute_batch(sql)?;
    }
    tx.pragma_update(None, "user_version", to)?;
    tx.commit()?;

    info!("event=db_migrate module=db status=ok from_version={from} to_version={to}");
    Ok(SchemaChange { from, to })
}

/// Fails with `StoreError::MissingTable` unless `table` exists.
pub fn require_table(conn: &Connection, table: &'static str) -> StoreResult<()> {
    let present: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
        [table],
        |row| row.get(0),
    )?;
    if present {
        Ok(())
    } else {
        Err(StoreError::MissingTable(table))
    }
}
