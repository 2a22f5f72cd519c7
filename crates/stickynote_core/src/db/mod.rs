//! SQLite connections for the native key-value store.
//!
//! Every connection handed out here is migrated to `schema::latest_version()`
//! and has the `kv_store` table, so callers never see a half-initialized file.

use crate::store::{StoreError, StoreResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

mod schema;

pub use schema::{latest_version, migrate, require_table, SchemaChange};

/// Table holding `localStorage`-style entries.
pub const KV_TABLE: &str = "kv_store";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (creating if needed) a database file ready for the key-value store.
pub fn open_db(path: impl AsRef<Path>) -> StoreResult<Connection> {
    connect("file", || Connection::open(path))
}

/// Opens a private in-memory database ready for the key-value store.
pub fn open_db_in_memory() -> StoreResult<Connection> {
    connect("memory", Connection::open_in_memory)
}

fn connect(
    mode: &str,
    open: impl FnOnce() -> rusqlite::Result<Connection>,
) -> StoreResult<Connection> {
    let started_at = Instant::now();
    match open().map_err(StoreError::from).and_then(prepare) {
        Ok((conn, change)) => {
            info!(
                "event=db_open module=db status=ok mode={mode} schema_version={} migrated={} duration_ms={}",
                change.to,
                change.applied(),
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

fn prepare(mut conn: Connection) -> StoreResult<(Connection, SchemaChange)> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    let change = migrate(&mut conn)?;
    require_table(&conn, KV_TABLE)?;
    Ok((conn, change))
}
