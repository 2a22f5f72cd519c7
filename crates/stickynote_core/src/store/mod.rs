//! Key-value persistence contract and implementations.
//!
//! # Responsibility
//! - Define the `localStorage`-shaped contract the board persists through.
//! - Provide in-memory and SQLite implementations for native targets.
//! - Encode/decode the notes blob (`blob` module).
//!
//! # Invariants
//! - `set_item` overwrites the whole value for a key.
//! - Backend failures surface as `StoreError`; absent keys are `Ok(None)`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod blob;
mod memory;
#[cfg(not(target_arch = "wasm32"))]
mod sqlite;

pub use memory::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub use sqlite::SqliteKeyValueStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for key-value store reads and writes.
#[derive(Debug)]
pub enum StoreError {
    /// SQLite open or query failure.
    #[cfg(not(target_arch = "wasm32"))]
    Sqlite(rusqlite::Error),
    /// Database file was written by a newer schema than this build knows.
    #[cfg(not(target_arch = "wasm32"))]
    SchemaTooNew { found: u32, supported: u32 },
    /// A table the store reads from is absent.
    #[cfg(not(target_arch = "wasm32"))]
    MissingTable(&'static str),
    /// Failure reported by a host storage backend (quota, access denied).
    Backend(String),
    /// Notes list could not be serialized.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            Self::Sqlite(err) => write!(f, "sqlite error: {err}"),
            #[cfg(not(target_arch = "wasm32"))]
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "database schema version {found} is newer than supported {supported}"
            ),
            #[cfg(not(target_arch = "wasm32"))]
            Self::MissingTable(table) => write!(f, "required table `{table}` is missing"),
            Self::Backend(message) => write!(f, "storage backend error: {message}"),
            Self::Encode(err) => write!(f, "failed to encode notes blob: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            Self::Sqlite(err) => Some(err),
            #[cfg(not(target_arch = "wasm32"))]
            Self::SchemaTooNew { .. } | Self::MissingTable(_) => None,
            Self::Backend(_) => None,
            Self::Encode(err) => Some(err),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// String key-value storage with whole-value overwrite semantics.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()>;
    /// Deletes `key`. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove_item(key)
    }
}
