//! Core domain logic for the sticky-notes board.
//! Front ends (wasm, CLI) only provide storage and view adapters.

pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod db;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod model;
pub mod render;
pub mod service;
pub mod state;
pub mod store;

pub use config::{BoardConfig, BoardMessages};
#[cfg(not(target_arch = "wasm32"))]
pub use logging::{init_logging, logging_status, LogConfig, LogLevel, LoggingError};
pub use model::note::{Note, NoteId};
pub use render::{BoardView, MemoryView, NotificationKind, RenderedNote, ViewError, ViewResult};
pub use service::board::{BoardError, BoardResult, DeleteOutcome, NoteBoard};
pub use state::reducer::{reduce, NoteAction};
pub use store::blob::{decode_notes, encode_notes, load_notes, save_notes};
#[cfg(not(target_arch = "wasm32"))]
pub use store::SqliteKeyValueStore;
pub use store::{KeyValueStore, MemoryStore, StoreError, StoreResult};

/// Minimal health-check API for front-end wiring checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
