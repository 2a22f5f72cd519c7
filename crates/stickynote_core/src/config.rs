//! Board configuration.
//!
//! # Responsibility
//! - Hold the storage key and every user-facing string the board emits.
//! - Resolve overrides from the process environment.
//!
//! # Invariants
//! - `storage_key` is never blank.

use serde::{Deserialize, Serialize};

/// Storage key used when nothing overrides it.
pub const DEFAULT_STORAGE_KEY: &str = "notes";
/// Environment variable overriding the storage key.
pub const STORAGE_KEY_ENV: &str = "STICKYNOTE_STORAGE_KEY";

/// User-facing strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardMessages {
    pub created: String,
    pub deleted: String,
    pub confirm_delete: String,
    pub placeholder: String,
}

impl Default for BoardMessages {
    fn default() -> Self {
        Self {
            created: "The note has been successfully created.".to_string(),
            deleted: "The note has been successfully deleted.".to_string(),
            confirm_delete: "Are you sure you want to delete the note?".to_string(),
            placeholder: "Empty Sticky Note".to_string(),
        }
    }
}

/// Configuration consumed by `NoteBoard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    storage_key: String,
    pub messages: BoardMessages,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            messages: BoardMessages::default(),
        }
    }
}

impl BoardConfig {
    /// Default config with `STICKYNOTE_STORAGE_KEY` applied when set.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(STORAGE_KEY_ENV) {
            Ok(raw) => config.with_storage_key(raw.as_str()),
            Err(_) => config,
        }
    }

    /// Replaces the storage key. Blank keys are ignored.
    pub fn with_storage_key(mut self, key: &str) -> Self {
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            self.storage_key = trimmed.to_string();
        }
        self
    }

    pub fn storage_key(&self) -> &str {
        if self.storage_key.trim().is_empty() {
            DEFAULT_STORAGE_KEY
        } else {
            self.storage_key.as_str()
        }
    }
}
