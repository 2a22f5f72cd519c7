//! Note domain model.
//!
//! # Responsibility
//! - Define the `{ id, text }` record persisted in the notes blob.
//! - Generate fresh identifiers for newly created notes.
//!
//! # Invariants
//! - A freshly created note has empty text.
//! - `NoteId` is opaque: ids read back from storage are kept verbatim, even
//!   when they were not produced by `NoteId::generate`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque identifier of one note.
///
/// Serialized as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing identifier string verbatim.
    ///
    /// Only the empty string is rejected; whitespace is part of the id, so
    /// lookups match ids decoded from storage byte for byte.
    pub fn parse(value: &str) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One sticky note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// Free text body. Blobs without a `text` field decode as empty.
    #[serde(default)]
    pub text: String,
}

impl Note {
    /// Creates an empty note with a generated id.
    pub fn new() -> Self {
        Self::with_id(NoteId::generate())
    }

    /// Creates an empty note with a caller-provided id.
    pub fn with_id(id: NoteId) -> Self {
        Self {
            id,
            text: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}
