//! Notes blob codec.
//!
//! # Responsibility
//! - Serialize the whole note list as one JSON array of `{id, text}`.
//! - Read the blob back leniently: absent or unparsable means "no notes".
//!
//! # Invariants
//! - `save_notes` always writes the complete list, never a delta.
//! - Decoded lists never contain duplicate ids (first occurrence wins).
//! - Decoded lists never contain an empty id, since no lookup can address it.

use super::{KeyValueStore, StoreResult};
use crate::model::note::Note;
use log::{debug, warn};
use std::collections::HashSet;

/// Encodes the full list as a JSON array.
pub fn encode_notes(notes: &[Note]) -> serde_json::Result<String> {
    serde_json::to_string(notes)
}

/// Decodes a JSON array of notes.
///
/// Returns `None` when `raw` is not a JSON array of note objects.
pub fn decode_notes(raw: &str) -> Option<Vec<Note>> {
    let decoded = serde_json::from_str::<Vec<Note>>(raw).ok()?;
    let mut seen = HashSet::with_capacity(decoded.len());
    let total = decoded.len();
    let notes = decoded
        .into_iter()
        .filter(|note| note.id.is_valid() && seen.insert(note.id.clone()))
        .collect::<Vec<_>>();
    if notes.len() != total {
        warn!(
            "event=blob_decode module=store status=filtered dropped={}",
            total - notes.len()
        );
    }
    Some(notes)
}

/// Loads the list stored under `key`.
///
/// An absent key or an unparsable value yields an empty list. Backend read
/// failures are returned as errors.
pub fn load_notes<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> StoreResult<Vec<Note>> {
    let Some(raw) = store.get_item(key)? else {
        debug!("event=blob_load module=store status=absent");
        return Ok(Vec::new());
    };

    match decode_notes(&raw) {
        Some(notes) => {
            debug!(
                "event=blob_load module=store status=ok note_count={}",
                notes.len()
            );
            Ok(notes)
        }
        None => {
            warn!(
                "event=blob_load module=store status=unparsable blob_bytes={}",
                raw.len()
            );
            Ok(Vec::new())
        }
    }
}

/// Overwrites the value under `key` with the full list.
pub fn save_notes<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    notes: &[Note],
) -> StoreResult<()> {
    let encoded = encode_notes(notes)?;
    store.set_item(key, &encoded)?;
    debug!(
        "event=blob_save module=store status=ok note_count={} blob_bytes={}",
        notes.len(),
        encoded.len()
    );
    Ok(())
}
