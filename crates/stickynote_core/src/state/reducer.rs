//! Note list reducer.
//!
//! # Responsibility
//! - Map `(list, action)` to the next list.
//!
//! # Invariants
//! - `Append` of an id already present leaves the list unchanged.
//! - `EditText` and `Remove` for an unknown id leave the list unchanged.

use crate::model::note::{Note, NoteId};

/// One mutation of the note list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteAction {
    /// Adds a note at the end of the list.
    Append(Note),
    /// Replaces the text of the note with a matching id.
    EditText { id: NoteId, text: String },
    /// Drops the note with a matching id.
    Remove { id: NoteId },
}

/// Applies `action` to `notes` and returns the next list.
pub fn reduce(mut notes: Vec<Note>, action: NoteAction) -> Vec<Note> {
    match action {
        NoteAction::Append(note) => {
            if !contains(&notes, &note.id) {
                notes.push(note);
            }
            notes
        }
        NoteAction::EditText { id, text } => {
            if let Some(note) = notes.iter_mut().find(|note| note.id == id) {
                note.text = text;
            }
            notes
        }
        NoteAction::Remove { id } => {
            notes.retain(|note| note.id != id);
            notes
        }
    }
}

/// Returns whether a note with `id` is present.
pub fn contains(notes: &[Note], id: &NoteId) -> bool {
    notes.iter().any(|note| &note.id == id)
}
