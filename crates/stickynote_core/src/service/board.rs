//! Note board synchronizer.
//!
//! # Responsibility
//! - Own the in-memory note list for one board.
//! - Keep list, rendered nodes and persisted blob consistent after every
//!   create/edit/delete.
//!
//! # Invariants
//! - Every mutation runs: reduce list -> update view -> overwrite blob.
//! - Create and edit perform a full redraw; delete removes one node.
//! - The persisted blob always serializes the complete current list.
//! - Ids in the list are unique.

use crate::config::BoardConfig;
use crate::model::note::{Note, NoteId};
use crate::render::{BoardView, NotificationKind, ViewError};
use crate::state::reducer::{contains, reduce, NoteAction};
use crate::store::blob::{load_notes, save_notes};
use crate::store::{KeyValueStore, StoreError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BoardResult<T> = Result<T, BoardError>;

/// Error for board operations.
///
/// Nothing is retried or rolled back: when a view update or a write fails,
/// the in-memory list keeps the new state and the error goes to the caller.
#[derive(Debug)]
pub enum BoardError {
    Store(StoreError),
    View(ViewError),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::View(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::View(err) => Some(err),
        }
    }
}

impl From<StoreError> for BoardError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<ViewError> for BoardError {
    fn from(value: ViewError) -> Self {
        Self::View(value)
    }
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user confirmed and the note is gone.
    Deleted,
    /// The user declined; nothing changed.
    Declined,
}

/// One sticky-notes board bound to a store and a view.
pub struct NoteBoard<S: KeyValueStore, V: BoardView> {
    config: BoardConfig,
    notes: Vec<Note>,
    store: S,
    view: V,
}

impl<S: KeyValueStore, V: BoardView> NoteBoard<S, V> {
    /// Reads the persisted blob and renders it.
    ///
    /// An absent or unparsable blob loads as an empty board.
    pub fn load(config: BoardConfig, store: S, mut view: V) -> BoardResult<Self> {
        let notes = load_notes(&store, config.storage_key())?;
        view.render_notes(&notes)?;
        info!(
            "event=board_load module=board status=ok note_count={}",
            notes.len()
        );
        Ok(Self {
            config,
            notes,
            store,
            view,
        })
    }

    /// Appends an empty note, redraws, persists and notifies.
    ///
    /// Returns the id of the new note.
    pub fn create(&mut self) -> BoardResult<NoteId> {
        let mut id = NoteId::generate();
        while contains(&self.notes, &id) {
            id = NoteId::generate();
        }

        self.apply(NoteAction::Append(Note::with_id(id.clone())))?;
        self.view
            .notify(NotificationKind::Success, &self.config.messages.created);
        info!(
            "event=note_create module=board status=ok note_count={}",
            self.notes.len()
        );
        Ok(id)
    }

    /// Replaces the text of the note `id`, redraws and persists.
    ///
    /// An unknown `id` leaves the list untouched but still redraws and
    /// persists.
    pub fn edit(&mut self, id: &NoteId, text: impl Into<String>) -> BoardResult<()> {
        let text = text.into();
        let matched = contains(&self.notes, id);
        let text_chars = text.chars().count();
        self.apply(NoteAction::EditText {
            id: id.clone(),
            text,
        })?;
        if matched {
            debug!(
                "event=note_edit module=board status=ok text_chars={}",
                text_chars
            );
        } else {
            debug!("event=note_edit module=board status=no_match");
        }
        Ok(())
    }

    /// Asks for confirmation, then removes the note `id`.
    ///
    /// On confirmation the view drops the note's node directly, the list is
    /// filtered and persisted, and a success notification is shown. A prompt
    /// the view cannot show fails with `BoardError::View` and changes nothing.
    pub fn delete(&mut self, id: &NoteId) -> BoardResult<DeleteOutcome> {
        if !self.view.confirm(&self.config.messages.confirm_delete)? {
            debug!("event=note_delete module=board status=declined");
            return Ok(DeleteOutcome::Declined);
        }

        self.view.remove_note(id)?;
        self.notes = reduce(
            std::mem::take(&mut self.notes),
            NoteAction::Remove { id: id.clone() },
        );
        self.persist()?;
        self.view
            .notify(NotificationKind::Success, &self.config.messages.deleted);
        info!(
            "event=note_delete module=board status=ok note_count={}",
            self.notes.len()
        );
        Ok(DeleteOutcome::Deleted)
    }

    /// Current notes in display order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Looks up one note by id.
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Releases the store and view.
    pub fn into_parts(self) -> (S, V) {
        (self.store, self.view)
    }

    fn apply(&mut self, action: NoteAction) -> BoardResult<()> {
        self.notes = reduce(std::mem::take(&mut self.notes), action);
        self.view.render_notes(&self.notes)?;
        self.persist()
    }

    fn persist(&mut self) -> BoardResult<()> {
        save_notes(&mut self.store, self.config.storage_key(), &self.notes)?;
        Ok(())
    }
}
