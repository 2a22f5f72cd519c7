//! View contract for the note board.
//!
//! # Responsibility
//! - Define what the board needs from a UI surface: full redraw, single-node
//!   removal, notifications and a blocking confirmation.
//! - Provide shared markup (`html`) and a recording view (`memory`).
//!
//! # Invariants
//! - `render_notes` replaces every note node; it never patches.
//! - `confirm` blocks until the user answers; a prompt that cannot be shown
//!   is an error, never an implicit "no".

use crate::model::note::{Note, NoteId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod html;
mod memory;

pub use memory::{MemoryView, RenderedNote};

pub type ViewResult<T> = Result<T, ViewError>;

/// Failure reported by a view backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewError(pub String);

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "view error: {}", self.0)
    }
}

impl Error for ViewError {}

/// Tone of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
        }
    }
}

/// UI surface driven by `NoteBoard`.
pub trait BoardView {
    /// Discards every rendered note node and rebuilds them from `notes`.
    fn render_notes(&mut self, notes: &[Note]) -> ViewResult<()>;
    /// Removes the node of one note without touching the others.
    fn remove_note(&mut self, id: &NoteId) -> ViewResult<()>;
    /// Shows a transient message.
    fn notify(&mut self, kind: NotificationKind, message: &str);
    /// Asks a yes/no question and blocks for the answer.
    fn confirm(&mut self, message: &str) -> ViewResult<bool>;
}
