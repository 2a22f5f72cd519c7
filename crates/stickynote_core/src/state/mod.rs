//! Pure note-list state transitions.
//!
//! # Responsibility
//! - Describe every list mutation as data (`NoteAction`).
//! - Apply mutations without touching storage or views.
//!
//! # Invariants
//! - Reducers never reorder surviving notes.
//! - Reducers never introduce a duplicate id.

pub mod reducer;
