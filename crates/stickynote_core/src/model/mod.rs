//! Domain model for sticky notes.
//!
//! # Responsibility
//! - Define the note record shared by the reducer, the blob codec and views.
//!
//! # Invariants
//! - Every note is identified by a `NoteId` unique within its list.
//! - List order is insertion order and defines display order.

pub mod note;
