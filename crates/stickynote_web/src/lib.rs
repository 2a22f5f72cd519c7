//! Browser front end for the sticky-notes board.
//!
//! # Responsibility
//! - Adapt `localStorage` and the DOM to the core store/view contracts.
//! - Expose the wasm entry points (`api`).

pub mod api;
mod dom;
mod storage;

pub use dom::DomView;
pub use storage::LocalStorageStore;
