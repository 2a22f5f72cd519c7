//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate reducer, persistence and view into user-level operations.
//! - Keep front ends (wasm, CLI) free of synchronization logic.

pub mod board;
