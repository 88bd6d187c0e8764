//! Note record model shared by services and stores.
//!
//! # Responsibility
//! - Define the canonical record produced by generation and kept by stores.
//! - Own list ordering and pin semantics.
//!
//! # Invariants
//! - Every record is identified by a stable `NoteId`.
//! - A blank title is always stored as `UNTITLED`.

pub mod note;
