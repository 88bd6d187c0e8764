//! Tag derivation for search and filtering.
//!
//! # Responsibility
//! - Derive short tag tokens from free text (word-splitting heuristic).
//! - Derive tags from outline metadata (metadata union policy).
//! - Hold per-variant tag configuration in one struct.
//!
//! # Invariants
//! - Output never contains duplicates (case-sensitive).
//! - Output never exceeds the supplied cap.
//! - Case is preserved; no normalization is applied.

mod extract;
mod policy;

pub use extract::{extract_tags, union_metadata_tags, MIN_TAG_CHARS};
pub use policy::TagPolicy;
