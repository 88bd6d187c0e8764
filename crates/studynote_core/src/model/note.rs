//! Note record domain model.
//!
//! # Responsibility
//! - Define the record persisted by `NoteStore` implementations.
//! - Provide title defaulting, pin toggling and list ordering helpers.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `title` is never blank.
//! - List order is pinned first, then `timestamp DESC`, then `id ASC`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Title used when the caller supplies a blank one.
pub const UNTITLED: &str = "Untitled";

/// Stable identifier for a note record.
pub type NoteId = Uuid;

/// One generated or edited study note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    /// Assigned at creation, immutable afterwards.
    pub id: NoteId,
    pub title: String,
    /// Generated or user-edited text/markup.
    pub body: String,
    /// Derived tags; deduplicated and capped by the active `TagPolicy`.
    pub tags: Vec<String>,
    /// Unix epoch milliseconds of creation or last update.
    pub timestamp: i64,
    #[serde(default)]
    pub pinned: bool,
}

impl NoteRecord {
    /// Creates an unpinned record with a generated stable ID.
    pub fn new(
        title: impl AsRef<str>,
        body: impl Into<String>,
        tags: Vec<String>,
        timestamp: i64,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, body, tags, timestamp)
    }

    /// Creates a record with a caller-provided ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        id: NoteId,
        title: impl AsRef<str>,
        body: impl Into<String>,
        tags: Vec<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            id,
            title: normalize_title(title.as_ref()),
            body: body.into(),
            tags,
            timestamp,
            pinned: false,
        }
    }

    /// Replaces the title, applying the `UNTITLED` default.
    pub fn set_title(&mut self, title: &str) {
        self.title = normalize_title(title);
    }

    /// Flips the pinned flag and returns the new value.
    pub fn toggle_pin(&mut self) -> bool {
        self.pinned = !self.pinned;
        self.pinned
    }

    /// Whether `query` matches title, body (case-insensitive) or a tag
    /// (exact, case-insensitive).
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.body.to_lowercase().contains(&needle)
            || self.tags.iter().any(|tag| tag.to_lowercase() == needle)
    }
}

/// Trims a title and substitutes `UNTITLED` when blank.
pub fn normalize_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        UNTITLED.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Display ordering: pinned first, newest first, then by id.
pub fn display_order(left: &NoteRecord, right: &NoteRecord) -> Ordering {
    right
        .pinned
        .cmp(&left.pinned)
        .then_with(|| right.timestamp.cmp(&left.timestamp))
        .then_with(|| left.id.cmp(&right.id))
}

/// Sorts records in place by `display_order`.
pub fn sort_for_display(notes: &mut [NoteRecord]) {
    notes.sort_by(display_order);
}
