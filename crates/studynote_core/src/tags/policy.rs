//! Tag configuration shared by generation call sites.

use super::extract::{dedupe_capped, extract_tags, union_metadata_tags};
use crate::template::GeneratedOutline;
use serde::{Deserialize, Serialize};

/// Tag behavior for one note variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPolicy {
    /// Maximum number of tags kept per note.
    pub cap: usize,
    /// Derive outline tags from metadata labels plus topics instead of
    /// word-splitting the body.
    pub metadata_union: bool,
}

impl TagPolicy {
    /// Small chip row variant.
    pub const COMPACT: TagPolicy = TagPolicy {
        cap: 6,
        metadata_union: false,
    };
    /// Default body-derived tags.
    pub const BODY: TagPolicy = TagPolicy {
        cap: 8,
        metadata_union: false,
    };
    /// Outline variant tagging subject/level/style/tone plus topics.
    pub const OUTLINE: TagPolicy = TagPolicy {
        cap: 10,
        metadata_union: true,
    };

    /// Returns a copy with a different cap.
    pub fn with_cap(self, cap: usize) -> Self {
        Self { cap, ..self }
    }

    /// Tags for an arbitrary text body. Always the word-splitting heuristic.
    pub fn tags_for_text(&self, text: &str) -> Vec<String> {
        extract_tags(text, self.cap)
    }

    /// Tags for a generated outline, honoring `metadata_union`.
    pub fn apply(&self, outline: &GeneratedOutline) -> Vec<String> {
        if self.metadata_union {
            union_metadata_tags(&outline.metadata_labels(), &outline.topics, self.cap)
        } else {
            extract_tags(&outline.body, self.cap)
        }
    }

    /// Re-enforces the tag invariants on an externally supplied list.
    ///
    /// Used on import paths: trims, drops blanks, dedupes, caps.
    pub fn sanitize(&self, tags: &[String]) -> Vec<String> {
        dedupe_capped(
            tags.iter()
                .map(|tag| tag.trim())
                .filter(|tag| !tag.is_empty()),
            self.cap,
        )
    }
}

impl Default for TagPolicy {
    fn default() -> Self {
        Self::BODY
    }
}
