//! Study-note template engine.
//!
//! # Responsibility
//! - Assemble note bodies from structured form fields.
//! - Refuse generation when required fields are missing.
//!
//! # Invariants
//! - Output is a pure function of the request: no clock, no randomness.
//! - Validation failures never produce a partial body.
//!
//! # See also
//! - `single_topic` for the mode-selected outline.
//! - `multi_topic` for the per-topic structured outline.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod multi_topic;
pub mod single_topic;

pub use multi_topic::{
    generate_multi_topic_note, parse_topics, GeneratedOutline, MultiTopicRequest, OutlineFormat,
    DEFAULT_LEVEL, DEFAULT_STYLE, DEFAULT_TONE,
};
pub use single_topic::{
    generate_single_topic_note, Difficulty, SingleTopicRequest, StudyMode, SECTION_SEPARATOR,
};

/// Result type for template generation.
pub type TemplateResult<T> = Result<T, ValidationError>;

/// The only failure kind of the template engine.
///
/// Callers must block generation and re-prompt the user; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty.
    MissingField(&'static str),
    /// The topic list contained no entries after tokenizing.
    NoTopics,
    /// Study mode label is not one of `short|detailed|exam`.
    UnknownStudyMode(String),
    /// Difficulty label is not one of `easy|medium|hard`.
    UnknownDifficulty(String),
}

impl ValidationError {
    /// Short user-facing warning suitable for a form banner.
    pub fn warning(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "Please fill in ALL fields before generating notes.",
            Self::NoTopics => "Please add a subject and at least one topic.",
            Self::UnknownStudyMode(_) => "Please pick a study mode: short, detailed or exam.",
            Self::UnknownDifficulty(_) => "Please pick a difficulty: easy, medium or hard.",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is empty"),
            Self::NoTopics => write!(f, "topic list must contain at least one entry"),
            Self::UnknownStudyMode(value) => {
                write!(f, "unknown study mode `{value}`; expected short|detailed|exam")
            }
            Self::UnknownDifficulty(value) => {
                write!(f, "unknown difficulty `{value}`; expected easy|medium|hard")
            }
        }
    }
}

impl Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_names_the_missing_field() {
        let err = ValidationError::MissingField("subject");
        assert_eq!(err.to_string(), "required field `subject` is empty");
        assert!(err.warning().contains("ALL fields"));
    }
}
