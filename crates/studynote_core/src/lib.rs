//! Core domain logic for the student note generator.
//! Template assembly and tag derivation live here; UI layers only collect
//! form fields and render results.

pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod tags;
pub mod template;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{sort_for_display, NoteId, NoteRecord, UNTITLED};
pub use service::note_service::{NoteService, NoteServiceError, ServiceResult};
pub use store::{InMemoryNoteStore, NoteStore, SqliteNoteStore, StoreError, StoreResult};
pub use tags::{extract_tags, union_metadata_tags, TagPolicy};
pub use template::{
    generate_multi_topic_note, generate_single_topic_note, parse_topics, Difficulty,
    GeneratedOutline, MultiTopicRequest, OutlineFormat, SingleTopicRequest, StudyMode,
    ValidationError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
