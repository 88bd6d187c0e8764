//! Injected note storage capability.
//!
//! # Responsibility
//! - Define the key-value contract services use to persist note records.
//! - Keep storage details out of template/tag code.
//!
//! # Invariants
//! - `set` is an upsert keyed by `NoteRecord::id`.
//! - `set` rejects a record whose tag list repeats an entry (case-sensitive).
//! - `list` returns records in `display_order`.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::note::{NoteId, NoteRecord};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::InMemoryNoteStore;
pub use sqlite::SqliteNoteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for note persistence.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Record to update or delete does not exist.
    NotFound(NoteId),
    /// Persisted row cannot be decoded into a `NoteRecord`.
    InvalidData(String),
    /// Connection is missing a table required by the store.
    MissingRequiredTable(&'static str),
    /// Record passed to `set` lists the same tag twice.
    DuplicateTag { id: NoteId, tag: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "note store requires table `{table}`; run migrations first")
            }
            Self::DuplicateTag { id, tag } => write!(f, "note {id} lists tag `{tag}` twice"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value store for note records.
pub trait NoteStore {
    /// Gets one record by id.
    fn get(&self, id: NoteId) -> StoreResult<Option<NoteRecord>>;
    /// Inserts or fully replaces one record.
    ///
    /// Fails with `StoreError::DuplicateTag` when `record.tags` repeats an
    /// entry; nothing is written in that case.
    fn set(&mut self, record: &NoteRecord) -> StoreResult<()>;
    /// Lists all records in display order.
    fn list(&self) -> StoreResult<Vec<NoteRecord>>;
    /// Removes one record; `NotFound` when absent.
    fn delete(&mut self, id: NoteId) -> StoreResult<()>;
}

/// Shared `set` precondition: tags are unique within one record.
pub(crate) fn ensure_unique_tags(record: &NoteRecord) -> StoreResult<()> {
    let mut seen = HashSet::with_capacity(record.tags.len());
    match record.tags.iter().find(|tag| !seen.insert(tag.as_str())) {
        Some(tag) => Err(StoreError::DuplicateTag {
            id: record.id,
            tag: tag.clone(),
        }),
        None => Ok(()),
    }
}
