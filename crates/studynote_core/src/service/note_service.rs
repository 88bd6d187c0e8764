//! Note use-case service.
//!
//! # Responsibility
//! - Run generate → tag → store for both template modes.
//! - Provide edit/pin/delete/list/search APIs over an injected `NoteStore`.
//! - Export and import the JSON array of note records.
//!
//! # Invariants
//! - Stored tags always satisfy the active `TagPolicy` (deduped, capped).
//! - Pin toggling never changes `timestamp`; edits always refresh it.
//! - A validation failure never reaches the store.

use crate::model::note::{normalize_title, NoteId, NoteRecord};
use crate::store::{NoteStore, StoreError};
use crate::tags::TagPolicy;
use crate::template::{
    generate_multi_topic_note, generate_single_topic_note, MultiTopicRequest, SingleTopicRequest,
    ValidationError,
};
use log::{info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Generation refused; the caller must re-prompt.
    Validation(ValidationError),
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Store(StoreError),
    /// Import payload is not a JSON array of note records, or repeats an id.
    InvalidImport(String),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::InvalidImport(details) => write!(f, "invalid note import: {details}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for NoteServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for NoteServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::NoteNotFound(id),
            other => Self::Store(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, NoteServiceError>;

/// Note service facade over a store implementation.
pub struct NoteService<S: NoteStore> {
    store: S,
    policy: TagPolicy,
    clock: Box<dyn Fn() -> i64>,
}

impl<S: NoteStore> NoteService<S> {
    /// Creates a service stamping records with the system clock.
    pub fn new(store: S, policy: TagPolicy) -> Self {
        Self::with_clock(store, policy, now_epoch_ms)
    }

    /// Creates a service with a caller-provided epoch-millisecond clock.
    pub fn with_clock(store: S, policy: TagPolicy, clock: impl Fn() -> i64 + 'static) -> Self {
        Self {
            store,
            policy,
            clock: Box::new(clock),
        }
    }

    pub fn policy(&self) -> TagPolicy {
        self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Generates a single-topic note and stores it.
    pub fn create_single_topic(&mut self, request: &SingleTopicRequest) -> ServiceResult<NoteRecord> {
        let body = generate_single_topic_note(request).inspect_err(|err| {
            warn!("event=note_generate module=service status=rejected mode=single reason={err}");
        })?;
        let tags = self.policy.tags_for_text(&body);
        let record = NoteRecord::new(request.suggested_title(), body, tags, (self.clock)());
        self.store.set(&record)?;
        info!(
            "event=note_generate module=service status=ok mode=single study_mode={} note_id={} tag_count={}",
            request.mode,
            record.id,
            record.tags.len()
        );
        Ok(record)
    }

    /// Generates a multi-topic outline and stores it under the suggested title.
    pub fn create_multi_topic(&mut self, request: &MultiTopicRequest) -> ServiceResult<NoteRecord> {
        let outline = generate_multi_topic_note(request).inspect_err(|err| {
            warn!("event=note_generate module=service status=rejected mode=multi reason={err}");
        })?;
        let tags = self.policy.apply(&outline);
        let record = NoteRecord::new(&outline.title, outline.body, tags, (self.clock)());
        self.store.set(&record)?;
        info!(
            "event=note_generate module=service status=ok mode=multi note_id={} topic_count={} tag_count={}",
            record.id,
            outline.topics.len(),
            record.tags.len()
        );
        Ok(record)
    }

    /// Stores a hand-written note, tagging it from its body.
    pub fn create_note(&mut self, title: &str, body: impl Into<String>) -> ServiceResult<NoteRecord> {
        let body = body.into();
        let tags = self.policy.tags_for_text(&body);
        let record = NoteRecord::new(title, body, tags, (self.clock)());
        self.store.set(&record)?;
        info!(
            "event=note_create module=service status=ok note_id={}",
            record.id
        );
        Ok(record)
    }

    /// Replaces title and body, re-derives tags and refreshes the timestamp.
    ///
    /// The pinned flag is kept.
    pub fn update_note(
        &mut self,
        id: NoteId,
        title: &str,
        body: impl Into<String>,
    ) -> ServiceResult<NoteRecord> {
        let mut record = self.require(id)?;
        record.set_title(title);
        record.body = body.into();
        record.tags = self.policy.tags_for_text(&record.body);
        record.timestamp = (self.clock)();
        self.store.set(&record)?;
        info!(
            "event=note_update module=service status=ok note_id={} tag_count={}",
            record.id,
            record.tags.len()
        );
        Ok(record)
    }

    /// Flips the pinned flag without touching the timestamp.
    pub fn toggle_pin(&mut self, id: NoteId) -> ServiceResult<NoteRecord> {
        let mut record = self.require(id)?;
        let pinned = record.toggle_pin();
        self.store.set(&record)?;
        info!("event=note_pin module=service status=ok note_id={id} pinned={pinned}");
        Ok(record)
    }

    pub fn delete_note(&mut self, id: NoteId) -> ServiceResult<()> {
        self.store.delete(id)?;
        info!("event=note_delete module=service status=ok note_id={id}");
        Ok(())
    }

    pub fn get_note(&self, id: NoteId) -> ServiceResult<Option<NoteRecord>> {
        Ok(self.store.get(id)?)
    }

    /// All notes, pinned first then newest first.
    pub fn list_notes(&self) -> ServiceResult<Vec<NoteRecord>> {
        Ok(self.store.list()?)
    }

    /// Notes matching `query` by title/body substring or exact tag, in
    /// display order.
    pub fn search_notes(&self, query: &str) -> ServiceResult<Vec<NoteRecord>> {
        let mut notes = self.store.list()?;
        notes.retain(|note| note.matches(query));
        Ok(notes)
    }

    /// Serializes every note, in display order, as a pretty JSON array.
    pub fn export_json(&self) -> ServiceResult<String> {
        let notes = self.store.list()?;
        let json = serde_json::to_string_pretty(&notes)
            .map_err(|err| StoreError::InvalidData(format!("export encoding failed: {err}")))?;
        info!(
            "event=note_export module=service status=ok count={}",
            notes.len()
        );
        Ok(json)
    }

    /// Upserts every record in a JSON array by `id`; returns the count.
    ///
    /// Titles get the `Untitled` default; tags are trimmed, deduped and
    /// capped with the active policy. Malformed JSON and repeated ids are
    /// rejected before anything is written. Records are then written one
    /// `set` at a time, so a store failure partway leaves the earlier records
    /// in place.
    pub fn import_json(&mut self, json: &str) -> ServiceResult<usize> {
        let records: Vec<NoteRecord> = serde_json::from_str(json).map_err(|err| {
            warn!("event=note_import module=service status=error error_code=invalid_json");
            NoteServiceError::InvalidImport(err.to_string())
        })?;

        let mut seen = HashSet::with_capacity(records.len());
        if let Some(duplicate) = records.iter().find(|record| !seen.insert(record.id)) {
            warn!("event=note_import module=service status=error error_code=duplicate_id");
            return Err(NoteServiceError::InvalidImport(format!(
                "note id {} appears more than once",
                duplicate.id
            )));
        }

        for mut record in records.iter().cloned() {
            record.title = normalize_title(&record.title);
            record.tags = self.policy.sanitize(&record.tags);
            self.store.set(&record)?;
        }
        info!(
            "event=note_import module=service status=ok count={}",
            records.len()
        );
        Ok(records.len())
    }

    fn require(&self, id: NoteId) -> ServiceResult<NoteRecord> {
        self.store
            .get(id)?
            .ok_or(NoteServiceError::NoteNotFound(id))
    }
}

/// Current Unix time in milliseconds; `0` if the clock predates the epoch.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{now_epoch_ms, NoteServiceError};
    use crate::store::StoreError;
    use uuid::Uuid;

    #[test]
    fn store_not_found_maps_to_note_not_found() {
        let id = Uuid::new_v4();
        let err = NoteServiceError::from(StoreError::NotFound(id));
        assert!(matches!(err, NoteServiceError::NoteNotFound(found) if found == id));
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(now_epoch_ms() > 1_577_836_800_000);
    }
}
