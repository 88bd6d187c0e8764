//! Process-local note store.

use super::{ensure_unique_tags, NoteStore, StoreError, StoreResult};
use crate::model::note::{sort_for_display, NoteId, NoteRecord};
use std::collections::HashMap;

/// `HashMap`-backed store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNoteStore {
    notes: HashMap<NoteId, NoteRecord>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl NoteStore for InMemoryNoteStore {
    fn get(&self, id: NoteId) -> StoreResult<Option<NoteRecord>> {
        Ok(self.notes.get(&id).cloned())
    }

    fn set(&mut self, record: &NoteRecord) -> StoreResult<()> {
        ensure_unique_tags(record)?;
        self.notes.insert(record.id, record.clone());
        Ok(())
    }

    fn list(&self) -> StoreResult<Vec<NoteRecord>> {
        let mut notes: Vec<_> = self.notes.values().cloned().collect();
        sort_for_display(&mut notes);
        Ok(notes)
    }

    fn delete(&mut self, id: NoteId) -> StoreResult<()> {
        self.notes
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
