//! SQLite-backed note store.
//!
//! # Invariants
//! - `set` replaces the record row and its full tag list in one transaction.
//! - Tag order is preserved through the `position` column.

use super::{ensure_unique_tags, NoteStore, StoreError, StoreResult};
use crate::model::note::{NoteId, NoteRecord};
use rusqlite::{params, Connection, Row, TransactionBehavior};
use uuid::Uuid;

const NOTE_SELECT_SQL: &str = "SELECT id, title, body, timestamp, pinned FROM notes";

/// Note store over a migrated connection (see `db::open_db`).
pub struct SqliteNoteStore<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteNoteStore<'conn> {
    /// Constructs a store from a migrated connection.
    ///
    /// # Errors
    /// - `StoreError::MissingRequiredTable` when `notes` or `note_tags` is absent.
    pub fn try_new(conn: &'conn mut Connection) -> StoreResult<Self> {
        for table in ["notes", "note_tags"] {
            if !table_exists(conn, table)? {
                return Err(StoreError::MissingRequiredTable(table));
            }
        }
        Ok(Self { conn })
    }

    fn load_tags(&self, id: &str) -> StoreResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT tag FROM note_tags WHERE note_id = ?1 ORDER BY position ASC;")?;
        let mut rows = stmt.query([id])?;
        let mut tags = Vec::new();
        while let Some(row) = rows.next()? {
            tags.push(row.get(0)?);
        }
        Ok(tags)
    }

    fn decode(&self, row: &Row<'_>) -> StoreResult<NoteRecord> {
        let id_text: String = row.get("id")?;
        let id = parse_id(&id_text)?;
        let pinned: i64 = row.get("pinned")?;
        Ok(NoteRecord {
            id,
            title: row.get("title")?,
            body: row.get("body")?,
            tags: self.load_tags(&id_text)?,
            timestamp: row.get("timestamp")?,
            pinned: pinned != 0,
        })
    }
}

impl NoteStore for SqliteNoteStore<'_> {
    fn get(&self, id: NoteId) -> StoreResult<Option<NoteRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        match rows.next()? {
            Some(row) => Ok(Some(self.decode(row)?)),
            None => Ok(None),
        }
    }

    fn set(&mut self, record: &NoteRecord) -> StoreResult<()> {
        ensure_unique_tags(record)?;
        let id = record.id.to_string();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            "INSERT INTO notes (id, title, body, timestamp, pinned)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT (id) DO UPDATE SET
                title = excluded.title,
                body = excluded.body,
                timestamp = excluded.timestamp,
                pinned = excluded.pinned;",
            params![
                id,
                record.title,
                record.body,
                record.timestamp,
                i64::from(record.pinned)
            ],
        )?;
        tx.execute("DELETE FROM note_tags WHERE note_id = ?1;", [id.as_str()])?;
        for (position, tag) in record.tags.iter().enumerate() {
            tx.execute(
                "INSERT INTO note_tags (note_id, position, tag) VALUES (?1, ?2, ?3);",
                params![id, position as i64, tag],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn list(&self) -> StoreResult<Vec<NoteRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NOTE_SELECT_SQL} ORDER BY pinned DESC, timestamp DESC, id ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(self.decode(row)?);
        }
        Ok(notes)
    }

    fn delete(&mut self, id: NoteId) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

fn parse_id(value: &str) -> StoreResult<NoteId> {
    Uuid::parse_str(value)
        .map_err(|_| StoreError::InvalidData(format!("invalid uuid value `{value}` in notes.id")))
}

fn table_exists(conn: &Connection, table: &str) -> StoreResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
