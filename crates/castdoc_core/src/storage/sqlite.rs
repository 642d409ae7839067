//! SQLite backend persisting saved payloads as rows.
//!
//! # Responsibility
//! - Insert one `documents` row per save with a derived preview.
//! - Provide a typed read-back API over persisted saves.
//!
//! # Invariants
//! - Read paths reject invalid persisted state instead of masking it.
//! - Listing order is deterministic: `saved_at DESC, uuid ASC`.

use super::{Storage, StorageError, StorageResult};
use crate::model::document::DocumentId;
use crate::render::derive_preview;
use log::info;
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

/// One persisted save, as read back from the `documents` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDocument {
    pub uuid: DocumentId,
    pub content: String,
    pub preview: Option<String>,
    /// Unix epoch milliseconds.
    pub saved_at: i64,
}

/// SQLite-backed storage over a bootstrapped connection.
///
/// The connection must come from [`crate::db::open_db`] or
/// [`crate::db::open_db_in_memory`] so migrations are applied.
pub struct SqliteStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStorage<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Lists persisted saves, newest first.
    pub fn list_saved(&self) -> StorageResult<Vec<SavedDocument>> {
        let mut stmt = self.conn.prepare(
            "SELECT uuid, content, preview, saved_at
             FROM documents
             ORDER BY saved_at DESC, uuid ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut saved = Vec::new();
        while let Some(row) = rows.next()? {
            saved.push(parse_saved_row(row)?);
        }

        Ok(saved)
    }

    /// Returns the number of persisted saves.
    pub fn saved_count(&self) -> StorageResult<u64> {
        let count: u64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM documents;", [], |row| row.get(0))?;
        Ok(count)
    }
}

impl Storage for SqliteStorage<'_> {
    fn save(&mut self, data: &str) -> StorageResult<()> {
        let uuid = Uuid::new_v4();
        let preview = derive_preview(data);

        self.conn.execute(
            "INSERT INTO documents (uuid, content, preview) VALUES (?1, ?2, ?3);",
            params![
                uuid.to_string(),
                data,
                if preview.is_empty() {
                    None
                } else {
                    Some(preview.as_str())
                },
            ],
        )?;

        info!(
            "event=storage_save module=storage backend=sqlite status=ok row={uuid} payload_chars={}",
            data.chars().count()
        );
        Ok(())
    }
}

fn parse_saved_row(row: &Row<'_>) -> StorageResult<SavedDocument> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        StorageError::InvalidData(format!("invalid uuid value `{uuid_text}` in documents.uuid"))
    })?;

    Ok(SavedDocument {
        uuid,
        content: row.get("content")?,
        preview: row.get("preview")?,
        saved_at: row.get("saved_at")?,
    })
}
