//! Highlight persistence.

use rusqlite::{Connection, Row, params};

use super::{StoreError, StoreResult, decode_timestamp, encode_timestamp};
use crate::model::Highlight;

/// SQLite-backed store for [`Highlight`] records.
pub struct HighlightStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> HighlightStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Inserts a highlight and returns the stored record.
    pub fn insert(&self, highlight: &Highlight) -> StoreResult<Highlight> {
        highlight.validate()?;

        let mut stored = highlight.clone();
        stored.created_at = super::now();

        if stored.id > 0 {
            self.conn.execute(
                "INSERT INTO highlights (id, trabajo_id, label, value, position, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    stored.id,
                    stored.trabajo_id,
                    stored.label,
                    stored.value,
                    stored.position,
                    encode_timestamp(stored.created_at),
                ],
            )?;
        } else {
            self.conn.execute(
                "INSERT INTO highlights (trabajo_id, label, value, position, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    stored.trabajo_id,
                    stored.label,
                    stored.value,
                    stored.position,
                    encode_timestamp(stored.created_at),
                ],
            )?;
            stored.id = self.conn.last_insert_rowid();
        }

        Ok(stored)
    }

    /// Lists the highlights of a work ordered by position, then id.
    pub fn for_trabajo(&self, trabajo_id: i64) -> StoreResult<Vec<Highlight>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, trabajo_id, label, value, position, created_at
             FROM highlights
             WHERE trabajo_id = ?1
             ORDER BY position, id",
        )?;
        let highlights = stmt
            .query_map(params![trabajo_id], map_highlight)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(highlights)
    }

    /// Deletes a highlight.
    pub fn delete(&self, id: i64) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM highlights WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "highlight" });
        }
        Ok(())
    }
}

fn map_highlight(row: &Row<'_>) -> rusqlite::Result<Highlight> {
    Ok(Highlight {
        id: row.get(0)?,
        trabajo_id: row.get(1)?,
        label: row.get(2)?,
        value: row.get(3)?,
        position: row.get(4)?,
        created_at: decode_timestamp(row.get(5)?)?,
    })
}
