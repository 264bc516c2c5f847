//! Documento persistence.

use rusqlite::{Connection, Row, params};

use super::{
    StoreError, StoreResult, decode_timestamp, encode_timestamp, persisted_value_error,
};
use crate::model::{DocType, Documento};

/// SQLite-backed store for [`Documento`] records.
pub struct DocumentoStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> DocumentoStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Inserts a document and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns a validation error when neither a file nor a URL is set.
    pub fn insert(&self, documento: &Documento) -> StoreResult<Documento> {
        documento.validate()?;

        let mut stored = documento.clone();
        stored.created_at = super::now();

        if stored.id > 0 {
            self.conn.execute(
                "INSERT INTO documentos (id, trabajo_id, title, doc_type, file_path, url, position, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    stored.id,
                    stored.trabajo_id,
                    stored.title,
                    stored.doc_type.as_str(),
                    stored.file_path,
                    stored.url,
                    stored.position,
                    encode_timestamp(stored.created_at),
                ],
            )?;
        } else {
            self.conn.execute(
                "INSERT INTO documentos (trabajo_id, title, doc_type, file_path, url, position, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    stored.trabajo_id,
                    stored.title,
                    stored.doc_type.as_str(),
                    stored.file_path,
                    stored.url,
                    stored.position,
                    encode_timestamp(stored.created_at),
                ],
            )?;
            stored.id = self.conn.last_insert_rowid();
        }

        Ok(stored)
    }

    /// Lists the documents of a work ordered by position, then id.
    pub fn for_trabajo(&self, trabajo_id: i64) -> StoreResult<Vec<Documento>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, trabajo_id, title, doc_type, file_path, url, position, created_at
             FROM documentos
             WHERE trabajo_id = ?1
             ORDER BY position, id",
        )?;
        let documentos = stmt
            .query_map(params![trabajo_id], map_documento)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(documentos)
    }

    /// Deletes a document.
    pub fn delete(&self, id: i64) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM documentos WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "documento" });
        }
        Ok(())
    }
}

fn map_documento(row: &Row<'_>) -> rusqlite::Result<Documento> {
    let doc_type_raw: String = row.get(3)?;
    let doc_type = DocType::parse(&doc_type_raw)
        .ok_or_else(|| persisted_value_error("doc_type", &doc_type_raw))?;

    Ok(Documento {
        id: row.get(0)?,
        trabajo_id: row.get(1)?,
        title: row.get(2)?,
        doc_type,
        file_path: row.get(4)?,
        url: row.get(5)?,
        position: row.get(6)?,
        created_at: decode_timestamp(row.get(7)?)?,
    })
}
