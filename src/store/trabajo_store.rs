//! Trabajo persistence, including the publish-once invariant.

use rusqlite::{Connection, OptionalExtension, Row, params};

use super::{
    StoreError, StoreResult, decode_timestamp, encode_timestamp, persisted_value_error,
};
use crate::model::{Status, Trabajo};

const TRABAJO_COLUMNS: &str = "t.id,
    t.area_id,
    t.title,
    t.slug,
    t.tagline,
    t.summary,
    t.description,
    t.app_url,
    t.image_path,
    t.image_url,
    t.thumbnail_url,
    t.status,
    t.published_at,
    t.is_featured,
    t.position,
    t.created_at,
    t.updated_at";

/// SQLite-backed store for [`Trabajo`] records.
///
/// Write paths enforce the publication invariant: `published_at` is
/// stamped on the first transition to published and never cleared or
/// re-stamped afterwards.
pub struct TrabajoStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> TrabajoStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Inserts a work and returns the stored record.
    ///
    /// A caller-provided `published_at` is kept; otherwise a record
    /// inserted as published is stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any SQL runs, or a database
    /// error on constraint violations such as a duplicate slug within
    /// the same area.
    pub fn insert(&self, trabajo: &Trabajo) -> StoreResult<Trabajo> {
        trabajo.validate()?;

        let now = super::now();
        let mut stored = trabajo.clone();
        stored.created_at = now;
        stored.updated_at = now;
        stored.mark_published(now);

        if stored.id > 0 {
            self.conn.execute(
                "INSERT INTO trabajos (
                    id, area_id, title, slug, tagline, summary, description, app_url,
                    image_path, image_url, thumbnail_url, status, published_at,
                    is_featured, position, created_at, updated_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
                params![
                    stored.id,
                    stored.area_id,
                    stored.title,
                    stored.slug,
                    stored.tagline,
                    stored.summary,
                    stored.description,
                    stored.app_url,
                    stored.image_path,
                    stored.image_url,
                    stored.thumbnail_url,
                    stored.status.as_str(),
                    stored.published_at.map(encode_timestamp),
                    stored.is_featured,
                    stored.position,
                    encode_timestamp(stored.created_at),
                    encode_timestamp(stored.updated_at),
                ],
            )?;
        } else {
            self.conn.execute(
                "INSERT INTO trabajos (
                    area_id, title, slug, tagline, summary, description, app_url,
                    image_path, image_url, thumbnail_url, status, published_at,
                    is_featured, position, created_at, updated_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
                params![
                    stored.area_id,
                    stored.title,
                    stored.slug,
                    stored.tagline,
                    stored.summary,
                    stored.description,
                    stored.app_url,
                    stored.image_path,
                    stored.image_url,
                    stored.thumbnail_url,
                    stored.status.as_str(),
                    stored.published_at.map(encode_timestamp),
                    stored.is_featured,
                    stored.position,
                    encode_timestamp(stored.created_at),
                    encode_timestamp(stored.updated_at),
                ],
            )?;
            stored.id = self.conn.last_insert_rowid();
        }

        Ok(stored)
    }

    /// Updates an existing work and returns the stored record.
    ///
    /// `created_at` and a previously stamped `published_at` are taken
    /// from the existing row, so callers cannot clear or rewrite them.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the id does not exist.
    pub fn update(&self, trabajo: &Trabajo) -> StoreResult<Trabajo> {
        trabajo.validate()?;

        let existing = self
            .find(trabajo.id)?
            .ok_or(StoreError::NotFound { entity: "trabajo" })?;

        let now = super::now();
        let mut stored = trabajo.clone();
        stored.created_at = existing.created_at;
        stored.published_at = existing.published_at;
        stored.updated_at = now;
        stored.mark_published(now);

        self.conn.execute(
            "UPDATE trabajos
             SET area_id = ?1, title = ?2, slug = ?3, tagline = ?4, summary = ?5,
                 description = ?6, app_url = ?7, image_path = ?8, image_url = ?9,
                 thumbnail_url = ?10, status = ?11, published_at = ?12,
                 is_featured = ?13, position = ?14, updated_at = ?15
             WHERE id = ?16",
            params![
                stored.area_id,
                stored.title,
                stored.slug,
                stored.tagline,
                stored.summary,
                stored.description,
                stored.app_url,
                stored.image_path,
                stored.image_url,
                stored.thumbnail_url,
                stored.status.as_str(),
                stored.published_at.map(encode_timestamp),
                stored.is_featured,
                stored.position,
                encode_timestamp(stored.updated_at),
                stored.id,
            ],
        )?;

        Ok(stored)
    }

    /// Deletes a work; cascades to highlights and documents.
    pub fn delete(&self, id: i64) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM trabajos WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "trabajo" });
        }
        Ok(())
    }

    /// Finds a work by id.
    pub fn find(&self, id: i64) -> StoreResult<Option<Trabajo>> {
        let trabajo = self
            .conn
            .query_row(
                &format!("SELECT {TRABAJO_COLUMNS} FROM trabajos t WHERE t.id = ?1"),
                params![id],
                map_trabajo,
            )
            .optional()?;
        Ok(trabajo)
    }

    /// Finds a work by area and work slugs, regardless of status.
    ///
    /// Drafts stay reachable by direct URL; listings filter instead.
    pub fn find_by_slugs(
        &self,
        area_slug: &str,
        trabajo_slug: &str,
    ) -> StoreResult<Option<Trabajo>> {
        let trabajo = self
            .conn
            .query_row(
                &format!(
                    "SELECT {TRABAJO_COLUMNS}
                     FROM trabajos t
                     JOIN areas a ON a.id = t.area_id
                     WHERE a.slug = ?1 AND t.slug = ?2"
                ),
                params![area_slug, trabajo_slug],
                map_trabajo,
            )
            .optional()?;
        Ok(trabajo)
    }

    /// Lists the published works of an area, newest publication first.
    pub fn published_for_area(&self, area_id: i64) -> StoreResult<Vec<Trabajo>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TRABAJO_COLUMNS}
             FROM trabajos t
             WHERE t.area_id = ?1 AND t.status = 'published'
             ORDER BY t.published_at DESC, t.created_at DESC"
        ))?;
        let trabajos = stmt
            .query_map(params![area_id], map_trabajo)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(trabajos)
    }

    /// Lists the most recently published works with their area slug.
    pub fn latest_published(&self, limit: u32) -> StoreResult<Vec<(Trabajo, String)>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TRABAJO_COLUMNS}, a.slug
             FROM trabajos t
             JOIN areas a ON a.id = t.area_id
             WHERE t.status = 'published'
             ORDER BY t.published_at DESC, t.id DESC
             LIMIT ?1"
        ))?;
        let trabajos = stmt
            .query_map(params![limit], |row| {
                Ok((map_trabajo(row)?, row.get::<_, String>(17)?))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(trabajos)
    }
}

fn map_trabajo(row: &Row<'_>) -> rusqlite::Result<Trabajo> {
    let status_raw: String = row.get(11)?;
    let status = Status::parse(&status_raw)
        .ok_or_else(|| persisted_value_error("status", &status_raw))?;

    let published_at = row
        .get::<_, Option<String>>(12)?
        .map(decode_timestamp)
        .transpose()?;

    Ok(Trabajo {
        id: row.get(0)?,
        area_id: row.get(1)?,
        title: row.get(2)?,
        slug: row.get(3)?,
        tagline: row.get(4)?,
        summary: row.get(5)?,
        description: row.get(6)?,
        app_url: row.get(7)?,
        image_path: row.get(8)?,
        image_url: row.get(9)?,
        thumbnail_url: row.get(10)?,
        status,
        published_at,
        is_featured: row.get(13)?,
        position: row.get(14)?,
        created_at: decode_timestamp(row.get(15)?)?,
        updated_at: decode_timestamp(row.get(16)?)?,
    })
}
