//! Area persistence.

use rusqlite::{Connection, OptionalExtension, Row, params};

use super::{StoreError, StoreResult, decode_timestamp, encode_timestamp};
use crate::model::Area;

const AREA_SELECT_SQL: &str = "SELECT
    id,
    name,
    slug,
    description,
    position,
    created_at,
    updated_at
FROM areas";

/// SQLite-backed store for [`Area`] records.
pub struct AreaStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> AreaStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Inserts an area and returns the stored record.
    ///
    /// A zero id lets SQLite assign one; a positive id is kept as-is,
    /// which fixture imports rely on. Timestamps are stamped here.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any SQL runs, or a database
    /// error on constraint violations such as a duplicate slug.
    pub fn insert(&self, area: &Area) -> StoreResult<Area> {
        area.validate()?;

        let now = super::now();
        let mut stored = area.clone();
        stored.created_at = now;
        stored.updated_at = now;

        if stored.id > 0 {
            self.conn.execute(
                "INSERT INTO areas (id, name, slug, description, position, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    stored.id,
                    stored.name,
                    stored.slug,
                    stored.description,
                    stored.position,
                    encode_timestamp(stored.created_at),
                    encode_timestamp(stored.updated_at),
                ],
            )?;
        } else {
            self.conn.execute(
                "INSERT INTO areas (name, slug, description, position, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    stored.name,
                    stored.slug,
                    stored.description,
                    stored.position,
                    encode_timestamp(stored.created_at),
                    encode_timestamp(stored.updated_at),
                ],
            )?;
            stored.id = self.conn.last_insert_rowid();
        }

        Ok(stored)
    }

    /// Updates an existing area and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the id does not exist.
    pub fn update(&self, area: &Area) -> StoreResult<Area> {
        area.validate()?;

        let mut stored = area.clone();
        stored.updated_at = super::now();

        let changed = self.conn.execute(
            "UPDATE areas
             SET name = ?1, slug = ?2, description = ?3, position = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                stored.name,
                stored.slug,
                stored.description,
                stored.position,
                encode_timestamp(stored.updated_at),
                stored.id,
            ],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound { entity: "area" });
        }
        Ok(stored)
    }

    /// Deletes an area; cascades to its works and their attachments.
    pub fn delete(&self, id: i64) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM areas WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound { entity: "area" });
        }
        Ok(())
    }

    /// Lists all areas ordered by position, then name.
    pub fn list(&self) -> StoreResult<Vec<Area>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AREA_SELECT_SQL} ORDER BY position, name"))?;
        let areas = stmt
            .query_map([], map_area)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(areas)
    }

    /// Finds an area by slug.
    pub fn find_by_slug(&self, slug: &str) -> StoreResult<Option<Area>> {
        let area = self
            .conn
            .query_row(
                &format!("{AREA_SELECT_SQL} WHERE slug = ?1"),
                params![slug],
                map_area,
            )
            .optional()?;
        Ok(area)
    }
}

fn map_area(row: &Row<'_>) -> rusqlite::Result<Area> {
    Ok(Area {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        description: row.get(3)?,
        position: row.get(4)?,
        created_at: decode_timestamp(row.get(5)?)?,
        updated_at: decode_timestamp(row.get(6)?)?,
    })
}
