//! SQLite persistence for portal records.
//!
//! Connections are bootstrapped with foreign keys on and all schema
//! migrations applied before any store touches application data. Write
//! paths validate records before mutating SQL state.

mod area_store;
mod documento_store;
mod highlight_store;
mod migrations;
mod trabajo_store;

pub use area_store::AreaStore;
pub use documento_store::DocumentoStore;
pub use highlight_store::HighlightStore;
pub use migrations::{apply_migrations, latest_version};
pub use trabajo_store::TrabajoStore;

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::model::ValidationError;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failure for portal stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
    #[error("database schema version {db_version} is newer than supported {latest_supported}")]
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
}

/// Opens a SQLite database file and applies all pending migrations.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or migrations fail.
pub fn open_db(path: impl AsRef<Path>) -> StoreResult<Connection> {
    let mut conn = Connection::open(path)?;
    bootstrap_connection(&mut conn)?;
    Ok(conn)
}

/// Opens an in-memory SQLite database and applies all pending migrations.
pub fn open_db_in_memory() -> StoreResult<Connection> {
    let mut conn = Connection::open_in_memory()?;
    bootstrap_connection(&mut conn)?;
    Ok(conn)
}

fn bootstrap_connection(conn: &mut Connection) -> StoreResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)?;
    tracing::debug!("database ready at schema version {}", latest_version());
    Ok(())
}

/// Returns the current time at the precision the store persists.
///
/// Stamped records stay equal to their re-read counterparts.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Encodes a timestamp for TEXT storage.
///
/// Fixed microsecond precision keeps lexicographic order chronological,
/// which the listing queries rely on.
pub(crate) fn encode_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Decodes a stored timestamp inside a row mapper.
pub(crate) fn decode_timestamp(raw: String) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(err),
            )
        })
}

/// Rejects invalid persisted enum values inside a row mapper.
#[derive(Debug, Error)]
#[error("invalid persisted {field} value: {value:?}")]
pub(crate) struct PersistedValueError {
    pub field: &'static str,
    pub value: String,
}

pub(crate) fn persisted_value_error(field: &'static str, value: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(PersistedValueError {
            field,
            value: value.to_string(),
        }),
    )
}
