//! JSON fixture import for portal records.
//!
//! Fixtures are flat lists of `{model, pk, fields}` records, the format
//! the previous deployment dumped its data in. Primary keys are preserved
//! so cross-record references stay intact; records are imported in
//! dependency order regardless of their order in the file.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::model::{Area, DocType, Documento, Highlight, Status, Trabajo};
use crate::store::{AreaStore, DocumentoStore, HighlightStore, TrabajoStore};

/// Import counts per record kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixtureReport {
    pub areas: usize,
    pub trabajos: usize,
    pub highlights: usize,
    pub documentos: usize,
}

#[derive(Debug, Deserialize)]
struct FixtureRecord {
    model: String,
    pk: i64,
    fields: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct AreaFields {
    name: String,
    slug: String,
    #[serde(default)]
    description: String,
    #[serde(default, rename = "order")]
    position: u32,
}

#[derive(Debug, Deserialize)]
struct TrabajoFields {
    area: i64,
    title: String,
    slug: String,
    #[serde(default)]
    tagline: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    app_url: String,
    #[serde(default, rename = "image")]
    image_path: Option<String>,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    thumbnail_url: String,
    status: String,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    is_featured: bool,
    #[serde(default, rename = "order")]
    position: u32,
}

#[derive(Debug, Deserialize)]
struct HighlightFields {
    trabajo: i64,
    label: String,
    #[serde(default)]
    value: String,
    #[serde(default, rename = "order")]
    position: u32,
}

#[derive(Debug, Deserialize)]
struct DocumentoFields {
    trabajo: i64,
    title: String,
    doc_type: String,
    #[serde(default, rename = "file")]
    file_path: Option<String>,
    #[serde(default)]
    url: String,
    #[serde(default, rename = "order")]
    position: u32,
}

/// Imports a fixture file into the store.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed, when a
/// record carries an unknown model or enum value, or when an insert
/// fails validation or a database constraint.
pub fn load_fixture(conn: &Connection, path: &Path) -> Result<FixtureReport> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture: {}", path.display()))?;
    load_fixture_str(conn, &raw)
}

/// Imports fixture JSON from a string. See [`load_fixture`].
pub fn load_fixture_str(conn: &Connection, raw: &str) -> Result<FixtureReport> {
    let records: Vec<FixtureRecord> =
        serde_json::from_str(raw).context("Failed to parse fixture JSON")?;

    let mut areas = Vec::new();
    let mut trabajos = Vec::new();
    let mut highlights = Vec::new();
    let mut documentos = Vec::new();

    for record in records {
        let kind = record
            .model
            .rsplit('.')
            .next()
            .unwrap_or(record.model.as_str())
            .to_string();
        match kind.as_str() {
            "area" => areas.push(record),
            "trabajo" => trabajos.push(record),
            "highlight" => highlights.push(record),
            "documento" => documentos.push(record),
            other => bail!("Unknown fixture model: {other}"),
        }
    }

    let mut report = FixtureReport::default();
    let epoch = DateTime::<Utc>::UNIX_EPOCH;

    let area_store = AreaStore::new(conn);
    for record in areas {
        let fields: AreaFields = parse_fields(record.fields, record.pk, "area")?;
        area_store
            .insert(&Area {
                id: record.pk,
                name: fields.name,
                slug: fields.slug,
                description: fields.description,
                position: fields.position,
                created_at: epoch,
                updated_at: epoch,
            })
            .with_context(|| format!("Failed to import area pk={}", record.pk))?;
        report.areas += 1;
    }

    let trabajo_store = TrabajoStore::new(conn);
    for record in trabajos {
        let fields: TrabajoFields = parse_fields(record.fields, record.pk, "trabajo")?;
        let status = Status::parse(&fields.status)
            .with_context(|| format!("Unknown status {:?} on trabajo pk={}", fields.status, record.pk))?;
        let published_at = fields
            .published_at
            .as_deref()
            .map(parse_timestamp)
            .transpose()
            .with_context(|| format!("Bad published_at on trabajo pk={}", record.pk))?;

        trabajo_store
            .insert(&Trabajo {
                id: record.pk,
                area_id: fields.area,
                title: fields.title,
                slug: fields.slug,
                tagline: fields.tagline,
                summary: fields.summary,
                description: fields.description,
                app_url: fields.app_url,
                image_path: fields.image_path.filter(|p| !p.is_empty()),
                image_url: fields.image_url,
                thumbnail_url: fields.thumbnail_url,
                status,
                published_at,
                is_featured: fields.is_featured,
                position: fields.position,
                created_at: epoch,
                updated_at: epoch,
            })
            .with_context(|| format!("Failed to import trabajo pk={}", record.pk))?;
        report.trabajos += 1;
    }

    let highlight_store = HighlightStore::new(conn);
    for record in highlights {
        let fields: HighlightFields = parse_fields(record.fields, record.pk, "highlight")?;
        highlight_store
            .insert(&Highlight {
                id: record.pk,
                trabajo_id: fields.trabajo,
                label: fields.label,
                value: fields.value,
                position: fields.position,
                created_at: epoch,
            })
            .with_context(|| format!("Failed to import highlight pk={}", record.pk))?;
        report.highlights += 1;
    }

    let documento_store = DocumentoStore::new(conn);
    for record in documentos {
        let fields: DocumentoFields = parse_fields(record.fields, record.pk, "documento")?;
        let doc_type = DocType::parse(&fields.doc_type).with_context(|| {
            format!("Unknown doc_type {:?} on documento pk={}", fields.doc_type, record.pk)
        })?;

        documento_store
            .insert(&Documento {
                id: record.pk,
                trabajo_id: fields.trabajo,
                title: fields.title,
                doc_type,
                file_path: fields.file_path.filter(|p| !p.is_empty()),
                url: fields.url,
                position: fields.position,
                created_at: epoch,
            })
            .with_context(|| format!("Failed to import documento pk={}", record.pk))?;
        report.documentos += 1;
    }

    Ok(report)
}

fn parse_fields<T: serde::de::DeserializeOwned>(
    fields: serde_json::Value,
    pk: i64,
    model: &str,
) -> Result<T> {
    serde_json::from_value(fields).with_context(|| format!("Bad fields on {model} pk={pk}"))
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc))
}
