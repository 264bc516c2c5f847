//! Media storage backends and canonical stored-file layout.
//!
//! Stored media live either on the local filesystem (served by the portal
//! under the media URL prefix) or on a third-party media host. The backend
//! is chosen from configuration: a configured media host base URL switches
//! every stored path to resolve against that host, mirroring how the
//! database switch works for the rest of the deployment.

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Resolves stored media file names to public URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaStorage {
    /// Files under a local directory, served by the portal itself.
    Filesystem { root: PathBuf, base_url: String },
    /// Files mirrored on an external media host.
    Hosted { base_url: String },
}

impl MediaStorage {
    /// Chooses the backend from configuration.
    ///
    /// A non-empty media host URL selects the hosted backend; otherwise
    /// files resolve under the local media URL prefix.
    pub fn from_config(config: &Config) -> Self {
        match config.media_host_url.as_deref().map(str::trim) {
            Some(base) if !base.is_empty() => Self::Hosted {
                base_url: base.to_string(),
            },
            _ => Self::Filesystem {
                root: config.media_root.clone(),
                base_url: config.media_url.clone(),
            },
        }
    }

    /// Returns the public URL for a stored file name.
    pub fn url(&self, name: &str) -> String {
        let base = match self {
            Self::Filesystem { base_url, .. } => base_url,
            Self::Hosted { base_url } => base_url,
        };
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            name.trim_start_matches('/')
        )
    }

    /// Returns the local media root when files are served from disk.
    pub fn local_root(&self) -> Option<&Path> {
        match self {
            Self::Filesystem { root, .. } => Some(root),
            Self::Hosted { .. } => None,
        }
    }
}

/// Canonical stored path for a work's image:
/// `catalogo/images/<area_slug>/<trabajo_slug>/<file>`.
pub fn trabajo_image_path(area_slug: &str, trabajo_slug: &str, filename: &str) -> String {
    format!(
        "catalogo/images/{}/{}/{}",
        safe_slug(area_slug, "area"),
        safe_slug(trabajo_slug, "trabajo"),
        base_name(filename)
    )
}

/// Canonical stored path for a document file:
/// `catalogo/docs/<area_slug>/<trabajo_slug>/<file>`.
pub fn documento_file_path(area_slug: &str, trabajo_slug: &str, filename: &str) -> String {
    format!(
        "catalogo/docs/{}/{}/{}",
        safe_slug(area_slug, "area"),
        safe_slug(trabajo_slug, "trabajo"),
        base_name(filename)
    )
}

fn safe_slug<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { fallback } else { trimmed }
}

fn base_name(filename: &str) -> &str {
    Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename)
}

/// Outcome counts of a media re-homing run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MediaMigrationReport {
    pub moved: usize,
    pub skipped: usize,
    pub unchanged: usize,
}

/// Re-homes stored media files into the canonical layout.
///
/// Walks every work image and document file, computes the canonical path
/// from the current area and work slugs, moves the file on disk, and
/// rewrites the stored path. Files already canonical are left alone;
/// files missing on disk are reported and skipped.
///
/// # Errors
///
/// Returns an error on database failures or filesystem moves that fail
/// for reasons other than a missing source file.
pub fn migrate_media(conn: &Connection, media_root: &Path) -> Result<MediaMigrationReport> {
    let mut report = MediaMigrationReport::default();

    let mut stmt = conn.prepare(
        "SELECT t.id, t.image_path, a.slug, t.slug
         FROM trabajos t JOIN areas a ON a.id = t.area_id
         WHERE t.image_path IS NOT NULL AND t.image_path != ''",
    )?;
    let images = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    for (id, current, area_slug, trabajo_slug) in images {
        let canonical = trabajo_image_path(&area_slug, &trabajo_slug, &current);
        match relocate(media_root, &current, &canonical)? {
            Relocation::Moved => {
                conn.execute(
                    "UPDATE trabajos SET image_path = ?1 WHERE id = ?2",
                    rusqlite::params![canonical, id],
                )?;
                tracing::info!("[OK] moved image: {current} -> {canonical}");
                report.moved += 1;
            }
            Relocation::Missing => {
                tracing::warn!("[SKIP] file not found: {current}");
                report.skipped += 1;
            }
            Relocation::AlreadyCanonical => report.unchanged += 1,
        }
    }

    let mut stmt = conn.prepare(
        "SELECT d.id, d.file_path, a.slug, t.slug
         FROM documentos d
         JOIN trabajos t ON t.id = d.trabajo_id
         JOIN areas a ON a.id = t.area_id
         WHERE d.file_path IS NOT NULL AND d.file_path != ''",
    )?;
    let files = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    for (id, current, area_slug, trabajo_slug) in files {
        let canonical = documento_file_path(&area_slug, &trabajo_slug, &current);
        match relocate(media_root, &current, &canonical)? {
            Relocation::Moved => {
                conn.execute(
                    "UPDATE documentos SET file_path = ?1 WHERE id = ?2",
                    rusqlite::params![canonical, id],
                )?;
                tracing::info!("[OK] moved document: {current} -> {canonical}");
                report.moved += 1;
            }
            Relocation::Missing => {
                tracing::warn!("[SKIP] file not found: {current}");
                report.skipped += 1;
            }
            Relocation::AlreadyCanonical => report.unchanged += 1,
        }
    }

    Ok(report)
}

enum Relocation {
    Moved,
    Missing,
    AlreadyCanonical,
}

fn relocate(root: &Path, current: &str, canonical: &str) -> Result<Relocation> {
    if current == canonical {
        return Ok(Relocation::AlreadyCanonical);
    }

    let source = root.join(current);
    if !source.exists() {
        return Ok(Relocation::Missing);
    }

    let target = root.join(canonical);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create media directory: {}", parent.display()))?;
    }
    fs::rename(&source, &target).with_context(|| {
        format!(
            "Failed to move media file: {} -> {}",
            source.display(),
            target.display()
        )
    })?;
    Ok(Relocation::Moved)
}
