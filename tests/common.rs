//! Shared test utilities for integration tests.
//!
//! Provides builders for portal records and a configuration suitable for
//! tests, used across the store and server test files.

#![allow(dead_code)]

use catalogo::{Area, Config, DocType, Documento, Highlight, Status, Trabajo};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Returns a configuration with defaults suitable for tests.
pub fn test_config() -> Config {
    Config {
        bind: "127.0.0.1:0".parse().unwrap(),
        database: PathBuf::from(":memory:"),
        media_root: PathBuf::from("media"),
        media_url: "/media/".to_string(),
        media_host_url: None,
        preview_token: None,
        richtext_disabled: false,
        command: None,
    }
}

/// Builds an unsaved area record.
pub fn new_area(name: &str, slug: &str, position: u32) -> Area {
    Area {
        id: 0,
        name: name.to_string(),
        slug: slug.to_string(),
        description: String::new(),
        position,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        updated_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

/// Builds an unsaved work record with empty text fields.
pub fn new_trabajo(area_id: i64, title: &str, slug: &str, status: Status) -> Trabajo {
    Trabajo {
        id: 0,
        area_id,
        title: title.to_string(),
        slug: slug.to_string(),
        tagline: String::new(),
        summary: String::new(),
        description: String::new(),
        app_url: String::new(),
        image_path: None,
        image_url: String::new(),
        thumbnail_url: String::new(),
        status,
        published_at: None,
        is_featured: false,
        position: 0,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        updated_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

/// Builds an unsaved work record published at a fixed instant.
pub fn published_trabajo(
    area_id: i64,
    title: &str,
    slug: &str,
    published_at: &str,
) -> Trabajo {
    let mut trabajo = new_trabajo(area_id, title, slug, Status::Published);
    trabajo.published_at = Some(published_at.parse().expect("test timestamp"));
    trabajo
}

/// Builds an unsaved highlight record.
pub fn new_highlight(trabajo_id: i64, label: &str, value: &str, position: u32) -> Highlight {
    Highlight {
        id: 0,
        trabajo_id,
        label: label.to_string(),
        value: value.to_string(),
        position,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

/// Builds an unsaved link-backed document record.
pub fn new_documento(trabajo_id: i64, title: &str, doc_type: DocType, url: &str) -> Documento {
    Documento {
        id: 0,
        trabajo_id,
        title: title.to_string(),
        doc_type,
        file_path: None,
        url: url.to_string(),
        position: 0,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}
