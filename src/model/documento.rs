//! Documents attached to a work, either uploaded files or external links.

use chrono::{DateTime, Utc};

use super::ValidationError;
use crate::media::MediaStorage;

/// Document category used for grouping on the detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocType {
    Metodologico,
    Datos,
    Otro,
}

impl DocType {
    /// Returns the stored string value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Metodologico => "metodologico",
            Self::Datos => "datos",
            Self::Otro => "otro",
        }
    }

    /// Parses a stored string value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "metodologico" => Some(Self::Metodologico),
            "datos" => Some(Self::Datos),
            "otro" => Some(Self::Otro),
            _ => None,
        }
    }

    /// Returns the section heading shown on the public site.
    pub fn label(self) -> &'static str {
        match self {
            Self::Metodologico => "Technical document",
            Self::Datos => "Statistics and reports",
            Self::Otro => "Viewers",
        }
    }
}

/// A file or link attached to a work.
///
/// Either a stored file path or an external URL must be present; the file
/// takes precedence when both are set.
#[derive(Debug, Clone, PartialEq)]
pub struct Documento {
    pub id: i64,
    pub trabajo_id: i64,
    pub title: String,
    pub doc_type: DocType,
    pub file_path: Option<String>,
    pub url: String,
    pub position: u32,
    pub created_at: DateTime<Utc>,
}

impl Documento {
    /// Validates the record before persistence.
    ///
    /// # Errors
    ///
    /// Returns an error when the title is empty or when neither a file
    /// nor a URL is provided.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::Empty("title"));
        }
        let has_file = self.file_path.as_deref().is_some_and(|p| !p.is_empty());
        if !has_file && self.url.is_empty() {
            return Err(ValidationError::MissingDocumentoSource);
        }
        Ok(())
    }

    /// Resolves the link target: stored file URL first, external URL second.
    pub fn href(&self, media: &MediaStorage) -> String {
        match self.file_path.as_deref() {
            Some(path) if !path.is_empty() => media.url(path),
            _ => self.url.clone(),
        }
    }
}
