//! Persisted portal records and their validation rules.

mod area;
mod documento;
mod highlight;
mod trabajo;

pub use area::Area;
pub use documento::{DocType, Documento};
pub use highlight::Highlight;
pub use trabajo::{MAX_TAGLINE_WORDS, Status, Trabajo};

use thiserror::Error;

/// Validation failure raised before any record reaches the store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("invalid slug: {0:?}")]
    InvalidSlug(String),
    #[error("Tagline too long: {words} words. Please use {max} words or fewer.")]
    TaglineTooLong { words: usize, max: usize },
    #[error("Provide either a file upload or a URL.")]
    MissingDocumentoSource,
}

/// Checks that a slug is non-empty and uses only letters, digits,
/// hyphens, and underscores.
pub(crate) fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() {
        return Err(ValidationError::Empty("slug"));
    }
    let valid = slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(ValidationError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}
