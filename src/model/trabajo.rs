//! Cataloged work records and their publication lifecycle.

use chrono::{DateTime, Utc};

use super::{ValidationError, validate_slug};
use crate::media::MediaStorage;

/// Maximum words allowed in a tagline so cards stay at roughly two lines.
pub const MAX_TAGLINE_WORDS: usize = 12;

/// Publication state of a work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Draft,
    Published,
    Archived,
}

impl Status {
    /// Returns the stored string value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    /// Parses a stored string value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(Self::Draft),
            "published" => Some(Self::Published),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }
}

/// A cataloged work belonging to an area.
///
/// Text fields hold Markdown: the tagline renders inline, summary and
/// description render as blocks. The hero image resolves from the uploaded
/// image when present, then the explicit image URL, then the thumbnail.
#[derive(Debug, Clone, PartialEq)]
pub struct Trabajo {
    pub id: i64,
    pub area_id: i64,
    pub title: String,
    pub slug: String,
    pub tagline: String,
    pub summary: String,
    pub description: String,
    pub app_url: String,
    pub image_path: Option<String>,
    pub image_url: String,
    pub thumbnail_url: String,
    pub status: Status,
    pub published_at: Option<DateTime<Utc>>,
    pub is_featured: bool,
    pub position: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trabajo {
    /// Validates the record before persistence.
    ///
    /// # Errors
    ///
    /// Returns an error when the title is empty, the slug is invalid, or
    /// the tagline exceeds [`MAX_TAGLINE_WORDS`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::Empty("title"));
        }
        validate_slug(&self.slug)?;

        let words = self.tagline.split_whitespace().count();
        if words > MAX_TAGLINE_WORDS {
            return Err(ValidationError::TaglineTooLong {
                words,
                max: MAX_TAGLINE_WORDS,
            });
        }
        Ok(())
    }

    /// Stamps `published_at` on the first transition to published.
    ///
    /// The timestamp is set exactly once; later saves, including a move
    /// back to draft, leave it untouched.
    pub fn mark_published(&mut self, now: DateTime<Utc>) {
        if self.status == Status::Published && self.published_at.is_none() {
            self.published_at = Some(now);
        }
    }

    /// Resolves the hero image URL, or an empty string when none is set.
    pub fn hero_image(&self, media: &MediaStorage) -> String {
        if let Some(path) = &self.image_path {
            return media.url(path);
        }
        if !self.image_url.is_empty() {
            return self.image_url.clone();
        }
        if !self.thumbnail_url.is_empty() {
            return self.thumbnail_url.clone();
        }
        String::new()
    }

    /// Returns the public URL path of the work detail page.
    pub fn url_path(&self, area_slug: &str) -> String {
        format!("/{}/{}/", area_slug, self.slug)
    }
}
