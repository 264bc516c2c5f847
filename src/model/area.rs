//! Top-level category records.

use chrono::{DateTime, Utc};

use super::{ValidationError, validate_slug};

/// Top-level category grouping cataloged works.
///
/// Areas carry a Markdown description rendered on the public site and a
/// manual position used for ordering alongside the name.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub position: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Area {
    /// Validates the record before persistence.
    ///
    /// # Errors
    ///
    /// Returns an error when the name is empty or the slug is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Empty("name"));
        }
        validate_slug(&self.slug)
    }

    /// Returns the public URL path of the area detail page.
    pub fn url_path(&self) -> String {
        format!("/areas/{}/", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_area() -> Area {
        Area {
            id: 0,
            name: "Estadísticas".to_string(),
            slug: "estadisticas".to_string(),
            description: String::new(),
            position: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_valid_area_passes() {
        assert!(sample_area().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut area = sample_area();
        area.name = "  ".to_string();
        assert_eq!(area.validate(), Err(ValidationError::Empty("name")));
    }

    #[test]
    fn test_url_path_uses_slug() {
        assert_eq!(sample_area().url_path(), "/areas/estadisticas/");
    }
}
