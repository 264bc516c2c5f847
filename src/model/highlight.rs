//! Labeled key/value facts attached to a work.

use chrono::{DateTime, Utc};

use super::ValidationError;

/// A labeled fact shown on the work detail page, e.g. "Cobertura: nacional".
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub id: i64,
    pub trabajo_id: i64,
    pub label: String,
    pub value: String,
    pub position: u32,
    pub created_at: DateTime<Utc>,
}

impl Highlight {
    /// Validates the record before persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::Empty("label"));
        }
        Ok(())
    }

    /// Returns "label: value", or just the label when the value is empty.
    pub fn display_text(&self) -> String {
        if self.value.is_empty() {
            self.label.clone()
        } else {
            format!("{}: {}", self.label, self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_with_and_without_value() {
        let mut highlight = Highlight {
            id: 0,
            trabajo_id: 1,
            label: "Cobertura".to_string(),
            value: "nacional".to_string(),
            position: 0,
            created_at: Utc::now(),
        };
        assert_eq!(highlight.display_text(), "Cobertura: nacional");

        highlight.value.clear();
        assert_eq!(highlight.display_text(), "Cobertura");
    }

    #[test]
    fn test_empty_label_rejected() {
        let highlight = Highlight {
            id: 0,
            trabajo_id: 1,
            label: String::new(),
            value: String::new(),
            position: 0,
            created_at: Utc::now(),
        };
        assert_eq!(highlight.validate(), Err(ValidationError::Empty("label")));
    }
}
