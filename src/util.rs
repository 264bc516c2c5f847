//! Formatting helpers for page rendering

use chrono::{DateTime, Utc};

/// Formats a timestamp as a short human readable date
///
/// # Arguments
///
/// * `date`: Timestamp to format
///
/// # Returns
///
/// Date string like "3 Mar 2024"
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Truncates text to a maximum character count
///
/// Keeps the input unchanged when it fits; otherwise cuts at the limit
/// minus one and appends an ellipsis. Operates on characters, not bytes,
/// so multibyte text is never split mid-codepoint.
///
/// # Arguments
///
/// * `text`: Plain text to truncate
/// * `max_chars`: Maximum characters of the result, ellipsis included
///
/// # Returns
///
/// Possibly truncated string
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}
