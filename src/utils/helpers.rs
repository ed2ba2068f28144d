//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// Placeholder shown when an enquiry references a college that is not loaded
pub const UNKNOWN_COLLEGE: &str = "Unknown";

/// Format a timestamp as a calendar date for tables
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

/// Keep the first `max_chars` characters and append an ellipsis when the text is longer
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

/// Check that a string has the shape `local@domain.tld`
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let pattern = EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    });
    pattern.is_match(email)
}

/// Count characters rather than bytes
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
