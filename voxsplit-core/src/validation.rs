//! Input validation for long-text jobs

use crate::config::ChunkerConfig;
use crate::text::char_len;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Minimum share of distinct words; below this the text is rejected
const MIN_UNIQUE_WORD_RATIO: f64 = 0.1;

/// Outcome of validating an input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the text may be submitted
    pub is_valid: bool,
    /// Rejection reason; empty when valid
    pub message: String,
}

impl ValidationResult {
    /// A passing result
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    /// A failing result with a reason
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Check that text is acceptable for long-text processing
///
/// Rejects blank text, trimmed lengths outside the configured bounds, and
/// text whose distinct-word share is below 10%. All comparisons are strict,
/// so text that sits exactly on a bound passes.
pub fn validate_long_text_input(text: &str, config: &ChunkerConfig) -> ValidationResult {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid("Input text cannot be empty");
    }

    let text_length = char_len(trimmed);
    let min_length = config.long_text_min_length;
    let max_length = config.long_text_max_length;

    if text_length < min_length {
        return ValidationResult::invalid(format!(
            "Text must be at least {min_length} characters for long-text processing \
             (received {text_length} characters)"
        ));
    }

    if text_length > max_length {
        return ValidationResult::invalid(format!(
            "Text is too long ({text_length} characters). Maximum allowed: {max_length}"
        ));
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    let unique: HashSet<&str> = words.iter().copied().collect();
    if (unique.len() as f64) < words.len() as f64 * MIN_UNIQUE_WORD_RATIO {
        log::debug!(
            "rejecting repetitive input: {} unique of {} words",
            unique.len(),
            words.len()
        );
        return ValidationResult::invalid("Text appears to be excessively repetitive");
    }

    ValidationResult::valid()
}
