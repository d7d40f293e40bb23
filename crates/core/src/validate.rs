//! Request payload validation helpers.
//!
//! All helpers return [`CoreError::Validation`] so handlers surface a 400
//! with a field-specific message before any database write happens.

use crate::error::CoreError;

/// Minimum admin password length enforced at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Require a text field to be present and non-empty after trimming.
///
/// Returns the original (untrimmed) value so stored content keeps the
/// author's formatting.
pub fn required_text(field: &'static str, value: Option<&str>) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Validate a keywords payload: must be a JSON array whose elements are all
/// non-empty strings. Returns the trimmed keyword list.
///
/// Taking a raw [`serde_json::Value`] lets the handler reject a non-array
/// payload with a 400 instead of a deserialization failure.
pub fn keyword_list(value: &serde_json::Value) -> Result<Vec<String>, CoreError> {
    let items = value
        .as_array()
        .ok_or_else(|| CoreError::Validation("keywords must be an array of strings".into()))?;

    let mut keywords = Vec::with_capacity(items.len());
    for item in items {
        let keyword = item
            .as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                CoreError::Validation("All keywords must be non-empty strings".into())
            })?;
        keywords.push(keyword.to_string());
    }
    Ok(keywords)
}

/// Validate a package feature list: every entry must be non-empty after
/// trimming. Returns the trimmed list.
pub fn feature_list(features: &[String]) -> Result<Vec<String>, CoreError> {
    let mut cleaned = Vec::with_capacity(features.len());
    for feature in features {
        let trimmed = feature.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation(
                "Package features must be non-empty strings".into(),
            ));
        }
        cleaned.push(trimmed.to_string());
    }
    Ok(cleaned)
}

/// Validate a star rating value (inclusive 1 to 5).
pub fn stars(value: i32) -> Result<(), CoreError> {
    if (1..=5).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "stars must be an integer between 1 and 5".into(),
        ))
    }
}

/// Normalize an email address for storage and lookup (trim + lowercase).
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
