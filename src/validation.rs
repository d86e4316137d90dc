use crate::error::{BookError, BookResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> BookResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(BookError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Normalizes a name for lookup: first character uppercased, the rest
/// lowercased, so "anna", "ANNA" and "Anna" all address the same contact.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
