//! Text shaping for table cells.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Placeholder shown in place of missing optional fields.
pub const MISSING_FIELD: &str = "Unknown";

/// Truncate `text` to at most `budget` characters, appending an ellipsis
/// when anything was cut. Shorter text is returned verbatim. The budget
/// counts characters, not bytes, so multibyte text never splits mid-char.
#[must_use]
pub fn truncate_ellipsis(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(budget).collect();
    out.push('…');
    out
}

/// Display an optional field, substituting [`MISSING_FIELD`] for absent or
/// blank values.
#[must_use]
pub fn or_missing(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_owned(),
        _ => MISSING_FIELD.to_owned(),
    }
}
