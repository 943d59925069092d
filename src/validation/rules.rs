//! Per-field validation rules and the field-scoped error collector.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

/// Field-scoped validation messages, keyed by field name.
///
/// Fields appear in alphabetical order; messages for one field keep the
/// order in which the rules ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collector holding a single message.
    #[must_use]
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Records a message against `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns `true` when no field has failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one message.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// All messages recorded for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }

    /// The first message recorded for `field`, if any.
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field).first().map(String::as_str)
    }

    /// Returns `true` when `field` has at least one message.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for messages in self.0.values() {
            for message in messages {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(message)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Business length limits for post fields, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostLimits {
    /// Maximum title length.
    pub title_max_chars: usize,
    /// Maximum body length.
    pub info_max_chars: usize,
}

impl PostLimits {
    /// Column width of `posts.title`; business limits above it are clamped.
    pub const TITLE_COLUMN_CHARS: usize = 255;

    /// Creates limits, clamping the title limit to the column width.
    #[must_use]
    pub fn new(title_max_chars: usize, info_max_chars: usize) -> Self {
        Self {
            title_max_chars: title_max_chars.min(Self::TITLE_COLUMN_CHARS),
            info_max_chars,
        }
    }
}

impl Default for PostLimits {
    fn default() -> Self {
        Self::new(20, 100)
    }
}

/// Raw client input for one field, before any rule has run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldInput<'a> {
    /// Key absent or explicitly `null`.
    #[default]
    Absent,
    /// A JSON string.
    Text(&'a str),
    /// Any other JSON value (number, boolean, array, object).
    NotText,
}

impl<'a> FieldInput<'a> {
    /// Classifies an optional JSON value.
    #[must_use]
    pub fn from_json(value: Option<&'a serde_json::Value>) -> Self {
        match value {
            None | Some(serde_json::Value::Null) => Self::Absent,
            Some(serde_json::Value::String(text)) => Self::Text(text),
            Some(_) => Self::NotText,
        }
    }
}

impl<'a> From<Option<&'a str>> for FieldInput<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::Absent, Self::Text)
    }
}

/// Checks that a present value is a string.
///
/// Absent input passes as `Some(None)` so [`required`] can report it.
/// Non-string input records `"The <field> must be a string."` and returns
/// `None`; no further rule should run on that field.
pub fn string<'a>(
    field: &str,
    input: FieldInput<'a>,
    errors: &mut FieldErrors,
) -> Option<Option<&'a str>> {
    match input {
        FieldInput::Absent => Some(None),
        FieldInput::Text(text) => Some(Some(text)),
        FieldInput::NotText => {
            errors.add(field, format!("The {field} must be a string."));
            None
        }
    }
}

/// Checks that `value` is present and not blank.
///
/// Returns the value when it passes so later rules can run on it; records
/// `"The <field> field is required."` and returns `None` otherwise.
///
/// Only the blank check trims. The returned value is untouched, so length
/// and uniqueness see surrounding whitespace and `"Sample "` is distinct
/// from `"Sample"`.
pub fn required<'a>(
    field: &str,
    value: Option<&'a str>,
    errors: &mut FieldErrors,
) -> Option<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            errors.add(field, format!("The {field} field is required."));
            None
        }
    }
}

/// Checks that `value` has at most `max` characters (Unicode scalar values).
///
/// Returns `true` when the value passes.
pub fn max_chars(field: &str, value: &str, max: usize, errors: &mut FieldErrors) -> bool {
    if value.chars().count() > max {
        errors.add(
            field,
            format!("The {field} field must not be greater than {max} characters."),
        );
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_missing_empty_and_blank() {
        for value in [None, Some(""), Some("   ")] {
            let mut errors = FieldErrors::new();
            assert!(required("title", value, &mut errors).is_none());
            assert_eq!(errors.first("title"), Some("The title field is required."));
        }
    }

    #[test]
    fn string_rejects_non_text_json() {
        let number = serde_json::json!(123);
        let mut errors = FieldErrors::new();
        assert_eq!(
            string("title", FieldInput::from_json(Some(&number)), &mut errors),
            None
        );
        assert_eq!(errors.first("title"), Some("The title must be a string."));
    }

    #[test]
    fn string_lets_absent_and_text_through() {
        let null = serde_json::Value::Null;
        let text = serde_json::json!("Body");
        let mut errors = FieldErrors::new();
        assert_eq!(string("info", FieldInput::from_json(None), &mut errors), Some(None));
        assert_eq!(string("info", FieldInput::from_json(Some(&null)), &mut errors), Some(None));
        assert_eq!(
            string("info", FieldInput::from_json(Some(&text)), &mut errors),
            Some(Some("Body"))
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn required_passes_value_through() {
        let mut errors = FieldErrors::new();
        assert_eq!(required("info", Some("Body"), &mut errors), Some("Body"));
        assert!(errors.is_empty());
    }

    #[test]
    fn required_keeps_surrounding_whitespace() {
        let mut errors = FieldErrors::new();
        assert_eq!(required("title", Some("Sample "), &mut errors), Some("Sample "));
        assert!(errors.is_empty());
    }

    #[test]
    fn max_chars_boundary() {
        let mut errors = FieldErrors::new();
        assert!(max_chars("title", &"A".repeat(20), 20, &mut errors));
        assert!(errors.is_empty());

        assert!(!max_chars("title", &"A".repeat(21), 20, &mut errors));
        assert_eq!(
            errors.first("title"),
            Some("The title field must not be greater than 20 characters.")
        );
    }

    #[test]
    fn max_chars_counts_characters_not_bytes() {
        let mut errors = FieldErrors::new();
        // 20 two-byte characters
        assert!(max_chars("title", &"é".repeat(20), 20, &mut errors));
    }

    #[test]
    fn collector_keeps_per_field_order() {
        let mut errors = FieldErrors::new();
        errors.add("title", "first");
        errors.add("title", "second");
        errors.add("info", "other");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("title"), ["first", "second"]);
        assert!(errors.has("info"));
        assert!(errors.get("missing").is_empty());
        assert_eq!(errors.to_string(), "other first second");
    }

    #[test]
    fn limits_clamp_title_to_column_width() {
        let limits = PostLimits::new(1000, 5000);
        assert_eq!(limits.title_max_chars, PostLimits::TITLE_COLUMN_CHARS);
        assert_eq!(limits.info_max_chars, 5000);
    }
}
