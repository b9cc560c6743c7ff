//! Tag tokenization from the comma-delimited `tags` attribute

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Separator between tags: a comma followed by any amount of whitespace
fn separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r",\s*").unwrap())
}

/// Split a raw `tags` string into tokens.
///
/// Tokens keep their raw text. Empty tokens (an empty string, a leading or
/// trailing comma) are dropped, so `""` yields no tags at all.
///
/// # Examples
///
/// ```
/// use blogapi::domain::tags::split_tags;
///
/// assert_eq!(split_tags("ember, testing"), vec!["ember", "testing"]);
/// assert_eq!(split_tags("testing,cycling,"), vec!["testing", "cycling"]);
/// assert!(split_tags("").is_empty());
/// ```
pub fn split_tags(raw: &str) -> Vec<&str> {
    separator_regex()
        .split(raw)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Tokens of a `tags` attribute value; anything but a string has no tags
pub fn tags_from_value(value: Option<&Value>) -> Vec<&str> {
    match value {
        Some(Value::String(raw)) => split_tags(raw),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            tracing::debug!(value = %other, "ignoring non-string tags attribute");
            Vec::new()
        }
    }
}
