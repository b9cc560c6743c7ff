//! Parsed documents handed over by the markdown parser

use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Insertion-ordered front-matter attributes
pub type Attributes = serde_json::Map<String, Value>;

/// A document as produced by the upstream parser.
///
/// `attributes` reads as `None` unless it is a map, so that a broken record
/// can be reported instead of failing the parse; see
/// [`ParsedDocument::validate`]. The string fields never fail: scalars are
/// stringified and anything else reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedDocument {
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: String,
    #[serde(
        default,
        deserialize_with = "map_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub attributes: Option<Attributes>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub body: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: String,
}

pub type ParsedPost = ParsedDocument;
pub type ParsedAuthor = ParsedDocument;

/// Document kind, used for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Post,
    Author,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Post => "post",
            DocumentKind::Author => "author",
        }
    }
}

impl ParsedDocument {
    pub fn new(slug: impl Into<String>, attributes: Attributes) -> Self {
        ParsedDocument {
            slug: slug.into(),
            attributes: Some(attributes),
            ..Default::default()
        }
    }

    /// Turn a parser record into a [`Document`], failing when it has no attributes
    pub fn validate(self, kind: DocumentKind) -> Result<Document> {
        let Some(attributes) = self.attributes else {
            return Err(BlogError::MalformedInput {
                kind: kind.as_str(),
                slug: self.slug,
            });
        };

        if self.body.is_empty() || self.summary.is_empty() {
            tracing::debug!(
                kind = kind.as_str(),
                slug = %self.slug,
                "document has empty body or summary"
            );
        }

        if kind == DocumentKind::Post
            && attributes
                .get("tags")
                .and_then(Value::as_str)
                .is_none_or(str::is_empty)
        {
            tracing::debug!(slug = %self.slug, "post has no tags");
        }

        Ok(Document {
            slug: self.slug,
            attributes,
            body: self.body,
            summary: self.summary,
        })
    }
}

/// A validated post or author
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub slug: String,
    pub attributes: Attributes,
    pub body: String,
    pub summary: String,
}

impl Document {
    /// String attribute lookup; non-string values read as absent
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    /// Only an explicit boolean `false` marks a draft
    pub fn is_draft(&self) -> bool {
        matches!(self.attributes.get("published"), Some(Value::Bool(false)))
    }
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        value @ (Value::Bool(_) | Value::Number(_)) => value.to_string(),
        other => {
            tracing::debug!(value = %other, "ignoring non-scalar document field");
            String::new()
        }
    })
}

fn map_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<Attributes>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => Some(map),
        Value::Null => None,
        other => {
            tracing::debug!(value = %other, "attributes is not a map");
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let doc: ParsedDocument =
            serde_json::from_value(json!({ "attributes": { "title": "Hi" } })).unwrap();
        assert_eq!(doc.slug, "");
        assert_eq!(doc.body, "");
        assert_eq!(doc.summary, "");
        assert!(doc.attributes.is_some());
    }

    #[test]
    fn test_null_body_reads_as_empty() {
        let doc: ParsedDocument = serde_json::from_value(
            json!({ "slug": "a", "attributes": {}, "body": null, "summary": null }),
        )
        .unwrap();
        assert_eq!(doc.body, "");
        assert_eq!(doc.summary, "");
    }

    #[test]
    fn test_non_string_fields_degrade() {
        let doc: ParsedDocument = serde_json::from_value(
            json!({ "slug": null, "attributes": {}, "body": ["x"], "summary": 5 }),
        )
        .unwrap();
        assert_eq!(doc.slug, "");
        assert_eq!(doc.body, "");
        assert_eq!(doc.summary, "5");

        let doc: ParsedDocument =
            serde_json::from_value(json!({ "slug": 42, "attributes": {}, "body": true })).unwrap();
        assert_eq!(doc.slug, "42");
        assert_eq!(doc.body, "true");
    }

    #[test]
    fn test_non_map_attributes_are_malformed() {
        for attributes in [json!("oops"), json!([]), json!(7), json!(null)] {
            let doc: ParsedDocument =
                serde_json::from_value(json!({ "slug": "a", "attributes": attributes })).unwrap();
            assert!(doc.attributes.is_none());
            match doc.validate(DocumentKind::Author).unwrap_err() {
                BlogError::MalformedInput { kind, slug } => {
                    assert_eq!(kind, "author");
                    assert_eq!(slug, "a");
                }
                other => panic!("Expected MalformedInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validate_without_attributes_fails() {
        let doc: ParsedDocument = serde_json::from_value(json!({ "slug": "broken" })).unwrap();
        match doc.validate(DocumentKind::Post).unwrap_err() {
            BlogError::MalformedInput { kind, slug } => {
                assert_eq!(kind, "post");
                assert_eq!(slug, "broken");
            }
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_is_draft_only_for_explicit_false() {
        let draft = ParsedDocument::new("a", attrs(json!({ "published": false })))
            .validate(DocumentKind::Post)
            .unwrap();
        let published = ParsedDocument::new("b", attrs(json!({ "published": true })))
            .validate(DocumentKind::Post)
            .unwrap();
        let implicit = ParsedDocument::new("c", attrs(json!({})))
            .validate(DocumentKind::Post)
            .unwrap();
        let string_false = ParsedDocument::new("d", attrs(json!({ "published": "false" })))
            .validate(DocumentKind::Post)
            .unwrap();

        assert!(draft.is_draft());
        assert!(!published.is_draft());
        assert!(!implicit.is_draft());
        assert!(!string_false.is_draft());
    }

    #[test]
    fn test_attribute_str_ignores_non_strings() {
        let doc = ParsedDocument::new("a", attrs(json!({ "author": "dave", "tags": 3 })))
            .validate(DocumentKind::Post)
            .unwrap();
        assert_eq!(doc.attribute_str("author"), Some("dave"));
        assert_eq!(doc.attribute_str("tags"), None);
        assert_eq!(doc.attribute_str("missing"), None);
    }
}
