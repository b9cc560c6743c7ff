//! JSON:API resource objects

use super::document::Attributes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The `type` member of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Article,
    Author,
    Tag,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceType::Article => "article",
            ResourceType::Author => "author",
            ResourceType::Tag => "tag",
        };
        f.write_str(name)
    }
}

/// A minimal `{ id, type, attributes }` resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub attributes: Attributes,
}

impl Resource {
    pub fn new(id: impl Into<String>, kind: ResourceType, attributes: Attributes) -> Self {
        Resource {
            id: id.into(),
            kind,
            attributes,
        }
    }
}

/// The `{ data: [...] }` envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceCollection {
    pub data: Vec<Resource>,
}

impl ResourceCollection {
    pub fn new(data: Vec<Resource>) -> Self {
        ResourceCollection { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Find a resource by id
    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.data.iter().find(|r| r.id == id)
    }

    /// Pretty JSON document with a trailing newline
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
