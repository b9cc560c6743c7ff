//! Aggregation of parsed documents into JSON:API collections
//!
//! Everything here is a pure function of its inputs and never fails:
//! missing fields have already degraded to empty values by the time a
//! [`Document`] exists.

use super::document::{Attributes, Document};
use super::resource::{Resource, ResourceCollection, ResourceType};
use super::tags::count_tags;
use serde_json::Value;

/// The three collections produced by one build
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildOutput {
    pub articles: ResourceCollection,
    pub tags: ResourceCollection,
    pub authors: ResourceCollection,
}

impl BuildOutput {
    /// Collections keyed by their output names, in emit order
    pub fn named(&self) -> [(&'static str, &ResourceCollection); 3] {
        [
            ("posts", &self.articles),
            ("tags", &self.tags),
            ("authors", &self.authors),
        ]
    }
}

/// Turns documents into resource collections
pub struct ContentAggregator;

impl ContentAggregator {
    /// Serialize documents as resources of the given type, preserving order.
    ///
    /// Attributes are the document's own attributes followed by `body`,
    /// `summary` and `slug`, which always win over same-named keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use blogapi::domain::{ContentAggregator, DocumentKind, ParsedDocument, ResourceType};
    /// use serde_json::json;
    ///
    /// let mut attributes = serde_json::Map::new();
    /// attributes.insert("title".to_string(), json!("Hello"));
    /// attributes.insert("slug".to_string(), json!("stale"));
    /// let doc = ParsedDocument::new("hello", attributes)
    ///     .validate(DocumentKind::Post)
    ///     .unwrap();
    ///
    /// let collection = ContentAggregator::to_resource_collection(ResourceType::Article, &[doc]);
    /// assert_eq!(collection.data[0].id, "hello");
    /// assert_eq!(collection.data[0].attributes["slug"], json!("hello"));
    /// ```
    pub fn to_resource_collection(kind: ResourceType, items: &[Document]) -> ResourceCollection {
        let data = items
            .iter()
            .map(|doc| Resource::new(doc.slug.clone(), kind, Self::merged_attributes(doc)))
            .collect();
        ResourceCollection::new(data)
    }

    /// One tag resource per distinct tag, in first-occurrence order
    pub fn build_tag_collection(posts: &[Document]) -> ResourceCollection {
        let data = count_tags(posts)
            .into_iter()
            .map(|tag| {
                let mut attributes = Attributes::new();
                attributes.insert("name".to_string(), Value::from(tag.name.clone()));
                attributes.insert("postCount".to_string(), Value::from(tag.post_count));
                Resource::new(tag.name, ResourceType::Tag, attributes)
            })
            .collect();
        ResourceCollection::new(data)
    }

    /// Author resources with a `postCount` of the given posts they wrote.
    ///
    /// A post belongs to an author when its `author` attribute equals the
    /// author's slug.
    pub fn build_author_collection(authors: &[Document], posts: &[Document]) -> ResourceCollection {
        let mut collection = Self::to_resource_collection(ResourceType::Author, authors);

        for resource in &mut collection.data {
            let post_count = posts
                .iter()
                .filter(|post| post.attribute_str("author") == Some(resource.id.as_str()))
                .count();
            resource
                .attributes
                .insert("postCount".to_string(), Value::from(post_count));
        }

        collection
    }

    /// Build all three collections from the included posts and all authors
    pub fn aggregate(posts: &[Document], authors: &[Document]) -> BuildOutput {
        BuildOutput {
            articles: Self::to_resource_collection(ResourceType::Article, posts),
            tags: Self::build_tag_collection(posts),
            authors: Self::build_author_collection(authors, posts),
        }
    }

    fn merged_attributes(doc: &Document) -> Attributes {
        let mut attributes = doc.attributes.clone();
        // Remove first so the synthesized keys land at the end, after the
        // document's own attributes.
        for (key, value) in [
            ("body", &doc.body),
            ("summary", &doc.summary),
            ("slug", &doc.slug),
        ] {
            attributes.remove(key);
            attributes.insert(key.to_string(), Value::from(value.as_str()));
        }
        attributes
    }
}
