//! Domain layer - Documents, resources and aggregation

pub mod aggregator;
pub mod document;
pub mod environment;
pub mod resource;
pub mod tags;

pub use aggregator::{BuildOutput, ContentAggregator};
pub use document::{
    Attributes, Document, DocumentKind, ParsedAuthor, ParsedDocument, ParsedPost,
};
pub use environment::Environment;
pub use resource::{Resource, ResourceCollection, ResourceType};
