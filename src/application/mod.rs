//! Application layer - Use cases and orchestration

pub mod build;
pub mod list_tags;

pub use build::{BuildOrchestrator, BuildReport};
pub use list_tags::ListTagsService;
