//! List tags use case

use crate::application::BuildOrchestrator;
use crate::domain::tags::{count_tags, TagCount};
use crate::error::Result;
use crate::infrastructure::ContentSource;

/// Service for listing tag post-counts without writing any output.
pub struct ListTagsService {
    orchestrator: BuildOrchestrator,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(orchestrator: BuildOrchestrator) -> Self {
        Self { orchestrator }
    }

    /// Tags of the posts that the configured environment would publish.
    pub fn execute(&self, source: &dyn ContentSource) -> Result<Vec<TagCount>> {
        let (posts, _, _) = self.orchestrator.collect(source)?;
        Ok(count_tags(&posts))
    }
}
