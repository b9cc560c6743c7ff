//! Build use case
//!
//! Collects parsed documents, filters drafts for the configured environment,
//! aggregates the collections and hands them to a sink.

use crate::domain::{
    BuildOutput, ContentAggregator, Document, DocumentKind, Environment, ParsedDocument,
};
use crate::error::Result;
use crate::infrastructure::{BuildConfig, CollectionSink, ContentSource};

/// Counts describing a finished build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildReport {
    pub total_posts: usize,
    pub included_posts: usize,
    pub drafts_skipped: usize,
    pub tags: usize,
    pub authors: usize,
}

/// Runs one build with an explicit configuration
pub struct BuildOrchestrator {
    config: BuildConfig,
}

impl BuildOrchestrator {
    /// Create a new orchestrator
    pub fn new(config: BuildConfig) -> Self {
        BuildOrchestrator { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Whether a post goes into this build.
    ///
    /// Drafts are only hidden from production builds.
    pub fn is_publishable(post: &Document, environment: &Environment) -> bool {
        !environment.is_production() || !post.is_draft()
    }

    /// Collect, validate and filter documents.
    ///
    /// Returns the included posts, all authors and the number of posts
    /// before filtering.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source fails to load
    /// - Any post or author lacks attributes
    pub fn collect(
        &self,
        source: &dyn ContentSource,
    ) -> Result<(Vec<Document>, Vec<Document>, usize)> {
        // 1. Collect
        let parsed_posts = source.parsed_posts()?;
        let parsed_authors = source.parsed_authors()?;
        tracing::info!(
            posts = parsed_posts.len(),
            authors = parsed_authors.len(),
            "collected documents"
        );

        // 2. Validate
        let posts = validate_all(parsed_posts, DocumentKind::Post)?;
        let authors = validate_all(parsed_authors, DocumentKind::Author)?;

        // 3. Filter
        let total_posts = posts.len();
        let environment = &self.config.environment;
        let included: Vec<Document> = posts
            .into_iter()
            .filter(|post| {
                let keep = Self::is_publishable(post, environment);
                if !keep {
                    tracing::debug!(slug = %post.slug, %environment, "skipping draft");
                }
                keep
            })
            .collect();

        Ok((included, authors, total_posts))
    }

    /// Collect and aggregate without emitting
    pub fn prepare(&self, source: &dyn ContentSource) -> Result<(BuildOutput, BuildReport)> {
        let (included, authors, total_posts) = self.collect(source)?;

        // 4. Aggregate
        let output = ContentAggregator::aggregate(&included, &authors);

        let report = BuildReport {
            total_posts,
            included_posts: included.len(),
            drafts_skipped: total_posts - included.len(),
            tags: output.tags.len(),
            authors: output.authors.len(),
        };

        Ok((output, report))
    }

    /// Run the full build and emit the collections
    pub fn run(
        &self,
        source: &dyn ContentSource,
        sink: &mut dyn CollectionSink,
    ) -> Result<BuildReport> {
        let (output, report) = self.prepare(source)?;

        // 5. Emit
        sink.emit(&output)?;
        tracing::info!(
            environment = %self.config.environment,
            articles = report.included_posts,
            tags = report.tags,
            authors = report.authors,
            "build finished"
        );

        Ok(report)
    }
}

fn validate_all(docs: Vec<ParsedDocument>, kind: DocumentKind) -> Result<Vec<Document>> {
    docs.into_iter().map(|doc| doc.validate(kind)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Attributes;
    use crate::error::BlogError;
    use crate::infrastructure::{InMemorySource, MemorySink};
    use serde_json::{json, Value};

    fn parsed(slug: &str, attributes: Value) -> ParsedDocument {
        let Value::Object(attributes) = attributes else {
            panic!("expected object");
        };
        ParsedDocument::new(slug, attributes)
    }

    fn source() -> InMemorySource {
        InMemorySource::new(
            vec![
                parsed(
                    "draft",
                    json!({ "author": "dave", "title": "Draft Post", "tags": "wip", "published": false }),
                ),
                parsed(
                    "live",
                    json!({ "author": "dave", "title": "Published Post", "tags": "ember" }),
                ),
            ],
            vec![parsed("dave", json!({ "name": "Dave" }))],
        )
    }

    fn build(environment: Environment) -> (BuildOutput, BuildReport) {
        let orchestrator = BuildOrchestrator::new(BuildConfig::new(environment, "dist"));
        let mut sink = MemorySink::default();
        let report = orchestrator.run(&source(), &mut sink).unwrap();
        (sink.output.unwrap(), report)
    }

    #[test]
    fn test_production_excludes_drafts_everywhere() {
        let (output, report) = build(Environment::production());

        assert!(output.articles.get("draft").is_none());
        assert!(output.articles.get("live").is_some());
        assert!(output.tags.get("wip").is_none());
        assert_eq!(
            output.authors.get("dave").unwrap().attributes["postCount"],
            json!(1)
        );
        assert_eq!(report.drafts_skipped, 1);
        assert_eq!(report.included_posts, 1);
    }

    #[test]
    fn test_development_includes_drafts() {
        let (output, report) = build(Environment::development());

        assert_eq!(output.articles.len(), 2);
        assert!(output.tags.get("wip").is_some());
        assert_eq!(
            output.authors.get("dave").unwrap().attributes["postCount"],
            json!(2)
        );
        assert_eq!(report.drafts_skipped, 0);
    }

    #[test]
    fn test_any_other_environment_is_permissive() {
        let (output, _) = build(Environment::new("staging"));
        assert!(output.articles.get("draft").is_some());
    }

    #[test]
    fn test_malformed_post_aborts_without_emit() {
        let mut source = source();
        source.posts.push(ParsedDocument {
            slug: "broken".to_string(),
            ..Default::default()
        });

        let orchestrator = BuildOrchestrator::new(BuildConfig::default());
        let mut sink = MemorySink::default();
        let err = orchestrator.run(&source, &mut sink).unwrap_err();

        assert!(matches!(
            err,
            BlogError::MalformedInput { kind: "post", ref slug } if slug == "broken"
        ));
        assert!(sink.output.is_none());
    }

    #[test]
    fn test_malformed_author_aborts() {
        let source = InMemorySource::new(Vec::new(), vec![ParsedDocument::default()]);
        let orchestrator = BuildOrchestrator::new(BuildConfig::default());
        let result = orchestrator.prepare(&source);
        assert!(matches!(
            result,
            Err(BlogError::MalformedInput { kind: "author", .. })
        ));
    }

    #[test]
    fn test_is_publishable() {
        let draft = parsed("d", json!({ "published": false }))
            .validate(DocumentKind::Post)
            .unwrap();
        let post = ParsedDocument::new("p", Attributes::new())
            .validate(DocumentKind::Post)
            .unwrap();

        assert!(!BuildOrchestrator::is_publishable(&draft, &Environment::production()));
        assert!(BuildOrchestrator::is_publishable(&draft, &Environment::development()));
        assert!(BuildOrchestrator::is_publishable(&post, &Environment::production()));
    }

    #[test]
    fn test_repeated_builds_identical() {
        let (first, _) = build(Environment::production());
        let (second, _) = build(Environment::production());
        assert_eq!(first, second);
    }
}
