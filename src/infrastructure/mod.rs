//! Infrastructure layer - External I/O and configuration

pub mod config;
pub mod source;
pub mod writer;

pub use config::BuildConfig;
pub use source::{open_source, ContentSource, DirectorySource, InMemorySource, ManifestSource};
pub use writer::{CollectionSink, FileSystemWriter, MemorySink};
