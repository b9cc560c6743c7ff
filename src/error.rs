//! Error types for blogapi

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for blogapi
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Malformed {kind} '{slug}': missing attributes")]
    MalformedInput { kind: &'static str, slug: String },

    #[error("Content source not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl BlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BlogError::MalformedInput { .. } => 2,
            BlogError::SourceNotFound(_) => 3,
            BlogError::Config(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BlogError::MalformedInput { kind, slug } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Every parsed {} needs an \"attributes\" object\n\
                    • Check the front matter of '{}' in the upstream parser output\n\
                    • No output was written; fix the input and rebuild",
                    self, kind, slug
                )
            }
            BlogError::SourceNotFound(path) => {
                format!(
                    "Content source not found: {}\n\n\
                    Suggestions:\n\
                    • Pass --input pointing at a manifest file or a blog directory\n\
                    • Set input = \"...\" in blogapi.toml\n\
                    • A blog directory holds posts/ and authors/ with one JSON file per document",
                    path.display()
                )
            }
            BlogError::Config(msg) => {
                if msg.contains("not found") {
                    format!(
                        "{}\n\n\
                        Example blogapi.toml:\n\
                        environment = \"production\"\n\
                        output-directory = \"dist\"",
                        self
                    )
                } else {
                    self.to_string()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BlogError
pub type Result<T> = std::result::Result<T, BlogError>;
