//! Configuration management

use crate::domain::Environment;
use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "blogapi.toml";

/// Explicit settings for one build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct BuildConfig {
    pub environment: Environment,
    pub output_directory: PathBuf,
    pub input: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            environment: Environment::default(),
            output_directory: PathBuf::from("dist"),
            input: None,
        }
    }
}

impl BuildConfig {
    pub fn new(environment: Environment, output_directory: impl Into<PathBuf>) -> Self {
        BuildConfig {
            environment,
            output_directory: output_directory.into(),
            input: None,
        }
    }

    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BlogError::Config(format!("Config file not found: {}", path.display()))
            } else {
                BlogError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            BlogError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Resolve config: explicit file, else `blogapi.toml` in `dir` if present,
    /// else defaults; then environment variable overrides.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => {
                let default_path = dir.join(CONFIG_FILE_NAME);
                if default_path.is_file() {
                    Self::load_from_file(&default_path)?
                } else {
                    BuildConfig::default()
                }
            }
        };

        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply BLOGAPI_ENV and BLOGAPI_OUTPUT
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(env) = lookup("BLOGAPI_ENV").filter(|v| !v.is_empty()) {
            self.environment = Environment::new(env);
        }
        if let Some(output) = lookup("BLOGAPI_OUTPUT").filter(|v| !v.is_empty()) {
            self.output_directory = PathBuf::from(output);
        }
        self
    }

    /// Input path, falling back to `blog`
    pub fn input_path(&self) -> PathBuf {
        self.input.clone().unwrap_or_else(|| PathBuf::from("blog"))
    }
}
