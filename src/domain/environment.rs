//! Build environment

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const PRODUCTION: &str = "production";

/// The build mode string, e.g. "production" or "development".
///
/// Only the exact value "production" hides drafts; every other value is
/// treated as a development build.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment(String);

impl Environment {
    pub fn new(name: impl Into<String>) -> Self {
        Environment(name.into())
    }

    pub fn production() -> Self {
        Environment::new(PRODUCTION)
    }

    pub fn development() -> Self {
        Environment::new("development")
    }

    pub fn is_production(&self) -> bool {
        self.0 == PRODUCTION
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::development()
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Environment::new(s))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
