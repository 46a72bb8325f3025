//! Session configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default bound on hierarchy recursion
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings for a [`Session`](crate::Session)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Deepest hierarchy recursion allowed before giving up
    pub max_depth: usize,
    /// Whether boundaries and hierarchies are cached
    pub memoize: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            memoize: true,
        }
    }
}

impl SessionConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Parse from a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::Config("max_depth must be at least 1".into()));
        }
        Ok(())
    }
}
