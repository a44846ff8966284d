//! Loader configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default location of the projects document, relative to the site base path.
pub const DEFAULT_RESOURCE_PATH: &str = "/projects.yaml";

/// How a missing projects file is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotFoundPolicy {
    /// Report it like every other failure (500).
    #[default]
    Envelop,
    /// Report it as a 404.
    Propagate,
}

/// Configuration for the projects loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsConfig {
    /// Path of the YAML document, resolved against the site base path.
    pub resource_path: String,
    /// How a non-success fetch status is surfaced.
    pub not_found: NotFoundPolicy,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            not_found: NotFoundPolicy::default(),
        }
    }
}

impl ProjectsConfig {
    /// Parse from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse projects config")
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }

    /// Set the resource path.
    pub fn with_resource_path(mut self, path: impl Into<String>) -> Self {
        self.resource_path = path.into();
        self
    }

    /// Set the not-found policy.
    pub fn with_not_found(mut self, policy: NotFoundPolicy) -> Self {
        self.not_found = policy;
        self
    }
}
