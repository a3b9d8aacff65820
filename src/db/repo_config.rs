//! Repository configuration loaded from a TOML file.
//!
//! Example `repository.toml`:
//!
//! ```toml
//! [repository]
//! type = "local"
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use super::factory::RepositoryType;
use super::repository::{RepositoryError, RepositoryResult};

/// Top-level configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySection,
}

/// The `[repository]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositorySection {
    /// Backend selector ("local").
    #[serde(rename = "type")]
    pub kind: String,
}

impl RepositoryConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&raw)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(raw: &str) -> RepositoryResult<Self> {
        toml::from_str(raw)
            .map_err(|e| RepositoryError::configuration(format!("Invalid config file: {}", e)))
    }

    /// Resolve the configured backend type.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.kind)
    }
}
