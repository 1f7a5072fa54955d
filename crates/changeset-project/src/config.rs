use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ProjectError;

pub const DEFAULT_VERSION: &str = "v0.0.0";

/// Contents of `.changesets/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangesetConfig {
    pub version: String,
}

impl Default for ChangesetConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl ChangesetConfig {
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// # Errors
    ///
    /// Returns `ProjectError::ConfigRead` if the file cannot be read and
    /// `ProjectError::ConfigParse` if it is not valid config JSON.
    pub fn load(path: &Path) -> Result<Self, ProjectError> {
        let content = std::fs::read_to_string(path).map_err(|source| ProjectError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ProjectError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes the config pretty-printed with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::ConfigWrite` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ProjectError> {
        let mut content =
            serde_json::to_string_pretty(self).map_err(ProjectError::ConfigSerialize)?;
        content.push('\n');

        std::fs::write(path, content).map_err(|source| ProjectError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}
