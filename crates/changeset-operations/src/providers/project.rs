use std::fs;
use std::path::Path;

use changeset_project::{ChangesetConfig, ChangesetLayout, Project, discover_project};
use tracing::debug;

use crate::Result;
use crate::error::OperationError;
use crate::traits::ProjectProvider;

pub struct FileSystemProjectProvider;

impl FileSystemProjectProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemProjectProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectProvider for FileSystemProjectProvider {
    fn discover_project(&self, start_path: &Path) -> Result<Project> {
        Ok(discover_project(start_path)?)
    }

    fn is_initialized(&self, layout: &ChangesetLayout) -> bool {
        layout.is_initialized()
    }

    fn load_config(&self, layout: &ChangesetLayout) -> Result<ChangesetConfig> {
        Ok(ChangesetConfig::load(layout.config())?)
    }

    fn save_config(&self, layout: &ChangesetLayout, config: &ChangesetConfig) -> Result<()> {
        config.save(layout.config())?;
        debug!(path = %layout.config().display(), version = %config.version, "saved config");
        Ok(())
    }

    fn create_layout(&self, layout: &ChangesetLayout, readme: &str) -> Result<()> {
        fs::create_dir_all(layout.changes_dir()).map_err(|source| {
            OperationError::LayoutCreate {
                path: layout.changes_dir().to_path_buf(),
                source,
            }
        })?;

        for (path, content) in [(layout.readme(), readme), (layout.gitkeep(), "")] {
            fs::write(path, content).map_err(|source| OperationError::LayoutCreate {
                path: path.to_path_buf(),
                source,
            })?;
        }

        Ok(())
    }

    fn remove_layout(&self, layout: &ChangesetLayout) -> Result<()> {
        fs::remove_dir_all(layout.changesets_dir()).map_err(|source| {
            OperationError::LayoutRemove {
                path: layout.changesets_dir().to_path_buf(),
                source,
            }
        })
    }
}
