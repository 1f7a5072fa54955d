use std::path::Path;

use changeset_project::{ChangesetConfig, ChangesetLayout, Project};

use crate::Result;

pub trait ProjectProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if no project root can be found or its manifest is
    /// unreadable.
    fn discover_project(&self, start_path: &Path) -> Result<Project>;

    fn is_initialized(&self, layout: &ChangesetLayout) -> bool;

    /// # Errors
    ///
    /// Returns an error if the config cannot be read or parsed.
    fn load_config(&self, layout: &ChangesetLayout) -> Result<ChangesetConfig>;

    /// # Errors
    ///
    /// Returns an error if the config cannot be written.
    fn save_config(&self, layout: &ChangesetLayout, config: &ChangesetConfig) -> Result<()>;

    /// Creates `.changesets/changes/` with its README and `.gitkeep`.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or file cannot be created.
    fn create_layout(&self, layout: &ChangesetLayout, readme: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the directory cannot be removed.
    fn remove_layout(&self, layout: &ChangesetLayout) -> Result<()>;
}
