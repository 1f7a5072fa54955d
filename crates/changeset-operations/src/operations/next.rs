use std::path::Path;

use super::initialized_project;
use super::version_planner::{ReleasePlan, VersionPlanner};
use crate::Result;
use crate::traits::{ChangesetReader, ProjectProvider};

/// Computes the version the next release would produce without writing
/// anything.
pub struct NextOperation<P, R> {
    project_provider: P,
    changeset_reader: R,
}

impl<P, R> NextOperation<P, R>
where
    P: ProjectProvider,
    R: ChangesetReader,
{
    pub fn new(project_provider: P, changeset_reader: R) -> Self {
        Self {
            project_provider,
            changeset_reader,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the project is not initialized, the config or any
    /// changeset cannot be read, or the stored version is invalid.
    pub fn execute(&self, start_path: &Path) -> Result<ReleasePlan> {
        let (_, layout) = initialized_project(&self.project_provider, start_path)?;

        let config = self.project_provider.load_config(&layout)?;
        let changesets = self.changeset_reader.load_changesets(layout.changes_dir())?;

        VersionPlanner::plan(&config.version, changesets)
    }
}
