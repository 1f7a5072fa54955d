mod add;
mod init;
mod next;
mod release;
mod version_planner;

use std::path::Path;

use changeset_project::{ChangesetLayout, Project, ProjectError};

pub use add::{AddInput, AddOperation, AddResult};
pub use init::{CHANGESETS_README, InitInput, InitOperation, InitOutcome};
pub use next::NextOperation;
pub use release::{ReleaseInput, ReleaseOperation, ReleaseOutput};
pub use version_planner::{ReleasePlan, VersionPlanner};

use crate::Result;
use crate::traits::ProjectProvider;

/// Discovers the project and fails unless `.changesets` exists.
fn initialized_project<P: ProjectProvider>(
    project_provider: &P,
    start_path: &Path,
) -> Result<(Project, ChangesetLayout)> {
    let project = project_provider.discover_project(start_path)?;
    let layout = ChangesetLayout::new(&project.root);

    if !project_provider.is_initialized(&layout) {
        return Err(ProjectError::NotInitialized {
            path: layout.changesets_dir().to_path_buf(),
        }
        .into());
    }

    Ok((project, layout))
}
