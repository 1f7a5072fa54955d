use std::path::{Path, PathBuf};

use changeset_core::{BumpType, Changeset};
use changeset_parse::render_changeset;
use rand::RngCore;

use super::initialized_project;
use crate::Result;
use crate::error::OperationError;
use crate::slug::unique_filename;
use crate::traits::{
    BumpSelection, ChangesetWriter, DescriptionInput, InteractionProvider, ProjectProvider,
};

#[derive(Debug, Clone, Default)]
pub struct AddInput {
    pub bump: Option<BumpType>,
    pub description: Option<String>,
    /// Overrides the package name taken from the project manifest.
    pub package: Option<String>,
    pub skip_confirmation: bool,
}

#[derive(Debug)]
pub enum AddResult {
    Created {
        changeset: Changeset,
        file_path: PathBuf,
    },
    Cancelled,
}

pub struct AddOperation<P, W, I> {
    project_provider: P,
    changeset_writer: W,
    interaction_provider: I,
}

impl<P, W, I> AddOperation<P, W, I>
where
    P: ProjectProvider,
    W: ChangesetWriter,
    I: InteractionProvider,
{
    pub fn new(project_provider: P, changeset_writer: W, interaction_provider: I) -> Self {
        Self {
            project_provider,
            changeset_writer,
            interaction_provider,
        }
    }

    /// Creates a changeset file with a random three-word name drawn from
    /// `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the project is not initialized, the package name
    /// is invalid, the description is empty, no free file name is found, or
    /// the file cannot be written.
    pub fn execute(
        &self,
        start_path: &Path,
        input: AddInput,
        rng: &mut dyn RngCore,
    ) -> Result<AddResult> {
        let (project, layout) = initialized_project(&self.project_provider, start_path)?;
        let package_name = input.package.unwrap_or(project.package_name);
        validate_package_name(&package_name)?;

        let bump = match input.bump {
            Some(bump) => bump,
            None => match self.interaction_provider.select_bump_type(&package_name)? {
                BumpSelection::Selected(bump) => bump,
                BumpSelection::Cancelled => return Ok(AddResult::Cancelled),
            },
        };

        let description = match input.description {
            Some(description) => description,
            None => match self.interaction_provider.get_description()? {
                DescriptionInput::Provided(description) => description,
                DescriptionInput::Cancelled => return Ok(AddResult::Cancelled),
            },
        };

        let description = description.trim();
        if description.is_empty() {
            return Err(OperationError::EmptyDescription);
        }

        let content = render_changeset(&package_name, bump, description);

        if !input.skip_confirmation && !self.interaction_provider.confirm_changeset(&content)? {
            return Ok(AddResult::Cancelled);
        }

        let changes_dir = layout.changes_dir();
        let filename = unique_filename(rng, |name| {
            self.changeset_writer.filename_exists(changes_dir, name)
        })?;
        let file_path = self
            .changeset_writer
            .write_changeset(changes_dir, &filename, &content)?;

        let changeset = Changeset::new(file_path.clone(), package_name, bump, description);

        Ok(AddResult::Created {
            changeset,
            file_path,
        })
    }
}

/// The name becomes the front-matter key, so it must survive a round trip
/// through the `name: bump` line.
fn validate_package_name(name: &str) -> Result<()> {
    if name.trim().is_empty() || name.contains([':', '\n', '\r']) {
        return Err(OperationError::InvalidPackageName {
            name: name.to_string(),
        });
    }
    Ok(())
}
