use std::path::{Path, PathBuf};

use changeset_project::{ChangesetConfig, ChangesetLayout};
use tracing::debug;

use crate::Result;
use crate::traits::{InteractionProvider, ProjectProvider};

pub const CHANGESETS_README: &str = "# Changesets

This directory is used by `changesets` to manage versioning and changelogs.

## How to add a changeset

Run `changesets add` to create a new changeset file describing your change.

## How to release

Run `changesets release` to bump the version, update CHANGELOG.md, and clean up changeset files.
";

#[derive(Debug, Clone, Copy, Default)]
pub struct InitInput {
    /// Recreate an existing `.changesets` directory without asking.
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Initialized {
        changesets_dir: PathBuf,
        recreated: bool,
    },
    Aborted,
}

pub struct InitOperation<P, I> {
    project_provider: P,
    interaction_provider: I,
}

impl<P, I> InitOperation<P, I>
where
    P: ProjectProvider,
    I: InteractionProvider,
{
    pub fn new(project_provider: P, interaction_provider: I) -> Self {
        Self {
            project_provider,
            interaction_provider,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the project cannot be discovered or the
    /// `.changesets` directory cannot be replaced or created.
    pub fn execute(&self, start_path: &Path, input: InitInput) -> Result<InitOutcome> {
        let project = self.project_provider.discover_project(start_path)?;
        let layout = ChangesetLayout::new(&project.root);

        let recreated = self.project_provider.is_initialized(&layout);
        if recreated {
            if !input.force
                && !self
                    .interaction_provider
                    .confirm_recreate(layout.changesets_dir())?
            {
                return Ok(InitOutcome::Aborted);
            }

            debug!(path = %layout.changesets_dir().display(), "removing existing directory");
            self.project_provider.remove_layout(&layout)?;
        }

        self.project_provider
            .create_layout(&layout, CHANGESETS_README)?;
        self.project_provider
            .save_config(&layout, &ChangesetConfig::default())?;

        Ok(InitOutcome::Initialized {
            changesets_dir: layout.changesets_dir().to_path_buf(),
            recreated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockInteractionProvider, MockProjectProvider};

    #[test]
    fn initializes_fresh_project() {
        let project_provider = MockProjectProvider::new("my-crate");
        let operation =
            InitOperation::new(project_provider.clone(), MockInteractionProvider::new());

        let outcome = operation
            .execute(Path::new("/any"), InitInput::default())
            .expect("init should succeed");

        assert_eq!(
            outcome,
            InitOutcome::Initialized {
                changesets_dir: PathBuf::from("/mock/project/.changesets"),
                recreated: false,
            }
        );
        assert_eq!(project_provider.readme().as_deref(), Some(CHANGESETS_README));
        assert_eq!(
            project_provider.saved_config(),
            Some(ChangesetConfig::new("v0.0.0"))
        );
    }

    #[test]
    fn declining_recreate_aborts_without_changes() {
        let project_provider = MockProjectProvider::new("my-crate").initialized("v1.2.0");
        let interaction = MockInteractionProvider::new().with_recreate(false);
        let operation = InitOperation::new(project_provider.clone(), interaction);

        let outcome = operation
            .execute(Path::new("/any"), InitInput::default())
            .expect("init should succeed");

        assert_eq!(outcome, InitOutcome::Aborted);
        assert!(!project_provider.was_removed());
        assert_eq!(project_provider.saved_config(), None);
    }

    #[test]
    fn confirmed_recreate_resets_version() {
        let project_provider = MockProjectProvider::new("my-crate").initialized("v1.2.0");
        let interaction = MockInteractionProvider::new().with_recreate(true);
        let operation = InitOperation::new(project_provider.clone(), interaction);

        let outcome = operation
            .execute(Path::new("/any"), InitInput::default())
            .expect("init should succeed");

        assert!(matches!(
            outcome,
            InitOutcome::Initialized {
                recreated: true,
                ..
            }
        ));
        assert!(project_provider.was_removed());
        assert_eq!(
            project_provider.saved_config(),
            Some(ChangesetConfig::default())
        );
    }

    #[test]
    fn force_skips_confirmation() {
        let project_provider = MockProjectProvider::new("my-crate").initialized("v1.2.0");
        let interaction = MockInteractionProvider::new().with_recreate(false);
        let operation = InitOperation::new(project_provider, interaction);

        let outcome = operation
            .execute(Path::new("/any"), InitInput { force: true })
            .expect("init should succeed");

        assert!(matches!(
            outcome,
            InitOutcome::Initialized {
                recreated: true,
                ..
            }
        ));
    }
}
