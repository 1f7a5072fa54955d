use std::path::{Path, PathBuf};

use changeset_changelog::render_release_on;
use changeset_core::BumpType;
use changeset_project::ChangesetConfig;
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use super::initialized_project;
use super::version_planner::VersionPlanner;
use crate::Result;
use crate::error::OperationError;
use crate::traits::{ChangelogWriter, ChangesetReader, ChangesetWriter, GitProvider, ProjectProvider};

#[derive(Debug, Clone)]
pub struct ReleaseInput {
    /// Compute and render the release without writing anything.
    pub dry_run: bool,
    pub date: NaiveDate,
}

impl ReleaseInput {
    /// Release dated today in local time.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            date: Local::now().date_naive(),
        }
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }
}

impl Default for ReleaseInput {
    fn default() -> Self {
        Self::new(false)
    }
}

#[derive(Debug, Clone)]
pub struct ReleaseOutput {
    pub previous_version: String,
    pub version: String,
    pub bump: BumpType,
    /// The changelog section that was (or, on a dry run, would be) inserted.
    pub section: String,
    pub changelog_path: PathBuf,
    pub consumed_changesets: Vec<PathBuf>,
    pub dry_run: bool,
}

pub struct ReleaseOperation<P, RW, C, G> {
    project_provider: P,
    changeset_io: RW,
    changelog_writer: C,
    git_provider: G,
}

impl<P, RW, C, G> ReleaseOperation<P, RW, C, G>
where
    P: ProjectProvider,
    RW: ChangesetReader + ChangesetWriter,
    C: ChangelogWriter,
    G: GitProvider,
{
    pub fn new(project_provider: P, changeset_io: RW, changelog_writer: C, git_provider: G) -> Self {
        Self {
            project_provider,
            changeset_io,
            changelog_writer,
            git_provider,
        }
    }

    /// Writes the changelog, then the new version, then removes the consumed
    /// changeset files. Nothing is written before the new version and the
    /// changelog section have been computed.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::NoChangesets` if nothing is pending, or an
    /// error if any changeset cannot be read, the stored version is invalid,
    /// or a file cannot be written.
    pub fn execute(&self, start_path: &Path, input: &ReleaseInput) -> Result<ReleaseOutput> {
        let (_, layout) = initialized_project(&self.project_provider, start_path)?;

        let config = self.project_provider.load_config(&layout)?;
        let changesets = self.changeset_io.load_changesets(layout.changes_dir())?;
        let plan = VersionPlanner::plan(&config.version, changesets)?;

        let Some(bump) = plan.bump else {
            return Err(OperationError::NoChangesets);
        };

        let section = render_release_on(&plan.next_version, input.date, &plan.changesets, |path| {
            self.lookup_reference(path)
        });

        let consumed_changesets: Vec<PathBuf> = plan
            .changesets
            .iter()
            .map(|changeset| changeset.location.clone())
            .collect();

        let output = ReleaseOutput {
            previous_version: plan.current_version,
            version: plan.next_version,
            bump,
            section,
            changelog_path: layout.changelog().to_path_buf(),
            consumed_changesets,
            dry_run: input.dry_run,
        };

        if input.dry_run {
            debug!(version = %output.version, "dry run, nothing written");
            return Ok(output);
        }

        let written = self
            .changelog_writer
            .write_section(&output.changelog_path, &output.section)?;
        debug!(
            path = %written.path.display(),
            created = written.created,
            version = %output.version,
            "changelog updated"
        );
        self.project_provider
            .save_config(&layout, &ChangesetConfig::new(output.version.clone()))?;
        self.changeset_io
            .remove_changesets(&output.consumed_changesets)?;

        Ok(output)
    }

    fn lookup_reference(&self, path: &Path) -> Option<String> {
        match self.git_provider.commit_reference(path) {
            Ok(reference) => reference,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "commit lookup failed, omitting reference");
                None
            }
        }
    }
}
