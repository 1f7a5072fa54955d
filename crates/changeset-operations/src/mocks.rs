use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use changeset_core::{BumpType, Changeset};
use changeset_parse::{FormatError, FrontMatterError};
use changeset_project::{ChangesetConfig, ChangesetLayout, Project, ProjectError};

use crate::Result;
use crate::error::OperationError;
use crate::traits::{
    BumpSelection, ChangelogWriteResult, ChangelogWriter, ChangesetReader, ChangesetWriter,
    DescriptionInput, GitProvider, InteractionProvider, ProjectProvider,
};

#[derive(Debug, Default)]
struct ProjectState {
    initialized: bool,
    config: Option<ChangesetConfig>,
    saved_config: Option<ChangesetConfig>,
    readme: Option<String>,
    removed: bool,
}

/// Clones share state, so a test can keep a handle after moving one into an
/// operation.
#[derive(Clone)]
pub struct MockProjectProvider {
    project: Project,
    state: Arc<Mutex<ProjectState>>,
}

impl MockProjectProvider {
    #[must_use]
    pub fn new(package_name: &str) -> Self {
        Self {
            project: Project {
                root: PathBuf::from("/mock/project"),
                package_name: package_name.to_string(),
            },
            state: Arc::new(Mutex::new(ProjectState::default())),
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn initialized(self, version: &str) -> Self {
        {
            let mut state = self.state.lock().expect("lock poisoned");
            state.initialized = true;
            state.config = Some(ChangesetConfig::new(version));
        }
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn saved_config(&self) -> Option<ChangesetConfig> {
        self.state.lock().expect("lock poisoned").saved_config.clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn readme(&self) -> Option<String> {
        self.state.lock().expect("lock poisoned").readme.clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn was_removed(&self) -> bool {
        self.state.lock().expect("lock poisoned").removed
    }
}

impl ProjectProvider for MockProjectProvider {
    fn discover_project(&self, _start_path: &Path) -> Result<Project> {
        Ok(self.project.clone())
    }

    fn is_initialized(&self, _layout: &ChangesetLayout) -> bool {
        self.state.lock().expect("lock poisoned").initialized
    }

    fn load_config(&self, layout: &ChangesetLayout) -> Result<ChangesetConfig> {
        let state = self.state.lock().expect("lock poisoned");
        state.config.clone().ok_or_else(|| {
            ProjectError::ConfigRead {
                path: layout.config().to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock missing config"),
            }
            .into()
        })
    }

    fn save_config(&self, _layout: &ChangesetLayout, config: &ChangesetConfig) -> Result<()> {
        let mut state = self.state.lock().expect("lock poisoned");
        state.config = Some(config.clone());
        state.saved_config = Some(config.clone());
        Ok(())
    }

    fn create_layout(&self, _layout: &ChangesetLayout, readme: &str) -> Result<()> {
        let mut state = self.state.lock().expect("lock poisoned");
        state.initialized = true;
        state.readme = Some(readme.to_string());
        Ok(())
    }

    fn remove_layout(&self, _layout: &ChangesetLayout) -> Result<()> {
        let mut state = self.state.lock().expect("lock poisoned");
        state.initialized = false;
        state.config = None;
        state.removed = true;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct ChangesetState {
    files: Vec<PathBuf>,
    changesets: HashMap<PathBuf, Changeset>,
    written: Vec<(PathBuf, String)>,
    removed: Vec<PathBuf>,
}

/// In-memory changeset directory. Clones share state.
#[derive(Clone, Default)]
pub struct MockChangesetIO {
    state: Arc<Mutex<ChangesetState>>,
    all_names_taken: bool,
}

impl MockChangesetIO {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_changeset(self, changeset: Changeset) -> Self {
        {
            let mut state = self.state.lock().expect("lock poisoned");
            state.files.push(changeset.location.clone());
            state
                .changesets
                .insert(changeset.location.clone(), changeset);
        }
        self
    }

    /// Lists a file that fails to parse.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_broken_file(self, path: impl Into<PathBuf>) -> Self {
        self.state
            .lock()
            .expect("lock poisoned")
            .files
            .push(path.into());
        self
    }

    #[must_use]
    pub fn with_all_names_taken(mut self) -> Self {
        self.all_names_taken = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn written(&self) -> Vec<(PathBuf, String)> {
        self.state.lock().expect("lock poisoned").written.clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn removed(&self) -> Vec<PathBuf> {
        self.state.lock().expect("lock poisoned").removed.clone()
    }
}

impl ChangesetReader for MockChangesetIO {
    fn read_changeset(&self, path: &Path) -> Result<Changeset> {
        let state = self.state.lock().expect("lock poisoned");
        state
            .changesets
            .get(path)
            .cloned()
            .ok_or_else(|| OperationError::ChangesetParse {
                path: path.to_path_buf(),
                source: FormatError::FrontMatter(FrontMatterError::MissingOpeningDelimiter),
            })
    }

    fn list_changesets(&self, _changes_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = self.state.lock().expect("lock poisoned").files.clone();
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}

impl ChangesetWriter for MockChangesetIO {
    fn write_changeset(
        &self,
        changes_dir: &Path,
        filename: &str,
        content: &str,
    ) -> Result<PathBuf> {
        let path = changes_dir.join(filename);
        let mut state = self.state.lock().expect("lock poisoned");
        state.files.push(path.clone());
        state.written.push((path.clone(), content.to_string()));
        Ok(path)
    }

    fn filename_exists(&self, changes_dir: &Path, filename: &str) -> bool {
        if self.all_names_taken {
            return true;
        }
        let path = changes_dir.join(filename);
        self.state
            .lock()
            .expect("lock poisoned")
            .files
            .contains(&path)
    }

    fn remove_changesets(&self, paths: &[PathBuf]) -> Result<()> {
        let mut state = self.state.lock().expect("lock poisoned");
        let doomed: HashSet<&PathBuf> = paths.iter().collect();
        state.files.retain(|file| !doomed.contains(file));
        state.removed.extend(paths.iter().cloned());
        Ok(())
    }
}

/// Records written sections instead of touching the filesystem.
#[derive(Clone, Default)]
pub struct MockChangelogWriter {
    sections: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

impl MockChangelogWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn sections(&self) -> Vec<(PathBuf, String)> {
        self.sections.lock().expect("lock poisoned").clone()
    }
}

impl ChangelogWriter for MockChangelogWriter {
    fn write_section(&self, changelog_path: &Path, section: &str) -> Result<ChangelogWriteResult> {
        let mut sections = self.sections.lock().expect("lock poisoned");
        let created = sections.is_empty();
        sections.push((changelog_path.to_path_buf(), section.to_string()));
        Ok(ChangelogWriteResult {
            path: changelog_path.to_path_buf(),
            created,
        })
    }
}

#[derive(Default)]
pub struct MockGitProvider {
    references: HashMap<PathBuf, String>,
    fail: bool,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_reference(mut self, path: impl Into<PathBuf>, reference: &str) -> Self {
        self.references.insert(path.into(), reference.to_string());
        self
    }

    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl GitProvider for MockGitProvider {
    fn commit_reference(&self, path: &Path) -> Result<Option<String>> {
        if self.fail {
            return Err(changeset_git::GitError::NotARepository {
                path: path.to_path_buf(),
            }
            .into());
        }
        Ok(self.references.get(path).cloned())
    }
}

/// Scripted answers. Unset bump or description answers cancel; previews are
/// accepted unless configured otherwise.
#[derive(Clone)]
pub struct MockInteractionProvider {
    bump: Option<BumpType>,
    description: Option<String>,
    confirm: bool,
    recreate: bool,
    previews: Arc<Mutex<Vec<String>>>,
}

impl MockInteractionProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            bump: None,
            description: None,
            confirm: true,
            recreate: false,
            previews: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn with_bump(mut self, bump: BumpType) -> Self {
        self.bump = Some(bump);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    #[must_use]
    pub fn with_confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }

    #[must_use]
    pub fn with_recreate(mut self, recreate: bool) -> Self {
        self.recreate = recreate;
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn previews(&self) -> Vec<String> {
        self.previews.lock().expect("lock poisoned").clone()
    }
}

impl InteractionProvider for MockInteractionProvider {
    fn select_bump_type(&self, _package_name: &str) -> Result<BumpSelection> {
        Ok(self
            .bump
            .map_or(BumpSelection::Cancelled, BumpSelection::Selected))
    }

    fn get_description(&self) -> Result<DescriptionInput> {
        Ok(self
            .description
            .clone()
            .map_or(DescriptionInput::Cancelled, DescriptionInput::Provided))
    }

    fn confirm_changeset(&self, preview: &str) -> Result<bool> {
        self.previews
            .lock()
            .expect("lock poisoned")
            .push(preview.to_string());
        Ok(self.confirm)
    }

    fn confirm_recreate(&self, _changesets_dir: &Path) -> Result<bool> {
        Ok(self.recreate)
    }
}
