use std::path::{Path, PathBuf};

pub const CHANGESETS_DIR: &str = ".changesets";
pub const CONFIG_FILE: &str = "config.json";
pub const CHANGES_DIR: &str = "changes";
pub const README_FILE: &str = "README.md";
pub const GITKEEP_FILE: &str = ".gitkeep";
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Resolved paths of the `.changesets` directory structure under a project
/// root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangesetLayout {
    root: PathBuf,
    changesets_dir: PathBuf,
    config: PathBuf,
    changes_dir: PathBuf,
    readme: PathBuf,
    gitkeep: PathBuf,
    changelog: PathBuf,
}

impl ChangesetLayout {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let changesets_dir = root.join(CHANGESETS_DIR);
        let changes_dir = changesets_dir.join(CHANGES_DIR);

        Self {
            config: changesets_dir.join(CONFIG_FILE),
            readme: changesets_dir.join(README_FILE),
            gitkeep: changes_dir.join(GITKEEP_FILE),
            changelog: root.join(CHANGELOG_FILE),
            changesets_dir,
            changes_dir,
            root,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn changesets_dir(&self) -> &Path {
        &self.changesets_dir
    }

    #[must_use]
    pub fn config(&self) -> &Path {
        &self.config
    }

    #[must_use]
    pub fn changes_dir(&self) -> &Path {
        &self.changes_dir
    }

    #[must_use]
    pub fn readme(&self) -> &Path {
        &self.readme
    }

    #[must_use]
    pub fn gitkeep(&self) -> &Path {
        &self.gitkeep
    }

    #[must_use]
    pub fn changelog(&self) -> &Path {
        &self.changelog
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.changesets_dir.is_dir()
    }
}
