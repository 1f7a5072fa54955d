mod config;
mod error;
mod layout;
mod manifest;
mod project;

pub use config::{ChangesetConfig, DEFAULT_VERSION};
pub use error::ProjectError;
pub use layout::{
    CHANGELOG_FILE, CHANGES_DIR, CHANGESETS_DIR, CONFIG_FILE, ChangesetLayout, GITKEEP_FILE,
    README_FILE,
};
pub use project::{MANIFEST_FILE, Project, discover_project};

pub type Result<T> = std::result::Result<T, ProjectError>;
