use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Git(#[from] changeset_git::GitError),

    #[error(transparent)]
    Project(#[from] changeset_project::ProjectError),

    #[error(transparent)]
    Changelog(#[from] changeset_changelog::ChangelogError),

    #[error("version calculation failed")]
    VersionCalculation(#[from] changeset_version::VersionError),

    #[error("failed to read changeset file '{path}'")]
    ChangesetFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse changeset file '{path}'")]
    ChangesetParse {
        path: PathBuf,
        #[source]
        source: changeset_parse::FormatError,
    },

    #[error("failed to write changeset file '{path}'")]
    ChangesetFileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list changeset files in '{path}'")]
    ChangesetList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove changeset file '{path}'")]
    ChangesetRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create '{path}'")]
    LayoutCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove existing '{path}'")]
    LayoutRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing bump type for package '{package_name}'")]
    MissingBumpType { package_name: String },

    #[error("missing description")]
    MissingDescription,

    #[error("invalid package name '{name}': must be non-empty and contain no ':' or newline")]
    InvalidPackageName { name: String },

    #[error("description cannot be empty")]
    EmptyDescription,

    #[error("could not find a free changeset file name after {attempts} attempts")]
    SlugExhausted { attempts: usize },

    #[error("no changesets found, nothing to release")]
    NoChangesets,

    #[error("terminal prompt failed")]
    Prompt(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OperationError>;
