use std::fs;
use std::path::{Path, PathBuf};

use changeset_core::Changeset;
use changeset_parse::parse_changeset;
use tracing::debug;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{ChangesetReader, ChangesetWriter};

const CHANGESET_EXTENSION: &str = "md";

/// Reads and writes changeset files under `.changesets/changes`.
pub struct FileSystemChangesetIO;

impl FileSystemChangesetIO {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemChangesetIO {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangesetReader for FileSystemChangesetIO {
    fn read_changeset(&self, path: &Path) -> Result<Changeset> {
        let content =
            fs::read_to_string(path).map_err(|source| OperationError::ChangesetFileRead {
                path: path.to_path_buf(),
                source,
            })?;

        parse_changeset(&content, path).map_err(|source| OperationError::ChangesetParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn list_changesets(&self, changes_dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(changes_dir).map_err(|source| OperationError::ChangesetList {
            path: changes_dir.to_path_buf(),
            source,
        })?;

        let mut changesets = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|source| OperationError::ChangesetList {
                path: changes_dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();

            if path.is_dir() || !is_changeset_file(&path) {
                continue;
            }

            changesets.push(path);
        }

        changesets.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        debug!(dir = %changes_dir.display(), count = changesets.len(), "listed changesets");

        Ok(changesets)
    }
}

impl ChangesetWriter for FileSystemChangesetIO {
    fn write_changeset(
        &self,
        changes_dir: &Path,
        filename: &str,
        content: &str,
    ) -> Result<PathBuf> {
        let file_path = changes_dir.join(filename);

        fs::write(&file_path, content).map_err(|source| OperationError::ChangesetFileWrite {
            path: file_path.clone(),
            source,
        })?;

        debug!(path = %file_path.display(), "wrote changeset");
        Ok(file_path)
    }

    fn filename_exists(&self, changes_dir: &Path, filename: &str) -> bool {
        changes_dir.join(filename).exists()
    }

    fn remove_changesets(&self, paths: &[PathBuf]) -> Result<()> {
        for path in paths.iter().filter(|path| is_changeset_file(path)) {
            fs::remove_file(path).map_err(|source| OperationError::ChangesetRemove {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "removed changeset");
        }

        Ok(())
    }
}

fn is_changeset_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == CHANGESET_EXTENSION)
}
