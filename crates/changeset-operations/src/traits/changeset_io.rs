use std::path::{Path, PathBuf};

use changeset_core::Changeset;

use crate::Result;

pub trait ChangesetReader: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    fn read_changeset(&self, path: &Path) -> Result<Changeset>;

    /// Paths of the pending changeset files in `changes_dir`, sorted by file
    /// name.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn list_changesets(&self, changes_dir: &Path) -> Result<Vec<PathBuf>>;

    /// Reads every pending changeset. A single unreadable file fails the
    /// whole listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed or any changeset
    /// cannot be read or parsed.
    fn load_changesets(&self, changes_dir: &Path) -> Result<Vec<Changeset>> {
        self.list_changesets(changes_dir)?
            .iter()
            .map(|path| self.read_changeset(path))
            .collect()
    }
}

pub trait ChangesetWriter: Send + Sync {
    /// Writes `content` as `filename` in `changes_dir` and returns the full
    /// path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write_changeset(&self, changes_dir: &Path, filename: &str, content: &str)
    -> Result<PathBuf>;

    fn filename_exists(&self, changes_dir: &Path, filename: &str) -> bool;

    /// # Errors
    ///
    /// Returns an error if any of the files cannot be removed.
    fn remove_changesets(&self, paths: &[PathBuf]) -> Result<()>;
}
