use std::path::{Path, PathBuf};

use crate::Result;

#[derive(Debug, Clone)]
pub struct ChangelogWriteResult {
    pub path: PathBuf,
    pub created: bool,
}

pub trait ChangelogWriter: Send + Sync {
    /// Merges `section` into the changelog at `changelog_path`, creating the
    /// file if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the changelog cannot be read or written.
    fn write_section(&self, changelog_path: &Path, section: &str) -> Result<ChangelogWriteResult>;
}
