use std::path::Path;

use changeset_changelog::Changelog;

use crate::Result;
use crate::traits::{ChangelogWriteResult, ChangelogWriter};

pub struct FileSystemChangelogWriter;

impl FileSystemChangelogWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemChangelogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogWriter for FileSystemChangelogWriter {
    fn write_section(&self, changelog_path: &Path, section: &str) -> Result<ChangelogWriteResult> {
        let created = !changelog_path.exists();

        let mut changelog = Changelog::from_file_or_empty(changelog_path)?;
        changelog.add_section(section);
        changelog.write_to_file(changelog_path)?;

        Ok(ChangelogWriteResult {
            path: changelog_path.to_path_buf(),
            created,
        })
    }
}
