use std::io::ErrorKind;
use std::path::Path;

use crate::error::ChangelogError;

pub const CHANGELOG_TITLE: &str = "# Changelog";

const HEADING_MARKER: &str = "# ";

/// Inserts a rendered release section into a changelog document.
///
/// The newest section always goes directly below the document's level-1
/// heading, which stays the first line. Documents without a heading get the
/// section prepended; empty documents get a `# Changelog` heading.
#[must_use]
pub fn merge_section(existing: &str, section: &str) -> String {
    if existing.is_empty() {
        return format!("{CHANGELOG_TITLE}\n\n{section}");
    }

    if !existing.starts_with(HEADING_MARKER) {
        return format!("{section}\n{existing}");
    }

    match existing.find('\n') {
        Some(newline) => {
            let (heading, rest) = existing.split_at(newline + 1);
            let rest = rest.trim_start_matches('\n');
            format!("{heading}\n{section}\n{rest}")
        }
        None => format!("{existing}\n\n{section}"),
    }
}

#[derive(Debug, Clone, Default)]
pub struct Changelog {
    content: String,
}

impl Changelog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// # Errors
    ///
    /// Returns `ChangelogError::Read` if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self, ChangelogError> {
        let content = std::fs::read_to_string(path).map_err(|source| ChangelogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { content })
    }

    /// Like [`Changelog::from_file`], but a missing file yields an empty changelog.
    ///
    /// # Errors
    ///
    /// Returns `ChangelogError::Read` if the file exists but cannot be read.
    pub fn from_file_or_empty(path: &Path) -> Result<Self, ChangelogError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Self { content }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::new()),
            Err(source) => Err(ChangelogError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn add_section(&mut self, section: &str) {
        self.content = merge_section(&self.content, section);
    }

    /// # Errors
    ///
    /// Returns `ChangelogError::Write` if the file cannot be written.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ChangelogError> {
        std::fs::write(path, &self.content).map_err(|source| ChangelogError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
