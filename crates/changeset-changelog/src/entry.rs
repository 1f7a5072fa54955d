use std::path::Path;

use chrono::NaiveDate;

use changeset_core::{BumpType, Changeset};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub bump: BumpType,
    pub summary: String,
    /// Short commit reference shown in front of the summary.
    pub reference: Option<String>,
}

impl ChangelogEntry {
    #[must_use]
    pub fn new(bump: BumpType, summary: impl Into<String>) -> Self {
        Self {
            bump,
            summary: summary.into(),
            reference: None,
        }
    }

    /// Empty references are treated as absent.
    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        let reference = reference.into();
        self.reference = (!reference.is_empty()).then_some(reference);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRelease {
    pub version: String,
    pub date: NaiveDate,
    pub entries: Vec<ChangelogEntry>,
}

impl VersionRelease {
    #[must_use]
    pub fn new(version: impl Into<String>, date: NaiveDate, entries: Vec<ChangelogEntry>) -> Self {
        Self {
            version: version.into(),
            date,
            entries,
        }
    }

    /// Builds one entry per changeset, asking `commit_lookup` for each
    /// changeset's reference.
    pub fn from_changesets<F>(
        version: impl Into<String>,
        date: NaiveDate,
        changesets: &[Changeset],
        mut commit_lookup: F,
    ) -> Self
    where
        F: FnMut(&Path) -> Option<String>,
    {
        let entries = changesets
            .iter()
            .map(|changeset| {
                let entry = ChangelogEntry::new(changeset.bump, changeset.summary.clone());
                match commit_lookup(&changeset.location) {
                    Some(reference) => entry.with_reference(reference),
                    None => entry,
                }
            })
            .collect();

        Self::new(version, date, entries)
    }
}
