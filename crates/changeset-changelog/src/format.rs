use std::fmt::Write;
use std::path::Path;

use chrono::{Local, NaiveDate};

use changeset_core::{BumpType, Changeset};

use crate::entry::{ChangelogEntry, VersionRelease};

const GROUP_ORDER: [BumpType; 3] = [BumpType::Major, BumpType::Minor, BumpType::Patch];

#[must_use]
pub fn section_title(bump: BumpType) -> &'static str {
    match bump {
        BumpType::Major => "Major Changes",
        BumpType::Minor => "Minor Changes",
        BumpType::Patch => "Patch Changes",
    }
}

/// Formats entries grouped by bump type, major first. Groups without entries
/// are left out.
#[must_use]
pub fn format_entries(entries: &[ChangelogEntry]) -> String {
    let mut output = String::new();

    for bump in GROUP_ORDER {
        let mut group = entries.iter().filter(|entry| entry.bump == bump).peekable();
        if group.peek().is_none() {
            continue;
        }

        let _ = write!(output, "\n### {}\n\n", section_title(bump));
        for entry in group {
            match &entry.reference {
                Some(reference) => {
                    let _ = writeln!(output, "- {reference}: {}", entry.summary);
                }
                None => {
                    let _ = writeln!(output, "- {}", entry.summary);
                }
            }
        }
    }

    output
}

#[must_use]
pub fn format_version_header(version: &str, date: NaiveDate) -> String {
    format!("## {version} - {date}")
}

#[must_use]
pub fn format_version_release(release: &VersionRelease) -> String {
    let mut output = format_version_header(&release.version, release.date);
    output.push('\n');
    output.push_str(&format_entries(&release.entries));
    output
}

/// Renders the changelog section for `version` dated `date`.
pub fn render_release_on<F>(
    version: &str,
    date: NaiveDate,
    changesets: &[Changeset],
    commit_lookup: F,
) -> String
where
    F: FnMut(&Path) -> Option<String>,
{
    let release = VersionRelease::from_changesets(version, date, changesets, commit_lookup);
    format_version_release(&release)
}

/// Renders the changelog section for `version` dated today (local time).
pub fn render_release<F>(version: &str, changesets: &[Changeset], commit_lookup: F) -> String
where
    F: FnMut(&Path) -> Option<String>,
{
    render_release_on(version, Local::now().date_naive(), changesets, commit_lookup)
}
