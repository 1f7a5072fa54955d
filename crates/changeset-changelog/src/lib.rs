mod changelog;
mod entry;
mod error;
mod format;

pub use changelog::{CHANGELOG_TITLE, Changelog, merge_section};
pub use entry::{ChangelogEntry, VersionRelease};
pub use error::ChangelogError;
pub use format::{
    format_entries, format_version_header, format_version_release, render_release,
    render_release_on, section_title,
};

pub type Result<T> = std::result::Result<T, ChangelogError>;
