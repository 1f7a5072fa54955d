mod changelog_writer;
mod changeset_io;
mod git_provider;
mod interaction;
mod project_provider;

pub use changelog_writer::{ChangelogWriteResult, ChangelogWriter};
pub use changeset_io::{ChangesetReader, ChangesetWriter};
pub use git_provider::GitProvider;
pub use interaction::{BumpSelection, DescriptionInput, InteractionProvider};
pub use project_provider::ProjectProvider;
