mod add;
mod init;
mod next;
mod release;
mod version;

use std::path::Path;

use changeset_core::BumpType;
use clap::{Args, Subcommand};

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Initialize the .changesets directory
    Init(InitArgs),
    /// Create a new changeset
    Add(AddArgs),
    /// Calculate and print the next version
    Next,
    /// Bump the version, update CHANGELOG.md, and clean up changesets
    Release(ReleaseArgs),
    /// Print version information
    Version,
}

#[derive(Args)]
pub(crate) struct InitArgs {
    /// Recreate an existing .changesets directory without asking
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub(crate) struct AddArgs {
    /// Bump type for the change
    #[arg(long, short = 'b', value_enum)]
    pub bump: Option<BumpType>,

    /// One-line summary of the change; `-` reads it from stdin
    #[arg(long, short = 'm')]
    pub message: Option<String>,

    /// Package name to record instead of the one in Cargo.toml
    #[arg(long, short = 'p')]
    pub package: Option<String>,

    /// Write the changeset without showing a preview
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args)]
pub(crate) struct ReleaseArgs {
    /// Print the changelog section and next version without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Commands {
    pub(crate) fn execute(self, start_path: &Path) -> Result<()> {
        match self {
            Self::Init(args) => init::run(args, start_path),
            Self::Add(args) => add::run(args, start_path),
            Self::Next => next::run(start_path),
            Self::Release(args) => release::run(args, start_path),
            Self::Version => {
                version::run();
                Ok(())
            }
        }
    }
}
