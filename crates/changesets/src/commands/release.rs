use std::path::Path;

use changeset_operations::operations::{ReleaseInput, ReleaseOperation, ReleaseOutput};
use changeset_operations::providers::{
    FileSystemChangelogWriter, FileSystemChangesetIO, FileSystemProjectProvider, Git2Provider,
};

use super::ReleaseArgs;
use crate::error::Result;

pub(super) fn run(args: ReleaseArgs, start_path: &Path) -> Result<()> {
    let operation = ReleaseOperation::new(
        FileSystemProjectProvider::new(),
        FileSystemChangesetIO::new(),
        FileSystemChangelogWriter::new(),
        Git2Provider::new(),
    );
    let output = operation.execute(start_path, &ReleaseInput::new(args.dry_run))?;

    if output.dry_run {
        print_dry_run(&output);
    }

    println!("{}", output.version);
    Ok(())
}

fn print_dry_run(output: &ReleaseOutput) {
    eprintln!(
        "Dry run: {} -> {} ({} bump, {} changesets), nothing written.",
        output.previous_version,
        output.version,
        output.bump,
        output.consumed_changesets.len()
    );
    eprintln!();
    eprint!("{}", output.section);
}
