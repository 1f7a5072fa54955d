use std::path::Path;

use changeset_operations::operations::NextOperation;
use changeset_operations::providers::{FileSystemChangesetIO, FileSystemProjectProvider};

use crate::error::Result;

pub(super) fn run(start_path: &Path) -> Result<()> {
    let operation = NextOperation::new(FileSystemProjectProvider::new(), FileSystemChangesetIO::new());
    let plan = operation.execute(start_path)?;

    if plan.has_changes() {
        let counts: Vec<String> = plan
            .counts_by_bump()
            .into_iter()
            .map(|(bump, count)| format!("{count} {bump}"))
            .collect();
        eprintln!(
            "{} -> {} ({})",
            plan.current_version,
            plan.next_version,
            counts.join(", ")
        );
    } else {
        eprintln!("no changesets found");
    }

    println!("{}", plan.next_version);
    Ok(())
}
