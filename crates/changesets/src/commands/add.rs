use std::io::Read as _;
use std::path::Path;

use changeset_operations::operations::{AddInput, AddOperation, AddResult};
use changeset_operations::providers::{FileSystemChangesetIO, FileSystemProjectProvider};
use changeset_operations::traits::InteractionProvider;
use changeset_project::{CHANGES_DIR, CHANGESETS_DIR};

use super::AddArgs;
use crate::environment::is_interactive;
use crate::error::{CliError, Result};
use crate::interaction::{NonInteractiveProvider, TerminalInteractionProvider};

pub(super) fn run(args: AddArgs, start_path: &Path) -> Result<()> {
    let input = build_input(args)?;

    let result = if is_interactive() {
        execute(TerminalInteractionProvider, start_path, input)?
    } else {
        execute(NonInteractiveProvider, start_path, input)?
    };

    match result {
        AddResult::Created {
            changeset,
            file_path,
        } => {
            let filename = file_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            println!("Created changeset: {CHANGESETS_DIR}/{CHANGES_DIR}/{filename}");
            println!("{}: {}", changeset.package_name, changeset.bump);
            println!("{}", changeset.summary);
        }
        AddResult::Cancelled => println!("Aborted."),
    }

    Ok(())
}

fn execute<I: InteractionProvider>(
    interaction_provider: I,
    start_path: &Path,
    input: AddInput,
) -> Result<AddResult> {
    let operation = AddOperation::new(
        FileSystemProjectProvider::new(),
        FileSystemChangesetIO::new(),
        interaction_provider,
    );
    let mut rng = rand::thread_rng();
    Ok(operation.execute(start_path, input, &mut rng)?)
}

fn build_input(args: AddArgs) -> Result<AddInput> {
    let description = match args.message {
        Some(message) if message == "-" => Some(read_description_from_stdin()?),
        other => other,
    };

    Ok(AddInput {
        bump: args.bump,
        description,
        package: args.package,
        skip_confirmation: args.yes,
    })
}

fn read_description_from_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(CliError::Stdin)?;
    Ok(buffer)
}
