use std::path::Path;

use changeset_operations::operations::{InitInput, InitOperation, InitOutcome};
use changeset_operations::providers::FileSystemProjectProvider;
use changeset_operations::traits::InteractionProvider;

use super::InitArgs;
use crate::environment::is_interactive;
use crate::error::Result;
use crate::interaction::{NonInteractiveProvider, TerminalInteractionProvider};

pub(super) fn run(args: InitArgs, start_path: &Path) -> Result<()> {
    let input = InitInput { force: args.force };

    let interactive = is_interactive();
    let outcome = if interactive {
        execute(TerminalInteractionProvider, start_path, input)?
    } else {
        execute(NonInteractiveProvider, start_path, input)?
    };

    match outcome {
        InitOutcome::Initialized { .. } => println!("Initialized .changesets directory."),
        InitOutcome::Aborted => {
            println!("Aborted.");
            if !interactive {
                eprintln!(".changesets already exists; pass --force to recreate it");
            }
        }
    }

    Ok(())
}

fn execute<I: InteractionProvider>(
    interaction_provider: I,
    start_path: &Path,
    input: InitInput,
) -> Result<InitOutcome> {
    let operation = InitOperation::new(FileSystemProjectProvider::new(), interaction_provider);
    Ok(operation.execute(start_path, input)?)
}
