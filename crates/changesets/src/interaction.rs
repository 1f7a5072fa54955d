use std::path::Path;

use changeset_core::BumpType;
use changeset_operations::traits::{BumpSelection, DescriptionInput, InteractionProvider};
use changeset_operations::{OperationError, Result};
use dialoguer::{Confirm, Input, Select};

const BUMP_CHOICES: [(BumpType, &str); 3] = [
    (BumpType::Patch, "patch - Bug fixes (backwards compatible)"),
    (BumpType::Minor, "minor - New features (backwards compatible)"),
    (BumpType::Major, "major - Breaking changes"),
];

fn prompt_error(e: dialoguer::Error) -> OperationError {
    match e {
        dialoguer::Error::IO(io_err) => OperationError::Prompt(io_err),
    }
}

/// Prompts on the terminal through `dialoguer`. Pressing Esc on a prompt
/// cancels the command.
pub struct TerminalInteractionProvider;

impl InteractionProvider for TerminalInteractionProvider {
    fn select_bump_type(&self, package_name: &str) -> Result<BumpSelection> {
        let items: Vec<&str> = BUMP_CHOICES.iter().map(|(_, label)| *label).collect();

        let selection = Select::new()
            .with_prompt(format!("What kind of change is this for '{package_name}'?"))
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;

        Ok(match selection.and_then(|index| BUMP_CHOICES.get(index)) {
            Some((bump, _)) => BumpSelection::Selected(*bump),
            None => BumpSelection::Cancelled,
        })
    }

    fn get_description(&self) -> Result<DescriptionInput> {
        let summary: String = Input::new()
            .with_prompt("Summary")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;

        Ok(DescriptionInput::Provided(summary))
    }

    fn confirm_changeset(&self, preview: &str) -> Result<bool> {
        eprintln!();
        eprintln!("--- Preview ---");
        eprintln!();
        eprint!("{preview}");
        eprintln!();
        eprintln!("--- End Preview ---");
        eprintln!();

        confirm("Create this changeset?", true)
    }

    fn confirm_recreate(&self, changesets_dir: &Path) -> Result<bool> {
        confirm(
            &format!("{} already exists. Recreate?", changesets_dir.display()),
            false,
        )
    }
}

fn confirm(prompt: &str, default: bool) -> Result<bool> {
    let answer = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact_opt()
        .map_err(prompt_error)?;

    Ok(answer.unwrap_or(false))
}

/// Used when no terminal is available: missing input is an error, the
/// changeset preview is accepted, and re-initialisation requires `--force`.
pub struct NonInteractiveProvider;

impl InteractionProvider for NonInteractiveProvider {
    fn select_bump_type(&self, package_name: &str) -> Result<BumpSelection> {
        Err(OperationError::MissingBumpType {
            package_name: package_name.to_string(),
        })
    }

    fn get_description(&self) -> Result<DescriptionInput> {
        Err(OperationError::MissingDescription)
    }

    fn confirm_changeset(&self, _preview: &str) -> Result<bool> {
        Ok(true)
    }

    fn confirm_recreate(&self, _changesets_dir: &Path) -> Result<bool> {
        Ok(false)
    }
}
