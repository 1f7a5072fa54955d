use std::io::IsTerminal;

use tracing::debug;

pub const NO_TTY_VAR: &str = "CHANGESETS_NO_TTY";
pub const FORCE_TTY_VAR: &str = "CHANGESETS_FORCE_TTY";

const CI_ENV_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
    "TF_BUILD",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonInteractiveReason {
    ExplicitDisable,
    CiDetected { env_var: String },
    NoTerminal,
}

pub fn is_interactive() -> bool {
    match non_interactive_reason() {
        Some(reason) => {
            debug!(?reason, "prompts disabled");
            false
        }
        None => true,
    }
}

/// Why prompts are unavailable, or `None` when the user can be asked.
///
/// `CHANGESETS_NO_TTY` wins over everything, `CHANGESETS_FORCE_TTY` wins over
/// CI detection and a missing terminal.
pub fn non_interactive_reason() -> Option<NonInteractiveReason> {
    if std::env::var_os(NO_TTY_VAR).is_some() {
        return Some(NonInteractiveReason::ExplicitDisable);
    }

    if std::env::var_os(FORCE_TTY_VAR).is_some() {
        return None;
    }

    if let Some(env_var) = detect_ci_env_var() {
        return Some(NonInteractiveReason::CiDetected { env_var });
    }

    if !std::io::stdin().is_terminal() {
        return Some(NonInteractiveReason::NoTerminal);
    }

    None
}

fn detect_ci_env_var() -> Option<String> {
    CI_ENV_VARS
        .iter()
        .find(|var| std::env::var_os(var).is_some())
        .map(|var| (*var).to_string())
}
