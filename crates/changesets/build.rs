use std::process::Command;

use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");

    let version = env!("CARGO_PKG_VERSION");
    let version_string = match git_short_hash() {
        Some(hash) if !is_release_commit(version) => {
            let build_date = Utc::now().format("%Y%m%d");
            format!("{version}+{hash}.{build_date}")
        }
        _ => version.to_owned(),
    };

    println!("cargo:rustc-env=CHANGESETS_VERSION={version_string}");
}

fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}

fn git_short_hash() -> Option<String> {
    git_output(&["rev-parse", "--short", "HEAD"]).map(|hash| hash.trim().to_owned())
}

/// A commit is a release when it carries `changesets@v<version>` or `v<version>`.
fn is_release_commit(version: &str) -> bool {
    let expected = [format!("changesets@v{version}"), format!("v{version}")];

    git_output(&["tag", "--points-at", "HEAD"]).is_some_and(|tags| {
        tags.lines()
            .any(|tag| expected.iter().any(|candidate| candidate == tag.trim()))
    })
}
