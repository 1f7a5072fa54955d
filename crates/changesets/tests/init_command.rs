use std::fs;

use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn changesets() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("changesets");
    cmd.env("CHANGESETS_NO_TTY", "1");
    cmd
}

fn setup_single_package() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    fs::create_dir_all(dir.path().join("src")).expect("create src dir");
    fs::write(
        dir.path().join("Cargo.toml"),
        r#"[package]
name = "test-crate"
version = "1.0.0"
edition = "2021"
"#,
    )
    .expect("write Cargo.toml");
    fs::write(dir.path().join("src/lib.rs"), "").expect("write lib.rs");
    dir
}

#[test]
fn creates_layout() {
    let dir = setup_single_package();

    changesets()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(contains("Initialized .changesets directory."));

    let changesets_dir = dir.path().join(".changesets");
    assert!(changesets_dir.join("changes").is_dir());
    assert!(changesets_dir.join("changes/.gitkeep").is_file());
    assert!(changesets_dir.join("README.md").is_file());
    assert_eq!(
        fs::read_to_string(changesets_dir.join("config.json")).expect("read config"),
        "{\n  \"version\": \"v0.0.0\"\n}\n"
    );
}

#[test]
fn readme_explains_commands() {
    let dir = setup_single_package();

    changesets().arg("init").current_dir(dir.path()).assert().success();

    let readme =
        fs::read_to_string(dir.path().join(".changesets/README.md")).expect("read README");
    assert!(readme.contains("changesets add"));
    assert!(readme.contains("changesets release"));
}

#[test]
fn works_from_subdirectory() {
    let dir = setup_single_package();

    changesets()
        .arg("init")
        .current_dir(dir.path().join("src"))
        .assert()
        .success();

    assert!(dir.path().join(".changesets").is_dir());
    assert!(!dir.path().join("src/.changesets").exists());
}

#[test]
fn path_option_selects_project() {
    let dir = setup_single_package();
    let elsewhere = TempDir::new().expect("create temp dir");

    changesets()
        .arg("-C")
        .arg(dir.path())
        .arg("init")
        .current_dir(elsewhere.path())
        .assert()
        .success();

    assert!(dir.path().join(".changesets").is_dir());
}

#[test]
fn existing_directory_is_kept_without_force() {
    let dir = setup_single_package();
    changesets().arg("init").current_dir(dir.path()).assert().success();
    let marker = dir.path().join(".changesets/changes/keep-me.md");
    fs::write(&marker, "---\ntest-crate: patch\n---\n\nKeep\n").expect("write changeset");

    changesets()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(contains("Aborted."))
        .stderr(contains("--force"));

    assert!(marker.exists(), "existing changeset should survive");
}

#[test]
fn force_recreates_directory() {
    let dir = setup_single_package();
    changesets().arg("init").current_dir(dir.path()).assert().success();
    let marker = dir.path().join(".changesets/changes/drop-me.md");
    fs::write(&marker, "---\ntest-crate: patch\n---\n\nDrop\n").expect("write changeset");
    fs::write(
        dir.path().join(".changesets/config.json"),
        "{\n  \"version\": \"v3.1.4\"\n}\n",
    )
    .expect("write config");

    changesets()
        .args(["init", "--force"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(contains("Initialized"));

    assert!(!marker.exists(), "old changesets should be removed");
    let config =
        fs::read_to_string(dir.path().join(".changesets/config.json")).expect("read config");
    assert!(config.contains("v0.0.0"));
}

#[test]
fn fails_outside_cargo_project() {
    let dir = TempDir::new().expect("create temp dir");

    changesets()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(contains("error:"))
        .stderr(contains("Cargo.toml"));

    assert!(!dir.path().join(".changesets").exists());
}

#[test]
fn unknown_command_fails() {
    let dir = setup_single_package();

    changesets()
        .arg("publish")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(contains("publish").and(contains("Usage")));
}
