use std::path::{Path, PathBuf};

use crate::error::ProjectError;
use crate::manifest::read_manifest;

pub const MANIFEST_FILE: &str = "Cargo.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub root: PathBuf,
    /// Default package name written into new changesets.
    pub package_name: String,
}

/// Walks up from `start_dir` to the nearest directory containing a
/// `Cargo.toml`.
///
/// The package name is taken from `[package].name`; manifests without a
/// `[package]` table (virtual workspaces) are named after their directory.
///
/// # Errors
///
/// Returns `ProjectError::NotFound` when no manifest exists in `start_dir` or
/// any of its parents, and a manifest error when the nearest manifest cannot
/// be read or parsed.
pub fn discover_project(start_dir: &Path) -> Result<Project, ProjectError> {
    let start_dir = start_dir
        .canonicalize()
        .map_err(|source| ProjectError::StartDir {
            path: start_dir.to_path_buf(),
            source,
        })?;

    let root = find_project_root(&start_dir)?;
    let package_name = resolve_package_name(&root)?;

    Ok(Project { root, package_name })
}

fn find_project_root(start_dir: &Path) -> Result<PathBuf, ProjectError> {
    start_dir
        .ancestors()
        .find(|dir| dir.join(MANIFEST_FILE).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| ProjectError::NotFound {
            start_dir: start_dir.to_path_buf(),
        })
}

fn resolve_package_name(root: &Path) -> Result<String, ProjectError> {
    let manifest = read_manifest(&root.join(MANIFEST_FILE))?;

    if let Some(package) = manifest.package {
        return Ok(package.name);
    }

    root.file_name()
        .and_then(|name| name.to_str())
        .map(ToString::to_string)
        .ok_or_else(|| ProjectError::UnnamedProject {
            path: root.to_path_buf(),
        })
}
