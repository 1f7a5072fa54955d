mod error;
mod repository;
mod types;

pub use error::GitError;
pub use repository::Repository;
pub use types::CommitInfo;

use std::path::Path;

pub type Result<T> = std::result::Result<T, GitError>;

/// Short SHA of the commit that first added `path`, or `None` if the file has
/// never been committed.
///
/// # Errors
///
/// Returns an error if `path` is not inside a git repository or if walking the
/// history fails.
pub fn commit_reference(path: &Path) -> Result<Option<String>> {
    let repo = Repository::open(search_start(path))?;
    Ok(repo
        .commit_adding_file(path)?
        .map(|commit| commit.short_sha))
}

/// Directory to discover the repository from. A bare file name has an empty
/// parent, which stands for the current directory.
fn search_start(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
