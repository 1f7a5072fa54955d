use std::path::Path;

use crate::Result;

pub trait GitProvider: Send + Sync {
    /// Short SHA of the commit that added `path`, `None` when the file was
    /// never committed.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or its history
    /// cannot be walked.
    fn commit_reference(&self, path: &Path) -> Result<Option<String>>;
}
