use std::path::Path;

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn commit_reference(&self, path: &Path) -> Result<Option<String>> {
        Ok(changeset_git::commit_reference(path)?)
    }
}
