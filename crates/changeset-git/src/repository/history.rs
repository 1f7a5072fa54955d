use std::path::Path;

use git2::{ErrorCode, Oid, Sort, Tree};

use super::Repository;
use crate::{CommitInfo, Result};

impl Repository {
    /// Finds the commit that first added `path` to the history reachable from
    /// HEAD.
    ///
    /// When the file was added, removed and added again, the oldest addition
    /// wins. Returns `None` for files that were never committed and for
    /// repositories without any commits.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be walked.
    pub fn commit_adding_file(&self, path: &Path) -> Result<Option<CommitInfo>> {
        if self.is_unborn()? {
            return Ok(None);
        }

        let relative = self.to_relative_path(path);

        let mut revwalk = self.inner.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

        let mut oldest_addition = None;
        for oid in revwalk {
            let commit = self.inner.find_commit(oid?)?;
            if !tree_contains(&commit.tree()?, &relative) {
                continue;
            }

            let mut present_in_parent = false;
            for parent in commit.parents() {
                if tree_contains(&parent.tree()?, &relative) {
                    present_in_parent = true;
                    break;
                }
            }

            if !present_in_parent {
                oldest_addition = Some(commit.id());
            }
        }

        oldest_addition
            .map(|oid| self.commit_info(oid))
            .transpose()
    }

    fn is_unborn(&self) -> Result<bool> {
        match self.inner.head() {
            Ok(_) => Ok(false),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                Ok(true)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn commit_info(&self, oid: Oid) -> Result<CommitInfo> {
        let sha = oid.to_string();
        let commit = self.inner.find_commit(oid)?;
        let short_id = commit.as_object().short_id()?;
        let short_sha = short_id
            .as_str()
            .map_or_else(|| sha.chars().take(7).collect(), ToString::to_string);

        Ok(CommitInfo { sha, short_sha })
    }
}

fn tree_contains(tree: &Tree<'_>, path: &Path) -> bool {
    tree.get_path(path).is_ok()
}
