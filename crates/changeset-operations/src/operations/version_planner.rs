use changeset_core::{BumpType, Changeset};
use changeset_version::compute_next_version;
use tracing::debug;

use crate::Result;

/// Result of combining the stored version with the pending changesets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub current_version: String,
    pub next_version: String,
    /// Highest pending bump, `None` when nothing is pending.
    pub bump: Option<BumpType>,
    pub changesets: Vec<Changeset>,
}

impl ReleasePlan {
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.changesets.is_empty()
    }

    /// Number of pending changesets per bump type, major first.
    #[must_use]
    pub fn counts_by_bump(&self) -> Vec<(BumpType, usize)> {
        [BumpType::Major, BumpType::Minor, BumpType::Patch]
            .into_iter()
            .map(|bump| {
                let count = self.changesets.iter().filter(|c| c.bump == bump).count();
                (bump, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

pub struct VersionPlanner;

impl VersionPlanner {
    /// # Errors
    ///
    /// Returns an error if `current_version` is not a valid semantic version.
    pub fn plan(current_version: &str, changesets: Vec<Changeset>) -> Result<ReleasePlan> {
        let next = compute_next_version(current_version, &changesets)?;

        debug!(
            current = current_version,
            next = %next.version,
            pending = changesets.len(),
            "planned release"
        );

        Ok(ReleasePlan {
            current_version: current_version.to_string(),
            next_version: next.version,
            bump: next.applied_bump,
            changesets,
        })
    }
}
