mod error;
mod prefixed;

use changeset_core::{BumpType, Changeset};
use semver::{BuildMetadata, Prerelease, Version};

pub use error::VersionError;
pub use prefixed::{PrefixedVersion, VERSION_PREFIX};

pub type Result<T> = std::result::Result<T, VersionError>;

/// Applies a bump to a version, dropping any pre-release and build metadata.
///
/// A patch bump of a pre-release finalises it (`1.0.1-rc.1` becomes `1.0.1`).
#[must_use]
pub fn bump_version(version: &Version, bump_type: BumpType) -> Version {
    let mut new_version = version.clone();

    match bump_type {
        BumpType::Major => {
            new_version.major += 1;
            new_version.minor = 0;
            new_version.patch = 0;
        }
        BumpType::Minor => {
            new_version.minor += 1;
            new_version.patch = 0;
        }
        BumpType::Patch => {
            if version.pre.is_empty() {
                new_version.patch += 1;
            }
        }
    }

    new_version.pre = Prerelease::EMPTY;
    new_version.build = BuildMetadata::EMPTY;
    new_version
}

/// Highest bump across the changesets, `patch` when there are none.
#[must_use]
pub fn highest_bump(changesets: &[Changeset]) -> BumpType {
    changesets
        .iter()
        .map(|changeset| changeset.bump)
        .max()
        .unwrap_or(BumpType::Patch)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextVersion {
    pub version: String,
    /// The bump that was applied, `None` when nothing was pending.
    pub applied_bump: Option<BumpType>,
}

impl NextVersion {
    #[must_use]
    pub fn highest_bump(&self) -> BumpType {
        self.applied_bump.unwrap_or(BumpType::Patch)
    }
}

/// Computes the version that releasing `pending` on top of `current` produces.
///
/// `current` may carry a leading `v`; the result keeps the same convention.
/// With nothing pending the current version is returned unchanged.
///
/// # Errors
///
/// Returns [`VersionError::InvalidVersion`] if `current` is not a valid
/// semantic version, whether or not anything is pending.
pub fn compute_next_version(current: &str, pending: &[Changeset]) -> Result<NextVersion> {
    let parsed: PrefixedVersion = current.parse()?;

    if pending.is_empty() {
        return Ok(NextVersion {
            version: current.to_string(),
            applied_bump: None,
        });
    }

    let bump = highest_bump(pending);
    let next = parsed.with_version(bump_version(&parsed.version, bump));

    Ok(NextVersion {
        version: next.to_string(),
        applied_bump: Some(bump),
    })
}
