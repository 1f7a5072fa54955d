use std::fmt;
use std::str::FromStr;

use semver::Version;

use crate::error::VersionError;

pub const VERSION_PREFIX: char = 'v';

/// A semantic version together with whether it was written with a leading `v`.
///
/// The prefix only affects how the version is written back out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixedVersion {
    pub version: Version,
    pub prefixed: bool,
}

impl PrefixedVersion {
    #[must_use]
    pub fn new(version: Version, prefixed: bool) -> Self {
        Self { version, prefixed }
    }

    #[must_use]
    pub fn with_version(&self, version: Version) -> Self {
        Self {
            version,
            prefixed: self.prefixed,
        }
    }
}

impl FromStr for PrefixedVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (raw, prefixed) = match s.strip_prefix(VERSION_PREFIX) {
            Some(rest) => (rest, true),
            None => (s, false),
        };

        let version = Version::parse(raw).map_err(|source| VersionError::InvalidVersion {
            version: s.to_string(),
            source,
        })?;

        Ok(Self { version, prefixed })
    }
}

impl fmt::Display for PrefixedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefixed {
            write!(f, "{VERSION_PREFIX}{}", self.version)
        } else {
            write!(f, "{}", self.version)
        }
    }
}
