use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::InvalidBumpType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

impl BumpType {
    pub const ALL: [Self; 3] = [Self::Patch, Self::Minor, Self::Major];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpType {
    type Err = InvalidBumpType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patch" => Ok(Self::Patch),
            "minor" => Ok(Self::Minor),
            "major" => Ok(Self::Major),
            _ => Err(InvalidBumpType {
                input: s.to_string(),
            }),
        }
    }
}

/// A single pending change, as read from one changeset file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changeset {
    /// File the changeset was read from. Only used to look up commit references.
    pub location: PathBuf,
    pub package_name: String,
    pub bump: BumpType,
    pub summary: String,
}

impl Changeset {
    #[must_use]
    pub fn new(
        location: impl Into<PathBuf>,
        package_name: impl Into<String>,
        bump: BumpType,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            package_name: package_name.into(),
            bump,
            summary: summary.into(),
        }
    }
}
