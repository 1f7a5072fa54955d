use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("invalid version '{version}', expected major.minor.patch with optional 'v' prefix")]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },
}
