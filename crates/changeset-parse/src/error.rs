use changeset_core::InvalidBumpType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("missing opening delimiter '---'")]
    MissingOpeningDelimiter,

    #[error("missing closing delimiter '---' at the start of a line")]
    MissingClosingDelimiter,

    #[error("invalid front matter '{front_matter}', expected 'name: bump-type'")]
    InvalidFormat { front_matter: String },
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    FrontMatter(#[from] FrontMatterError),

    #[error(transparent)]
    InvalidBumpType(#[from] InvalidBumpType),
}
