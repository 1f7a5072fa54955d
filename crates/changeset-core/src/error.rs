use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid bump type '{input}', expected patch, minor, or major")]
pub struct InvalidBumpType {
    pub input: String,
}
