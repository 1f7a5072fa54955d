mod error;
pub mod operations;
pub mod providers;
pub mod slug;
pub mod traits;

#[cfg(test)]
pub mod mocks;

pub use error::{OperationError, Result};
