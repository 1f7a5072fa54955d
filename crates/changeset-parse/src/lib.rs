mod error;
mod parse;
mod serialize;

pub use error::{FormatError, FrontMatterError};
pub use parse::parse_changeset;
pub use serialize::render_changeset;
