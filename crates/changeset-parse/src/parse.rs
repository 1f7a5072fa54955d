use std::path::PathBuf;

use changeset_core::{BumpType, Changeset};

use crate::error::{FormatError, FrontMatterError};

pub(crate) const FRONT_MATTER_DELIMITER: &str = "---";

// The closing delimiter must start a line, so a `---` inside body text or a
// horizontal rule further down is never taken as the end of the front matter.
const CLOSING_DELIMITER: &str = "\n---";

fn extract_front_matter(content: &str) -> Result<(&str, &str), FrontMatterError> {
    let trimmed = content.trim();

    let Some(after_opening) = trimmed.strip_prefix(FRONT_MATTER_DELIMITER) else {
        return Err(FrontMatterError::MissingOpeningDelimiter);
    };
    // The opening delimiter is a line of its own: `----` or `---name` is not one.
    let on_own_line = after_opening.is_empty()
        || after_opening.starts_with('\n')
        || after_opening.starts_with("\r\n");
    if !on_own_line {
        return Err(FrontMatterError::MissingOpeningDelimiter);
    }

    let Some(closing_pos) = after_opening.find(CLOSING_DELIMITER) else {
        return Err(FrontMatterError::MissingClosingDelimiter);
    };

    let front_matter = after_opening[..closing_pos].trim();
    let body = after_opening[closing_pos + CLOSING_DELIMITER.len()..].trim();

    Ok((front_matter, body))
}

fn parse_front_matter(front_matter: &str) -> Result<(String, BumpType), FormatError> {
    let Some((name, bump)) = front_matter.split_once(':') else {
        return Err(FrontMatterError::InvalidFormat {
            front_matter: front_matter.to_string(),
        }
        .into());
    };

    let bump: BumpType = bump.trim().parse()?;

    Ok((name.trim().to_string(), bump))
}

/// Parses the content of a changeset file.
///
/// `location` is carried through untouched into [`Changeset::location`].
///
/// # Errors
///
/// Returns [`FormatError::FrontMatter`] when either delimiter is missing or the
/// front matter is not of the form `name: bump-type`, and
/// [`FormatError::InvalidBumpType`] when the bump type is not one of `patch`,
/// `minor` or `major`.
#[must_use = "parsing result should be handled"]
pub fn parse_changeset(
    content: &str,
    location: impl Into<PathBuf>,
) -> Result<Changeset, FormatError> {
    let (front_matter, body) = extract_front_matter(content)?;
    let (package_name, bump) = parse_front_matter(front_matter)?;

    Ok(Changeset {
        location: location.into(),
        package_name,
        bump,
        summary: body.to_string(),
    })
}
