use changeset_core::BumpType;

use crate::parse::FRONT_MATTER_DELIMITER;

/// Renders the file content for a changeset.
///
/// The output is the exact inverse of [`parse_changeset`](crate::parse_changeset)
/// for summaries without leading or trailing whitespace.
#[must_use]
pub fn render_changeset(package_name: &str, bump: BumpType, summary: &str) -> String {
    let mut output = String::with_capacity(
        package_name.len() + summary.len() + 2 * FRONT_MATTER_DELIMITER.len() + 16,
    );

    output.push_str(FRONT_MATTER_DELIMITER);
    output.push('\n');
    output.push_str(package_name);
    output.push_str(": ");
    output.push_str(bump.as_str());
    output.push('\n');
    output.push_str(FRONT_MATTER_DELIMITER);
    output.push_str("\n\n");
    output.push_str(summary);
    output.push('\n');

    output
}
