use petname::{Generator, Petnames};
use rand::RngCore;

use crate::Result;
use crate::error::OperationError;

pub const MAX_SLUG_ATTEMPTS: usize = 100;
const SLUG_WORDS: u8 = 3;
const SLUG_SEPARATOR: &str = "-";

/// Three random words joined by hyphens, e.g. `gladly-brave-otter`.
pub fn generate_slug(rng: &mut dyn RngCore) -> Option<String> {
    Petnames::default().generate(rng, SLUG_WORDS, SLUG_SEPARATOR)
}

#[must_use]
pub fn slug_to_filename(slug: &str) -> String {
    format!("{slug}.md")
}

/// Picks a changeset file name for which `is_taken` returns false, trying at
/// most [`MAX_SLUG_ATTEMPTS`] slugs.
///
/// # Errors
///
/// Returns `OperationError::SlugExhausted` if every attempt collided.
pub fn unique_filename<F>(rng: &mut dyn RngCore, mut is_taken: F) -> Result<String>
where
    F: FnMut(&str) -> bool,
{
    for _ in 0..MAX_SLUG_ATTEMPTS {
        let Some(slug) = generate_slug(rng) else {
            continue;
        };

        let filename = slug_to_filename(&slug);
        if !is_taken(&filename) {
            return Ok(filename);
        }
    }

    Err(OperationError::SlugExhausted {
        attempts: MAX_SLUG_ATTEMPTS,
    })
}
