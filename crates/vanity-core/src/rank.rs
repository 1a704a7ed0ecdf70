//! Ranking and final selection.

use std::cmp::Reverse;

use crate::error::{VanityError, VanityResult};

/// Number of vanity numbers returned per request.
pub const RESULT_COUNT: usize = 5;

/// Count of ASCII letters in a candidate.
pub fn letter_count(candidate: &str) -> usize {
    candidate.bytes().filter(u8::is_ascii_alphabetic).count()
}

/// Order candidates by descending letter count.
///
/// The sort is stable, so candidates with equal counts keep their discovery
/// order.
pub fn rank(mut candidates: Vec<String>) -> Vec<String> {
    candidates.sort_by_key(|c| Reverse(letter_count(c)));
    candidates
}

/// Take the top [`RESULT_COUNT`] ranked candidates and prefix the leading digits.
///
/// # Errors
///
/// [`VanityError::InsufficientCandidates`] if fewer than [`RESULT_COUNT`]
/// candidates are available.
pub fn select(ranked: &[String], leading: &str) -> VanityResult<[String; RESULT_COUNT]> {
    let top = ranked
        .get(..RESULT_COUNT)
        .ok_or(VanityError::InsufficientCandidates {
            found: ranked.len(),
            required: RESULT_COUNT,
        })?;
    Ok(std::array::from_fn(|i| format!("{leading}-{}", top[i])))
}
