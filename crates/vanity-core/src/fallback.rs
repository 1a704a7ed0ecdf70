//! Random keypad renderings used to top up a short candidate set.
//!
//! These are not dictionary-backed. They only exist so a caller always gets a
//! full result set, and they are the one nondeterministic stage of generation.

use fastrand::Rng;

use crate::candidates::CandidateSet;
use crate::error::{VanityError, VanityResult};
use crate::keypad::letters_for;

/// Default cap on random draws before giving up.
pub const DEFAULT_MAX_DRAWS: usize = 10_000;

/// Draw random renderings of `digits` until `candidates` holds `target` entries.
///
/// Each draw picks one keypad symbol per digit uniformly at random. Draws
/// that repeat a known candidate are absorbed by the set. Returns the number
/// of draws made.
///
/// # Errors
///
/// [`VanityError::InsufficientCandidates`] if `max_draws` draws are not
/// enough, or at once if the window has too few renderings to reach
/// `target` (including a digit with no keypad symbols at all).
#[tracing::instrument(skip(candidates, rng), fields(have = candidates.len()))]
pub fn fill_randomly(
    digits: &str,
    candidates: &mut CandidateSet,
    target: usize,
    rng: &mut Rng,
    max_draws: usize,
) -> VanityResult<usize> {
    let entries: Vec<&[char]> = digits.chars().map(letters_for).collect();
    let insufficient = |found| VanityError::InsufficientCandidates {
        found,
        required: target,
    };

    if candidates.len() < target {
        let renderings = entries
            .iter()
            .fold(1_usize, |acc, letters| acc.saturating_mul(letters.len()));
        if candidates.len().saturating_add(renderings) < target {
            tracing::warn!(renderings, "window cannot yield enough renderings");
            return Err(insufficient(candidates.len()));
        }
    }

    let mut draws = 0;
    while candidates.len() < target {
        if draws == max_draws {
            tracing::warn!(draws, "fallback draw cap reached");
            return Err(insufficient(candidates.len()));
        }
        draws += 1;

        let rendering: String = entries
            .iter()
            .map(|letters| letters[rng.usize(..letters.len())])
            .collect();
        candidates.insert(rendering);
    }

    tracing::debug!(draws, "fallback complete");
    Ok(draws)
}
