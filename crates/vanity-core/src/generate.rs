//! End-to-end vanity number generation.
//!
//! Stages run in a fixed order and each later stage only runs if the
//! candidate set is still short of [`RESULT_COUNT`]:
//!
//! 1. validation of the numbers
//! 2. keypad expansion of the digit window
//! 3. exact dictionary matches
//! 4. sliding (partial) dictionary matches
//! 5. random fallback renderings
//!
//! Candidates are then ranked by letter count and the best five are prefixed
//! with the target's leading digits.

use fastrand::Rng;

use crate::candidates::CandidateSet;
use crate::combinations::all_combinations;
use crate::dictionary::Dictionary;
use crate::error::VanityResult;
use crate::fallback::{DEFAULT_MAX_DRAWS, fill_randomly};
use crate::matcher::{find_exact_matches, find_sliding_matches};
use crate::rank::{RESULT_COUNT, rank, select};
use crate::record::{VanityNumbers, VanityRecord, VanityRequest, next_timestamp};
use crate::validate::{check_request, check_target};

/// Generates ranked vanity numbers against a borrowed dictionary.
///
/// The generator owns the random source used by the fallback stage. Seed it
/// with [`VanityGenerator::with_seed`] for reproducible output.
#[derive(Debug)]
pub struct VanityGenerator<'d> {
    dictionary: &'d Dictionary,
    rng: Rng,
    max_fallback_draws: usize,
}

impl<'d> VanityGenerator<'d> {
    /// Create a generator with an entropy-seeded random source.
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            rng: Rng::new(),
            max_fallback_draws: DEFAULT_MAX_DRAWS,
        }
    }

    /// Seed the fallback random source.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Rng::with_seed(seed);
        self
    }

    /// Cap the number of random fallback draws.
    pub const fn with_max_fallback_draws(mut self, max_draws: usize) -> Self {
        self.max_fallback_draws = max_draws;
        self
    }

    /// All candidates for a digit window, ranked best first.
    ///
    /// Holds at least [`RESULT_COUNT`] entries on success.
    ///
    /// # Errors
    ///
    /// [`crate::VanityError::InsufficientCandidates`] if the fallback stage
    /// cannot reach [`RESULT_COUNT`].
    #[tracing::instrument(skip(self))]
    pub fn ranked_candidates(&mut self, window: &str) -> VanityResult<Vec<String>> {
        let combinations = all_combinations(window);
        let mut candidates = CandidateSet::new();

        let exact = find_exact_matches(&combinations, self.dictionary, &mut candidates);

        let sliding = if candidates.len() < RESULT_COUNT {
            find_sliding_matches(&combinations, self.dictionary, window, &mut candidates)
        } else {
            0
        };

        let draws = if candidates.len() < RESULT_COUNT {
            fill_randomly(
                window,
                &mut candidates,
                RESULT_COUNT,
                &mut self.rng,
                self.max_fallback_draws,
            )?
        } else {
            0
        };

        tracing::debug!(exact, sliding, draws, total = candidates.len(), "candidates collected");
        Ok(rank(candidates.into_vec()))
    }

    /// Generate the five vanity numbers for a target number.
    ///
    /// # Errors
    ///
    /// [`crate::VanityError::InvalidNumber`] or
    /// [`crate::VanityError::BinaryIncompatible`] for unusable input, and
    /// [`crate::VanityError::InsufficientCandidates`] if generation falls short.
    #[tracing::instrument(skip(self))]
    pub fn generate(&mut self, target_number: &str) -> VanityResult<VanityNumbers> {
        let split = check_target(target_number)?;
        self.generate_split(split.leading, split.window)
    }

    /// Handle a full request, producing a record for the dispatch layer.
    ///
    /// The timestamp is taken once, before any work, and used for the record
    /// whether generation succeeds or fails.
    #[tracing::instrument(skip(self, request), fields(target = %request.target_number))]
    pub fn respond(&mut self, request: &VanityRequest) -> VanityRecord {
        let timestamp = next_timestamp();

        let result = check_request(&request.phone_number, &request.target_number)
            .and_then(|split| self.generate_split(split.leading, split.window));

        match result {
            Ok(numbers) => {
                tracing::info!(timestamp = %timestamp, "vanity numbers generated");
                VanityRecord::success(request, timestamp, numbers)
            }
            Err(err) => {
                tracing::warn!(error = %err, kind = %err.kind(), "vanity generation failed");
                VanityRecord::failure(request, timestamp, &err)
            }
        }
    }

    fn generate_split(&mut self, leading: &str, window: &str) -> VanityResult<VanityNumbers> {
        let ranked = self.ranked_candidates(window)?;
        Ok(select(&ranked, leading)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, VanityError};
    use crate::rank::letter_count;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words)
    }

    fn stripped<'a>(numbers: &'a VanityNumbers, leading: &str) -> Vec<&'a str> {
        numbers
            .as_array()
            .into_iter()
            .map(|n| n.strip_prefix(leading).unwrap().strip_prefix('-').unwrap())
            .collect()
    }

    #[test]
    fn empty_dictionary_still_yields_five() {
        let words = Dictionary::default();
        let mut generator = VanityGenerator::new(&words).with_seed(11);
        let numbers = generator.generate("2125552368").unwrap();

        let candidates = stripped(&numbers, "212");
        assert_eq!(candidates.len(), 5);
        assert!(candidates.iter().all(|c| c.len() == 7));
        let unique: std::collections::HashSet<_> = candidates.iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn entries_have_expected_length() {
        let words = dict(&["call", "me", "all"]);
        let mut generator = VanityGenerator::new(&words).with_seed(1);
        let numbers = generator.generate("+18002255630").unwrap();
        for n in numbers.as_array() {
            assert_eq!(n.len(), "+1800".len() + 1 + 7, "{n}");
            assert!(n.starts_with("+1800-"));
        }
    }

    #[test]
    fn ranking_is_non_increasing() {
        let words = dict(&["call", "me", "all", "ball", "cal"]);
        let mut generator = VanityGenerator::new(&words).with_seed(2);
        let numbers = generator.generate("8002255630").unwrap();
        let counts: Vec<usize> = stripped(&numbers, "800")
            .iter()
            .map(|c| letter_count(c))
            .collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]), "{counts:?}");
    }

    #[test]
    fn exact_matches_are_deterministic() {
        // Five words spell 2255663; "allonne" does not.
        let words = dict(&[
            "ballone", "callone", "callome", "ballome", "callnod", "allonne",
        ]);
        let run = |seed| {
            VanityGenerator::new(&words)
                .with_seed(seed)
                .generate("2122255663")
                .unwrap()
        };
        let first = run(1);
        assert_eq!(first, run(2));
        assert_eq!(first, run(3));
        assert_eq!(
            stripped(&first, "212"),
            vec!["BALLOME", "BALLONE", "CALLNOD", "CALLOME", "CALLONE"]
        );
    }

    #[test]
    fn best_candidate_comes_first() {
        let words = dict(&["call", "me"]);
        let mut generator = VanityGenerator::new(&words).with_seed(4);
        let numbers = generator.generate("8002255630").unwrap();
        assert_eq!(numbers.first, "800-CALLME0");
    }

    #[test]
    fn sliding_matches_outrank_fallback_on_ties() {
        let words = dict(&["cab"]);
        let mut generator = VanityGenerator::new(&words).with_seed(9);
        let numbers = generator.generate("2122220000").unwrap();
        // Every candidate for this window has three letters; discovery order wins.
        assert_eq!(numbers.first, "212-CAB0000");
    }

    #[test]
    fn binary_window_is_rejected() {
        let words = dict(&["call"]);
        let mut generator = VanityGenerator::new(&words);
        let err = generator.generate("2120101010").unwrap_err();
        assert!(matches!(err, VanityError::BinaryIncompatible { .. }));
    }

    #[test]
    fn invalid_number_is_rejected() {
        let words = dict(&["call"]);
        let mut generator = VanityGenerator::new(&words);
        for bad in ["", "123", "212-555-1234", "12345678901234567"] {
            let err = generator.generate(bad).unwrap_err();
            assert!(matches!(err, VanityError::InvalidNumber { .. }), "{bad}");
        }
    }

    #[test]
    fn tiny_search_space_reports_insufficient_candidates() {
        let words = Dictionary::default();
        let mut generator = VanityGenerator::new(&words)
            .with_seed(1)
            .with_max_fallback_draws(usize::MAX);
        let err = generator.generate("2122000000").unwrap_err();
        assert!(matches!(
            err,
            VanityError::InsufficientCandidates {
                found: 0,
                required: 5
            }
        ));
    }

    #[test]
    fn respond_builds_success_record() {
        let words = dict(&["call", "me"]);
        let mut generator = VanityGenerator::new(&words).with_seed(5);
        let request = VanityRequest {
            phone_number: "+15550001111".into(),
            target_number: "8002255630".into(),
        };
        let record = generator.respond(&request);
        assert!(record.is_success());
        assert_eq!(record.phone_number, request.phone_number);
        assert_eq!(record.target_number, request.target_number);
        assert!(!record.timestamp.is_empty());
        assert!(record.error.is_none());
    }

    #[test]
    fn respond_builds_failure_record() {
        let words = dict(&["call"]);
        let mut generator = VanityGenerator::new(&words);
        let request = VanityRequest {
            phone_number: String::new(),
            target_number: "8002255630".into(),
        };
        let record = generator.respond(&request);
        assert!(!record.is_success());
        assert_eq!(record.error, Some(ErrorKind::InvalidNumber));
        assert!(record.message.is_some());
    }
}
