//! Dictionary matching over keypad combinations.
//!
//! Two passes feed the candidate set:
//!
//! 1. **Exact**: a combination that is itself a dictionary word.
//! 2. **Sliding**: a dictionary word occupying part of a combination. Span
//!    sizes run from one less than the window length down to
//!    [`MIN_SPAN`]. The text before and after the span is kept when it is a
//!    word in its own right and replaced by the original digits otherwise.
//!    Each combination containing `0` or `1` is tried a second time with those
//!    digits read as `O` and `I`.
//!
//! Passes only ever add candidates.

use crate::candidates::CandidateSet;
use crate::dictionary::Dictionary;

/// Shortest span the sliding pass will treat as a word.
pub const MIN_SPAN: usize = 2;

/// Add every combination that is a dictionary word.
///
/// Returns the number of new candidates.
#[tracing::instrument(skip_all, fields(combinations = combinations.len()))]
pub fn find_exact_matches(
    combinations: &[String],
    dictionary: &Dictionary,
    candidates: &mut CandidateSet,
) -> usize {
    let before = candidates.len();
    // Keypad combinations are uppercase by construction.
    candidates.extend(
        combinations
            .iter()
            .filter(|combo| dictionary.contains(combo))
            .cloned(),
    );
    let added = candidates.len() - before;
    tracing::debug!(added, "exact pass complete");
    added
}

/// Add candidates built around dictionary words found inside combinations.
///
/// `digits` is the window the combinations were generated from; it supplies
/// the filler for prefix and suffix segments that are not words.
///
/// Returns the number of new candidates.
#[tracing::instrument(skip_all, fields(digits = digits, combinations = combinations.len()))]
pub fn find_sliding_matches(
    combinations: &[String],
    dictionary: &Dictionary,
    digits: &str,
    candidates: &mut CandidateSet,
) -> usize {
    let before = candidates.len();
    let len = digits.len();

    for size in (MIN_SPAN..len).rev() {
        let size_before = candidates.len();
        for combo in combinations {
            let homoglyphs = has_homoglyph_digits(combo).then(|| read_homoglyphs(combo));
            for start in 0..=len - size {
                if let Some(candidate) = build_candidate(combo, start, size, digits, dictionary) {
                    candidates.insert(candidate);
                }
                if let Some(ref text) = homoglyphs
                    && let Some(candidate) = build_candidate(text, start, size, digits, dictionary)
                {
                    candidates.insert(candidate);
                }
            }
        }
        tracing::trace!(size, added = candidates.len() - size_before, "sliding span done");
    }

    let added = candidates.len() - before;
    tracing::debug!(added, "sliding pass complete");
    added
}

/// Whether a combination still carries a `0` or `1`.
fn has_homoglyph_digits(combo: &str) -> bool {
    combo.bytes().any(|b| matches!(b, b'0' | b'1'))
}

/// Read `0` as `O` and `1` as `I`.
pub fn read_homoglyphs(combo: &str) -> String {
    combo
        .chars()
        .map(|c| match c {
            '0' => 'O',
            '1' => 'I',
            other => other,
        })
        .collect()
}

/// Build a candidate around `text[start..start + size]` if that span is a word.
///
/// `text` and `digits` have the same length and are ASCII.
fn build_candidate(
    text: &str,
    start: usize,
    size: usize,
    digits: &str,
    dictionary: &Dictionary,
) -> Option<String> {
    let end = start + size;
    let word = &text[start..end];
    if !dictionary.contains(word) {
        return None;
    }

    let mut candidate = String::with_capacity(text.len());
    candidate.push_str(word_or_digits(&text[..start], &digits[..start], dictionary));
    candidate.push_str(word);
    candidate.push_str(word_or_digits(&text[end..], &digits[end..], dictionary));
    Some(candidate)
}

fn word_or_digits<'a>(segment: &'a str, digits: &'a str, dictionary: &Dictionary) -> &'a str {
    if dictionary.contains(segment) {
        segment
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinations::all_combinations;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words)
    }

    fn run_sliding(words: &[&str], digits: &str) -> Vec<String> {
        let mut candidates = CandidateSet::new();
        find_sliding_matches(
            &all_combinations(digits),
            &dict(words),
            digits,
            &mut candidates,
        );
        candidates.into_vec()
    }

    #[test]
    fn exact_pass_finds_whole_words() {
        let digits = "2255463";
        let mut candidates = CandidateSet::new();
        let added = find_exact_matches(
            &all_combinations(digits),
            &dict(&["call", "callme", "balloon"]),
            &mut candidates,
        );
        assert_eq!(added, 0);

        let added = find_exact_matches(
            &all_combinations("2255663"),
            &dict(&["callone", "ballone"]),
            &mut candidates,
        );
        assert_eq!(added, 2);
        // Position-major enumeration puts B before C.
        assert_eq!(candidates.into_vec(), vec!["BALLONE", "CALLONE"]);
    }

    #[test]
    fn sliding_pass_keeps_digits_around_a_word() {
        let found = run_sliding(&["cab"], "2220000");
        assert_eq!(found, vec!["CAB0000"]);
    }

    #[test]
    fn sliding_pass_uses_word_segments() {
        let found = run_sliding(&["call", "me"], "2255630");
        assert!(found.contains(&"CALLME0".to_string()), "{found:?}");
        assert!(found.contains(&"CALL630".to_string()), "{found:?}");
        assert!(found.iter().all(|c| c.len() == 7));
    }

    #[test]
    fn non_word_segments_fall_back_to_digits() {
        let found = run_sliding(&["me"], "2255630");
        assert_eq!(found, vec!["2255ME0"]);
    }

    #[test]
    fn larger_spans_are_discovered_first() {
        let found = run_sliding(&["ball", "all"], "2255000");
        let ball = found.iter().position(|c| c == "BALL000").unwrap();
        let all = found.iter().position(|c| c == "2ALL000").unwrap();
        assert!(ball < all);
    }

    #[test]
    fn single_letters_are_never_spans() {
        let found = run_sliding(&["a", "b", "c"], "2000000");
        assert!(found.is_empty());
    }

    #[test]
    fn homoglyphs_form_words() {
        let found = run_sliding(&["boo"], "2000000");
        assert_eq!(found, vec!["BOO0000"]);
    }

    #[test]
    fn homoglyph_segments_resolve_symmetrically() {
        let found = run_sliding(&["boo", "gooo"], "2004660");
        assert!(found.contains(&"BOOGOOO".to_string()), "{found:?}");
        // A combination never mixes the literal prefix with a read-as-letter span.
        assert!(!found.iter().any(|c| c.starts_with("B00G")));
    }

    #[test]
    fn homoglyph_reading() {
        assert_eq!(read_homoglyphs("A01B"), "AOIB");
        assert!(has_homoglyph_digits("CAB0000"));
        assert!(!has_homoglyph_digits("CABBAGE"));
    }

    #[test]
    fn candidates_only_grow() {
        let mut candidates = CandidateSet::new();
        candidates.insert("EXISTING".into());
        find_sliding_matches(
            &all_combinations("2220000"),
            &dict(&["cab"]),
            "2220000",
            &mut candidates,
        );
        assert_eq!(candidates.into_vec(), vec!["EXISTING", "CAB0000"]);
    }
}
