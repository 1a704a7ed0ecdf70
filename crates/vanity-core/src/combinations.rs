//! Full-length keypad expansion.

use crate::keypad::{combination_count, letters_for};

/// Every string obtainable by replacing each digit with one of its keypad symbols.
///
/// Enumeration is position-major: the leftmost digit varies slowest, so the
/// output order is stable for a given input. All entries are distinct because
/// keypad entries never repeat a symbol. A character with no keypad entry
/// makes the product empty.
#[tracing::instrument(skip_all, fields(digits = digits))]
pub fn all_combinations(digits: &str) -> Vec<String> {
    let entries: Vec<&[char]> = digits.chars().map(letters_for).collect();
    let total = combination_count(digits);
    let mut combos = Vec::with_capacity(total);

    // Decode each index as a mixed-radix number, rightmost digit fastest.
    let mut symbols = vec!['0'; entries.len()];
    for index in 0..total {
        let mut rest = index;
        for (slot, letters) in entries.iter().enumerate().rev() {
            symbols[slot] = letters[rest % letters.len()];
            rest /= letters.len();
        }
        combos.push(symbols.iter().collect());
    }

    tracing::debug!(count = combos.len(), "generated combinations");
    combos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digit_expands_to_its_letters() {
        assert_eq!(all_combinations("7"), vec!["P", "Q", "R", "S"]);
    }

    #[test]
    fn leftmost_digit_varies_slowest() {
        let combos = all_combinations("23");
        assert_eq!(combos.len(), 9);
        assert_eq!(&combos[..3], &["AD", "AE", "AF"]);
        assert_eq!(combos[8], "CF");
    }

    #[test]
    fn zero_and_one_pass_through() {
        assert_eq!(all_combinations("10"), vec!["10"]);
        let combos = all_combinations("2220000");
        assert_eq!(combos.len(), 27);
        assert!(combos.iter().all(|c| c.ends_with("0000")));
        assert!(combos.contains(&"CAB0000".to_string()));
    }

    #[test]
    fn full_window_is_bounded() {
        let combos = all_combinations("7999999");
        assert_eq!(combos.len(), 16_384);
        assert!(combos.iter().all(|c| c.len() == 7));
    }

    #[test]
    fn entries_are_distinct() {
        let combos = all_combinations("5552368");
        let unique: std::collections::HashSet<_> = combos.iter().collect();
        assert_eq!(unique.len(), combos.len());
    }

    #[test]
    fn unknown_characters_yield_nothing() {
        assert!(all_combinations("2*3").is_empty());
    }

    #[test]
    fn empty_input_yields_the_empty_string() {
        assert_eq!(all_combinations(""), vec![String::new()]);
    }
}
