//! Telephone keypad mapping.
//!
//! The standard dial assignment of letters to digits 2-9. Digits `0` and `1`
//! carry no letters and map to themselves so they pass through generation
//! unchanged.

/// Letters for each digit, indexed by digit value.
static KEYPAD: [&[char]; 10] = [
    &['0'],
    &['1'],
    &['A', 'B', 'C'],
    &['D', 'E', 'F'],
    &['G', 'H', 'I'],
    &['J', 'K', 'L'],
    &['M', 'N', 'O'],
    &['P', 'Q', 'R', 'S'],
    &['T', 'U', 'V'],
    &['W', 'X', 'Y', 'Z'],
];

/// Return the ordered symbols a digit can be dialed as.
///
/// Total over `'0'..='9'`. Any other character has no keypad entry and yields
/// an empty slice, which downstream stages treat as "no substitution possible".
pub fn letters_for(digit: char) -> &'static [char] {
    match digit.to_digit(10) {
        Some(d) => KEYPAD[d as usize],
        None => &[],
    }
}

/// Number of symbols a digit string can expand to (product of entry sizes).
pub fn combination_count(digits: &str) -> usize {
    digits.chars().map(|d| letters_for(d).len()).product()
}
