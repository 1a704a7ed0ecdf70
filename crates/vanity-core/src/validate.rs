//! Phone number preconditions.
//!
//! Generation only starts once both numbers pass [`is_valid_phone_number`] and
//! the target's trailing digits offer at least one letter.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{VanityError, VanityResult};

/// Length of the trailing digit window converted to letters.
pub const WINDOW_LEN: usize = 7;

/// Optional `+`, then 10 to 15 ASCII digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("valid regex"));

/// A target number split into its untouched prefix and convertible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitNumber<'a> {
    /// Everything before the window, kept verbatim (may be empty).
    pub leading: &'a str,
    /// The last [`WINDOW_LEN`] digits.
    pub window: &'a str,
}

impl<'a> SplitNumber<'a> {
    /// Split off the trailing window.
    ///
    /// Returns `None` when the number is shorter than the window or the window
    /// contains anything other than ASCII digits.
    pub fn new(number: &'a str) -> Option<Self> {
        let cut = number.len().checked_sub(WINDOW_LEN)?;
        if !number.is_char_boundary(cut) {
            return None;
        }
        let (leading, window) = number.split_at(cut);
        window.bytes().all(|b| b.is_ascii_digit()).then_some(Self { leading, window })
    }
}

/// Whether `number` looks like a dialable phone number.
pub fn is_valid_phone_number(number: &str) -> bool {
    PHONE_PATTERN.is_match(number)
}

/// Whether every character of a non-empty window is `0` or `1`.
pub fn is_all_binary(window: &str) -> bool {
    !window.is_empty() && window.bytes().all(|b| matches!(b, b'0' | b'1'))
}

/// Validate a target number and split off its digit window.
///
/// # Errors
///
/// [`VanityError::InvalidNumber`] if the number is empty or malformed,
/// [`VanityError::BinaryIncompatible`] if its window is all zeros and ones.
pub fn check_target(target_number: &str) -> VanityResult<SplitNumber<'_>> {
    let split = is_valid_phone_number(target_number)
        .then(|| SplitNumber::new(target_number))
        .flatten()
        .ok_or_else(|| VanityError::InvalidNumber {
            number: target_number.to_string(),
        })?;

    if is_all_binary(split.window) {
        return Err(VanityError::BinaryIncompatible {
            window: split.window.to_string(),
        });
    }

    Ok(split)
}

/// Validate both numbers of a generation request and split the target.
///
/// # Errors
///
/// As [`check_target`], plus [`VanityError::InvalidNumber`] for a bad
/// caller number.
pub fn check_request<'a>(
    phone_number: &str,
    target_number: &'a str,
) -> VanityResult<SplitNumber<'a>> {
    if !is_valid_phone_number(phone_number) {
        return Err(VanityError::InvalidNumber {
            number: phone_number.to_string(),
        });
    }
    check_target(target_number)
}
