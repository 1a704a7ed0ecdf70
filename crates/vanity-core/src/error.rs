//! Error types for vanity-core.

use camino::Utf8PathBuf;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading a word list.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The word list could not be read from disk.
    #[error("failed to read word list {path}")]
    Read {
        /// Path that was being read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The word list is not a JSON array of strings.
    #[error("failed to parse word list {path}")]
    Parse {
        /// Path that was being parsed.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias using [`DictionaryError`].
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// User-facing text for failures that have no dedicated explanation.
pub const GENERIC_USER_MESSAGE: &str = "An unknown error occurred. Please try later!";

/// Errors that can occur while generating vanity numbers.
#[derive(Error, Debug)]
pub enum VanityError {
    /// The source or target number is missing or malformed.
    #[error("invalid phone number: {number:?}")]
    InvalidNumber {
        /// The offending input, verbatim.
        number: String,
    },

    /// The digit window contains only zeros and ones.
    #[error("digit window {window} contains only 0s and 1s")]
    BinaryIncompatible {
        /// The trailing digits that were rejected.
        window: String,
    },

    /// The dictionary could not be loaded.
    #[error("dictionary unavailable: {0}")]
    DictionaryLoad(#[from] DictionaryError),

    /// Fewer candidates than required survived every generation stage.
    #[error("only {found} of {required} vanity candidates could be generated")]
    InsufficientCandidates {
        /// Distinct candidates produced.
        found: usize,
        /// Candidates required.
        required: usize,
    },
}

impl VanityError {
    /// Classify this error for callers and downstream records.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            Self::BinaryIncompatible { .. } => ErrorKind::BinaryIncompatible,
            Self::DictionaryLoad(_) => ErrorKind::DictionaryLoadError,
            Self::InsufficientCandidates { .. } => ErrorKind::InsufficientCandidates,
        }
    }

    /// Human-readable explanation, safe to show to the person who dialed.
    pub const fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }

    /// Whether the caller can fix this by supplying a different number.
    pub const fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumber { .. } | Self::BinaryIncompatible { .. }
        )
    }
}

/// Result type alias using [`VanityError`].
pub type VanityResult<T> = Result<T, VanityError>;

/// Wire classification of a [`VanityError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ErrorKind {
    /// Malformed or missing phone number.
    InvalidNumber,
    /// Last seven digits are all zeros and ones.
    BinaryIncompatible,
    /// Word list missing or unreadable.
    DictionaryLoadError,
    /// Generation invariant violated.
    InsufficientCandidates,
}

impl ErrorKind {
    /// Returns the classification name as it appears on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidNumber => "InvalidNumber",
            Self::BinaryIncompatible => "BinaryIncompatible",
            Self::DictionaryLoadError => "DictionaryLoadError",
            Self::InsufficientCandidates => "InsufficientCandidates",
        }
    }

    /// User-facing explanation for this classification.
    ///
    /// Internal faults share [`GENERIC_USER_MESSAGE`] so nothing about the
    /// deployment leaks to the caller.
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidNumber => {
                "Sorry, the phone number you entered is invalid. Please provide a valid phone number."
            }
            Self::BinaryIncompatible => {
                "The phone number is vanity incompatible because it only has 0s and 1s in its last 7 digits."
            }
            Self::DictionaryLoadError | Self::InsufficientCandidates => GENERIC_USER_MESSAGE,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_use_wire_names() {
        let err = VanityError::DictionaryLoad(DictionaryError::Read {
            path: Utf8PathBuf::from("words.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert_eq!(err.kind(), ErrorKind::DictionaryLoadError);
        assert_eq!(
            serde_json::to_string(&err.kind()).unwrap(),
            "\"DictionaryLoadError\""
        );
        assert_eq!(ErrorKind::InvalidNumber.to_string(), "InvalidNumber");
    }

    #[test]
    fn user_correctable_errors_have_distinct_messages() {
        let invalid = VanityError::InvalidNumber {
            number: "12".into(),
        };
        let binary = VanityError::BinaryIncompatible {
            window: "0101010".into(),
        };
        assert!(invalid.is_user_correctable());
        assert!(binary.is_user_correctable());
        assert_ne!(invalid.user_message(), binary.user_message());
        assert_ne!(invalid.user_message(), GENERIC_USER_MESSAGE);
    }

    #[test]
    fn internal_errors_hide_details() {
        let err = VanityError::InsufficientCandidates {
            found: 3,
            required: 5,
        };
        assert!(!err.is_user_correctable());
        assert_eq!(err.user_message(), GENERIC_USER_MESSAGE);
        assert!(err.to_string().contains("3 of 5"));
    }
}
