//! Core library for vanity.
//!
//! Turns the last seven digits of a phone number into letter sequences
//! spelled on a standard telephone keypad, preferring dictionary words, and
//! ranks the results by how many letters they contain.
//!
//! # Modules
//!
//! - [`keypad`] - Digit to letter mapping
//! - [`combinations`] - Exhaustive keypad expansion of a digit window
//! - [`dictionary`] - Word list loading and lookup
//! - [`matcher`] - Exact and sliding dictionary matching
//! - [`fallback`] - Random renderings when the dictionary runs dry
//! - [`rank`] - Ordering and final selection
//! - [`generate`] - The full pipeline
//! - [`record`] - Request and result records
//! - [`validate`] - Phone number preconditions
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use camino::Utf8Path;
//! use vanity_core::{Dictionary, DictionaryFormat, VanityGenerator};
//!
//! let words = Dictionary::load(Utf8Path::new("wordset.json"), DictionaryFormat::Json)
//!     .expect("Failed to load dictionary");
//! let numbers = VanityGenerator::new(&words)
//!     .generate("8002255630")
//!     .expect("Failed to generate vanity numbers");
//!
//! println!("Best: {}", numbers.first);
//! ```
#![deny(unsafe_code)]

pub mod candidates;
pub mod combinations;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod fallback;
pub mod generate;
pub mod keypad;
pub mod matcher;
pub mod rank;
pub mod record;
pub mod validate;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use dictionary::{Dictionary, DictionaryFormat};
pub use generate::VanityGenerator;
pub use record::{VanityNumbers, VanityRecord, VanityRequest};

pub use error::{
    ConfigError, ConfigResult, DictionaryError, DictionaryResult, ErrorKind, VanityError,
    VanityResult,
};
