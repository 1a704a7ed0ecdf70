//! Word list loading and lookup.
//!
//! A [`Dictionary`] is a normalized, immutable set of uppercase words. Words
//! are trimmed and upper-cased on the way in and empty entries are dropped, so
//! lookups only need to upper-case their input.
//!
//! Most callers want [`shared`], which loads the word list once per process
//! and hands every caller the same `&'static` handle afterwards.

use std::collections::HashSet;
use std::sync::OnceLock;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{DictionaryError, DictionaryResult};

/// On-disk layout of a word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DictionaryFormat {
    /// A JSON array of strings.
    #[default]
    Json,
    /// One word per line.
    Lines,
}

impl DictionaryFormat {
    /// Returns the format name as used in configuration.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Lines => "lines",
        }
    }
}

impl std::fmt::Display for DictionaryFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of valid words, normalized to uppercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
    source: Option<Utf8PathBuf>,
}

impl Dictionary {
    /// Build a dictionary from raw words, normalizing each one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            words,
            source: None,
        }
    }

    /// Parse a dictionary from a JSON array of strings.
    ///
    /// `path` is only used to label errors.
    pub fn from_json_str(json: &str, path: &Utf8Path) -> DictionaryResult<Self> {
        let raw: Vec<String> = serde_json::from_str(json).map_err(|e| DictionaryError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::from_words(raw))
    }

    /// Parse a dictionary with one word per line.
    pub fn from_lines(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Read and parse a word list from disk.
    #[tracing::instrument(skip_all, fields(path = %path, format = %format))]
    pub fn load(path: &Utf8Path, format: DictionaryFormat) -> DictionaryResult<Self> {
        let content =
            std::fs::read_to_string(path.as_std_path()).map_err(|e| DictionaryError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut dictionary = match format {
            DictionaryFormat::Json => Self::from_json_str(&content, path)?,
            DictionaryFormat::Lines => Self::from_lines(&content),
        };
        dictionary.source = Some(path.to_path_buf());

        tracing::info!(words = dictionary.len(), "dictionary loaded");
        Ok(dictionary)
    }

    /// Whether `word` is in the dictionary.
    ///
    /// Entries are stored uppercase; callers pass uppercase lookups.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The file this dictionary was loaded from, if any.
    pub fn source(&self) -> Option<&Utf8Path> {
        self.source.as_deref()
    }
}

static SHARED: OnceLock<Dictionary> = OnceLock::new();

/// Return the process-wide dictionary, loading it on first use.
///
/// The first successful load is cached for the life of the process and every
/// later call returns it without touching the filesystem, whatever `path` it
/// passes. Two callers racing on an empty cache may both read the file, but
/// only one result is stored and both receive that one. A failed load caches
/// nothing, so a later call tries again.
pub fn shared(path: &Utf8Path, format: DictionaryFormat) -> DictionaryResult<&'static Dictionary> {
    if let Some(dictionary) = SHARED.get() {
        if dictionary.source() != Some(path) {
            tracing::debug!(
                requested = %path,
                cached = ?dictionary.source(),
                "dictionary already loaded, ignoring requested path"
            );
        }
        return Ok(dictionary);
    }

    let loaded = Dictionary::load(path, format)?;
    Ok(SHARED.get_or_init(|| loaded))
}
