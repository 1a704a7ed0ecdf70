//! Command implementations.

use std::sync::LazyLock;

use camino::Utf8PathBuf;
use clap::Args;
use vanity_core::config::Config;
use vanity_core::{Dictionary, DictionaryFormat, VanityResult, dictionary};

pub mod batch;
pub mod combos;
pub mod generate;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;

static EMPTY_DICTIONARY: LazyLock<Dictionary> = LazyLock::new(Dictionary::default);

/// Word list selection shared by the generating commands.
#[derive(Args, Debug, Default, Clone)]
pub struct DictionaryArgs {
    /// Word list to match against (overrides config)
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<Utf8PathBuf>,

    /// Word list layout (overrides config)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<DictionaryFormat>,
}

impl DictionaryArgs {
    /// Resolve the dictionary from flags, falling back to config.
    ///
    /// With no word list configured anywhere, generation still works and every
    /// candidate comes from the random fallback.
    pub fn resolve(&self, config: &Config) -> VanityResult<&'static Dictionary> {
        let format = self.format.unwrap_or(config.dictionary_format);
        match self.dictionary.as_ref().or(config.dictionary.as_ref()) {
            Some(path) => Ok(dictionary::shared(path, format)?),
            None => {
                tracing::warn!("no dictionary configured, using random renderings only");
                Ok(&*EMPTY_DICTIONARY)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanity_core::VanityError;

    #[test]
    fn missing_dictionary_resolves_to_empty() {
        let dict = DictionaryArgs::default().resolve(&Config::default()).unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn unreadable_dictionary_is_a_load_error() {
        let args = DictionaryArgs {
            dictionary: Some(Utf8PathBuf::from("/nonexistent/vanity/words.json")),
            format: None,
        };
        let err = args.resolve(&Config::default()).unwrap_err();
        assert!(matches!(err, VanityError::DictionaryLoad(_)));
    }
}
