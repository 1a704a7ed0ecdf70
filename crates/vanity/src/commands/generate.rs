//! Generate command: vanity numbers for a single phone number.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use vanity_core::config::Config;
use vanity_core::record::next_timestamp;
use vanity_core::{VanityGenerator, VanityRecord, VanityRequest};

use super::DictionaryArgs;

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Phone number to convert (e.g. 8002255630 or +18002255630)
    pub target: String,

    /// Caller's phone number (defaults to the target)
    #[arg(long, value_name = "NUMBER")]
    pub from: Option<String>,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Seed the random fallback for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Generate and print the five ranked vanity numbers.
#[instrument(name = "cmd_generate", skip_all, fields(target = %args.target))]
pub fn cmd_generate(args: GenerateArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(from = ?args.from, seed = ?args.seed, "executing generate command");

    let request = VanityRequest {
        phone_number: args.from.clone().unwrap_or_else(|| args.target.clone()),
        target_number: args.target.clone(),
    };
    let record = build_record(&args, config, &request);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else if let Some(ref numbers) = record.vanity_numbers {
        for (rank, number) in numbers.as_array().iter().enumerate() {
            println!("{} {}", format!("{}.", rank + 1).dimmed(), number.bold());
        }
    }

    if let Some(kind) = record.error {
        let message = record.message.as_deref().unwrap_or_else(|| kind.user_message());
        bail!("{}: {message}", kind.red());
    }
    Ok(())
}

fn build_record(args: &GenerateArgs, config: &Config, request: &VanityRequest) -> VanityRecord {
    let words = match args.dictionary.resolve(config) {
        Ok(words) => words,
        Err(err) => {
            tracing::error!(error = %err, "dictionary unavailable");
            return VanityRecord::failure(request, next_timestamp(), &err);
        }
    };

    let mut generator =
        VanityGenerator::new(words).with_max_fallback_draws(config.fallback_draws());
    if let Some(seed) = args.seed {
        generator = generator.with_seed(seed);
    }
    generator.respond(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanity_core::ErrorKind;

    fn args(target: &str) -> GenerateArgs {
        GenerateArgs {
            target: target.to_string(),
            from: None,
            dictionary: DictionaryArgs::default(),
            seed: Some(7),
        }
    }

    #[test]
    fn defaults_source_to_target() {
        let args = args("8002255630");
        let request = VanityRequest {
            phone_number: args.target.clone(),
            target_number: args.target.clone(),
        };
        let record = build_record(&args, &Config::default(), &request);
        assert!(record.is_success());
        assert_eq!(record.phone_number, "8002255630");
    }

    #[test]
    fn binary_target_fails() {
        assert!(cmd_generate(args("2120000000"), true, &Config::default()).is_err());
    }

    #[test]
    fn invalid_target_records_kind() {
        let args = args("123");
        let request = VanityRequest {
            phone_number: "8002255630".into(),
            target_number: args.target.clone(),
        };
        let record = build_record(&args, &Config::default(), &request);
        assert_eq!(record.error, Some(ErrorKind::InvalidNumber));
    }

    #[test]
    fn valid_target_succeeds() {
        assert!(cmd_generate(args("8002255630"), false, &Config::default()).is_ok());
    }
}
