//! Combos command: list every keypad rendering of a digit string.

use anyhow::bail;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use vanity_core::combinations::all_combinations;
use vanity_core::keypad::combination_count;

/// Longest digit string accepted; 4^10 renderings is already a lot of output.
const MAX_DIGITS: usize = 10;

/// Arguments for the `combos` subcommand.
#[derive(Args, Debug)]
pub struct CombosArgs {
    /// Digits to expand (0-9 only)
    pub digits: String,
}

#[derive(Serialize)]
struct CombosReport {
    digits: String,
    count: usize,
    combinations: Vec<String>,
}

/// Print all keypad combinations for a digit string.
#[instrument(name = "cmd_combos", skip_all, fields(digits = %args.digits))]
pub fn cmd_combos(args: CombosArgs, global_json: bool) -> anyhow::Result<()> {
    debug!("executing combos command");

    if args.digits.is_empty() || !args.digits.bytes().all(|b| b.is_ascii_digit()) {
        bail!("expected only digits 0-9, got {:?}", args.digits);
    }
    if args.digits.len() > MAX_DIGITS {
        bail!(
            "{} digits would produce {} combinations (limit: {MAX_DIGITS} digits)",
            args.digits.len(),
            combination_count(&args.digits),
        );
    }

    let combinations = all_combinations(&args.digits);

    if global_json {
        let report = CombosReport {
            count: combinations.len(),
            digits: args.digits,
            combinations,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for combo in &combinations {
            println!("{combo}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(digits: &str) -> CombosArgs {
        CombosArgs {
            digits: digits.to_string(),
        }
    }

    #[test]
    fn accepts_digits() {
        assert!(cmd_combos(args("27"), false).is_ok());
        assert!(cmd_combos(args("01"), true).is_ok());
    }

    #[test]
    fn rejects_non_digits() {
        assert!(cmd_combos(args("2a"), false).is_err());
        assert!(cmd_combos(args(""), false).is_err());
    }

    #[test]
    fn rejects_oversized_input() {
        assert!(cmd_combos(args("22222222222"), false).is_err());
    }
}
