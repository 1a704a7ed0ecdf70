//! Batch command: run a JSON Lines file of requests through the generator.
//!
//! Each non-blank input line is a request object
//! (`{"phoneNumber": "...", "targetNumber": "..."}`); each output line is the
//! matching record. Requests that fail produce error records, so the output
//! has one line per request in input order.

use std::io::{BufRead, BufReader, Write};

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::{debug, instrument, warn};

use vanity_core::config::Config;
use vanity_core::record::next_timestamp;
use vanity_core::{VanityGenerator, VanityRecord, VanityRequest};

use super::DictionaryArgs;

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON Lines file of requests (`-` for stdin)
    pub file: Utf8PathBuf,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Seed the random fallback for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Counts reported once the batch finishes.
#[derive(Debug, Default, PartialEq, Eq)]
struct BatchSummary {
    succeeded: usize,
    failed: usize,
    skipped: usize,
}

/// Process every request in the input and stream records to stdout.
#[instrument(name = "cmd_batch", skip_all, fields(file = %args.file))]
pub fn cmd_batch(args: BatchArgs, quiet: bool, config: &Config) -> anyhow::Result<()> {
    debug!(seed = ?args.seed, "executing batch command");

    let lines = read_lines(&args.file)?;
    let progress = if quiet || args.no_progress {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(lines.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} requests ({eta})")
                .context("invalid progress template")?,
        );
        bar
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = run_batch(&lines, &args, config, &mut out, &progress)?;
    progress.finish_and_clear();

    if !quiet {
        eprintln!(
            "{} {} succeeded, {} failed, {} skipped",
            "Batch complete:".bold(),
            summary.succeeded.green(),
            summary.failed.red(),
            summary.skipped.yellow(),
        );
    }
    Ok(())
}

fn read_lines(path: &Utf8Path) -> anyhow::Result<Vec<String>> {
    let reader: Box<dyn BufRead> = if path.as_str() == "-" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let file = std::fs::File::open(path.as_std_path())
            .with_context(|| format!("failed to open {path}"))?;
        Box::new(BufReader::new(file))
    };

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("failed to read {path}"))?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn run_batch<W: Write>(
    lines: &[String],
    args: &BatchArgs,
    config: &Config,
    out: &mut W,
    progress: &ProgressBar,
) -> anyhow::Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    // Resolved once; every request shares the same load outcome. A failed
    // load still answers each request, then fails the command.
    let mut generator = args.dictionary.resolve(config).map(|words| {
        let generator =
            VanityGenerator::new(words).with_max_fallback_draws(config.fallback_draws());
        match args.seed {
            Some(seed) => generator.with_seed(seed),
            None => generator,
        }
    });

    for (index, line) in lines.iter().enumerate() {
        progress.inc(1);
        let request: VanityRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(err) => {
                warn!(line = index + 1, error = %err, "skipping malformed request");
                summary.skipped += 1;
                continue;
            }
        };

        let record = match generator.as_mut() {
            Ok(generator) => generator.respond(&request),
            Err(err) => VanityRecord::failure(&request, next_timestamp(), err),
        };

        if record.is_success() {
            summary.succeeded += 1;
        } else {
            summary.failed += 1;
        }
        serde_json::to_writer(&mut *out, &record).context("failed to write record")?;
        writeln!(out).context("failed to write record")?;
    }

    out.flush().context("failed to flush output")?;
    generator.context("failed to load dictionary")?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> BatchArgs {
        BatchArgs {
            file: Utf8PathBuf::from("-"),
            dictionary: DictionaryArgs::default(),
            seed: Some(3),
            no_progress: true,
        }
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn one_record_per_request() {
        let input = lines(&[
            r#"{"phoneNumber":"+15550001111","targetNumber":"8002255630"}"#,
            r#"{"phoneNumber":"+15550001111","targetNumber":"8000000000"}"#,
            "not json",
        ]);
        let mut out = Vec::new();
        let summary = run_batch(
            &input,
            &args(),
            &Config::default(),
            &mut out,
            &ProgressBar::hidden(),
        )
        .unwrap();

        assert_eq!(
            summary,
            BatchSummary {
                succeeded: 1,
                failed: 1,
                skipped: 1
            }
        );

        let records: Vec<VanityRecord> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_success());
        assert_eq!(
            records[1].error,
            Some(vanity_core::ErrorKind::BinaryIncompatible)
        );
    }

    #[test]
    fn null_number_is_an_invalid_number_record() {
        let input = lines(&[r#"{"phoneNumber":null,"targetNumber":"8002255630"}"#]);
        let mut out = Vec::new();
        let summary = run_batch(
            &input,
            &args(),
            &Config::default(),
            &mut out,
            &ProgressBar::hidden(),
        )
        .unwrap();

        assert_eq!(
            summary,
            BatchSummary {
                succeeded: 0,
                failed: 1,
                skipped: 0
            }
        );
        let record: VanityRecord =
            serde_json::from_str(String::from_utf8(out).unwrap().trim()).unwrap();
        assert_eq!(record.error, Some(vanity_core::ErrorKind::InvalidNumber));
    }

    #[test]
    fn dictionary_load_failure_fails_after_writing_records() {
        let input = lines(&[
            r#"{"phoneNumber":"+15550001111","targetNumber":"8002255630"}"#,
            r#"{"phoneNumber":"+15550001111","targetNumber":"8005550000"}"#,
        ]);
        let mut batch_args = args();
        batch_args.dictionary.dictionary =
            Some(Utf8PathBuf::from("/nonexistent/vanity/wordset.json"));
        let mut out = Vec::new();
        let err = run_batch(
            &input,
            &batch_args,
            &Config::default(),
            &mut out,
            &ProgressBar::hidden(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("failed to load dictionary"));
        let records: Vec<VanityRecord> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert!(
            records
                .iter()
                .all(|r| r.error == Some(vanity_core::ErrorKind::DictionaryLoadError))
        );
    }

    #[test]
    fn reads_file_skipping_blank_lines() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("requests.jsonl");
        std::fs::write(&path, "{}\n\n   \n{}\n").unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();
        assert_eq!(read_lines(&path).unwrap().len(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_lines(&Utf8PathBuf::from("/nonexistent/requests.jsonl")).is_err());
    }
}
