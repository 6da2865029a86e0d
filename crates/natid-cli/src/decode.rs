//! # Decode Subcommands
//!
//! Handlers for `natid parse`, `natid check` and `natid check-digit`.
//! Every handler writes results to the supplied writer and returns the
//! process exit code; diagnostics go through `tracing` on stderr.

use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};

use natid_core::{check_digit, Clock, Decoder, ParseOutcome, ID_LENGTH};

use crate::{EXIT_INVALID, EXIT_VALID};

/// Output encoding for `natid parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable single line per number.
    Text,
}

/// Arguments for the `natid parse` subcommand.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Identity numbers to decode. Reads stdin lines when omitted.
    #[arg(value_name = "ID")]
    pub ids: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Arguments for the `natid check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Identity numbers to check. Reads stdin lines when omitted.
    #[arg(value_name = "ID")]
    pub ids: Vec<String>,

    /// Print nothing; report only through the exit code.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `natid check-digit` subcommand.
#[derive(Args, Debug)]
pub struct CheckDigitArgs {
    /// The first 12 digits of an identity number.
    #[arg(value_name = "PAYLOAD")]
    pub payload: String,
}

/// Execute `natid parse` over `inputs`.
pub fn run_parse<C: Clock>(
    args: &ParseArgs,
    inputs: &[String],
    decoder: &Decoder<C>,
    out: &mut impl Write,
) -> Result<u8> {
    let mut invalid = 0usize;
    for input in inputs {
        let outcome = decoder.parse(input);
        log_outcome(&outcome);
        if !outcome.is_valid() {
            invalid += 1;
        }
        match args.format {
            OutputFormat::Json => {
                let line = serde_json::to_string(&outcome).context("failed to encode outcome")?;
                writeln!(out, "{line}")?;
            }
            OutputFormat::Text => writeln!(out, "{}", render_text(&outcome))?,
        }
    }
    Ok(summarize(inputs.len(), invalid))
}

/// Execute `natid check` over `inputs`.
pub fn run_check<C: Clock>(
    args: &CheckArgs,
    inputs: &[String],
    decoder: &Decoder<C>,
    out: &mut impl Write,
) -> Result<u8> {
    let mut invalid = 0usize;
    for input in inputs {
        let outcome = decoder.parse(input);
        log_outcome(&outcome);
        let status = match outcome.reason() {
            None => "VALID",
            Some(reason) => {
                invalid += 1;
                reason.code()
            }
        };
        if !args.quiet {
            writeln!(out, "{}\t{status}", outcome.id_number())?;
        }
    }
    Ok(summarize(inputs.len(), invalid))
}

/// Execute `natid check-digit`.
pub fn run_check_digit(args: &CheckDigitArgs, out: &mut impl Write) -> Result<u8> {
    let payload = args.payload.trim();
    if payload.len() != ID_LENGTH - 1 || !payload.bytes().all(|b| b.is_ascii_digit()) {
        bail!(
            "payload must be exactly {} ASCII digits, got {payload:?}",
            ID_LENGTH - 1
        );
    }
    let digit = check_digit(payload).context("payload contains a non-digit")?;
    writeln!(out, "{payload}{digit}")?;
    Ok(EXIT_VALID)
}

fn render_text(outcome: &ParseOutcome) -> String {
    match outcome {
        ParseOutcome::Valid(v) => format!(
            "{}  valid  born={} age={} gender={} citizenship={}",
            v.formatted(),
            v.date_of_birth,
            v.age,
            v.gender,
            v.citizenship
        ),
        ParseOutcome::Invalid(i) => format!("{}  invalid  {}", i.id_number, i.reason.code()),
    }
}

fn log_outcome(outcome: &ParseOutcome) {
    match outcome {
        ParseOutcome::Valid(v) => {
            tracing::debug!(id = %v.id_number, born = %v.date_of_birth, "decoded identity number")
        }
        ParseOutcome::Invalid(i) => {
            tracing::debug!(id = %i.id_number, reason = i.reason.code(), "rejected identity number")
        }
    }
}

fn summarize(total: usize, invalid: usize) -> u8 {
    tracing::info!(total, invalid, "decode complete");
    if invalid == 0 {
        EXIT_VALID
    } else {
        EXIT_INVALID
    }
}
