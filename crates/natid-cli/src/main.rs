//! # natid CLI entry point
//!
//! Parses command-line arguments, configures tracing, pins the reference
//! date and dispatches to subcommand handlers.

use std::io;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use natid_cli::decode::{
    run_check, run_check_digit, run_parse, CheckArgs, CheckDigitArgs, ParseArgs,
};
use natid_cli::{collect_inputs, parse_reference_date, EXIT_ERROR};
use natid_core::{Clock, Decoder, FixedClock, SystemClock};

/// natid — 13-digit national identity number decoder.
///
/// Validates identity numbers and decodes date of birth, age, gender and
/// citizenship. Rejections name the first failed rule.
#[derive(Parser, Debug)]
#[command(name = "natid", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Reference date (YYYY-MM-DD) used instead of today's UTC date.
    #[arg(long, global = true, value_parser = parse_reference_date)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode identity numbers to JSON Lines or text.
    Parse(ParseArgs),

    /// Report VALID or the failure code for each identity number.
    Check(CheckArgs),

    /// Append the Luhn check digit to a 12-digit payload.
    CheckDigit(CheckDigitArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    // Read the clock once so every input in a batch shares one reference date.
    let today = cli.today.unwrap_or_else(|| SystemClock.today());
    tracing::debug!(%today, pinned = cli.today.is_some(), "natid CLI starting");
    let decoder = Decoder::new(FixedClock::new(today));

    match run(cli.command, &decoder) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(command: Commands, decoder: &Decoder<FixedClock>) -> anyhow::Result<u8> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Commands::Parse(args) => {
            let inputs = collect_inputs(&args.ids, io::stdin().lock())?;
            run_parse(&args, &inputs, decoder, &mut out)
        }
        Commands::Check(args) => {
            let inputs = collect_inputs(&args.ids, io::stdin().lock())?;
            run_check(&args, &inputs, decoder, &mut out)
        }
        Commands::CheckDigit(args) => run_check_digit(&args, &mut out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use natid_cli::decode::OutputFormat;

    #[test]
    fn cli_parse_defaults_to_json() {
        let cli = Cli::try_parse_from(["natid", "parse", "9001049818080"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.today.is_none());
        if let Commands::Parse(args) = cli.command {
            assert_eq!(args.ids, vec!["9001049818080"]);
            assert_eq!(args.format, OutputFormat::Json);
        } else {
            panic!("expected parse subcommand");
        }
    }

    #[test]
    fn cli_parse_text_format() {
        let cli = Cli::try_parse_from(["natid", "parse", "--format", "text", "a", "b"]).unwrap();
        if let Commands::Parse(args) = cli.command {
            assert_eq!(args.format, OutputFormat::Text);
            assert_eq!(args.ids.len(), 2);
        } else {
            panic!("expected parse subcommand");
        }
    }

    #[test]
    fn cli_global_today_and_verbose() {
        let cli =
            Cli::try_parse_from(["natid", "check", "-q", "--today", "2026-10-19", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2026, 10, 19));
        if let Commands::Check(args) = cli.command {
            assert!(args.quiet);
            assert!(args.ids.is_empty());
        } else {
            panic!("expected check subcommand");
        }
    }

    #[test]
    fn cli_rejects_bad_today() {
        assert!(Cli::try_parse_from(["natid", "--today", "2026-13-01", "check"]).is_err());
    }

    #[test]
    fn cli_check_digit_subcommand() {
        let cli = Cli::try_parse_from(["natid", "check-digit", "900104981808"]).unwrap();
        assert!(matches!(cli.command, Commands::CheckDigit(ref a) if a.payload == "900104981808"));
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["natid"]).is_err());
    }
}
