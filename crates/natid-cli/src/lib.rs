//! # natid-cli — Identity Number Command-Line Interface
//!
//! Provides the `natid` binary. Argument parsing lives in `main.rs`;
//! subcommand handlers live here and delegate all decoding to
//! `natid-core`.
//!
//! ## Subcommands
//!
//! - `natid parse` — Decode numbers to JSON Lines or text.
//! - `natid check` — Print `VALID` or the failure code per number.
//! - `natid check-digit` — Append the Luhn check digit to a 12-digit payload.
//!
//! ```bash
//! natid parse 9001049818080
//! natid --today 2026-10-19 check --quiet < ids.txt
//! natid check-digit 900104981808
//! ```
//!
//! ## Exit Codes
//!
//! `0` every input valid, `1` at least one invalid input, `2` operational
//! error.

pub mod decode;

use std::io::BufRead;

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Exit code when every input decoded as valid.
pub const EXIT_VALID: u8 = 0;
/// Exit code when at least one input was rejected.
pub const EXIT_INVALID: u8 = 1;
/// Exit code for argument or I/O failures.
pub const EXIT_ERROR: u8 = 2;

/// Parse a `YYYY-MM-DD` reference date for `--today`.
pub fn parse_reference_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got {s:?}: {e}"))
}

/// Collect inputs from positional arguments, or from `reader` when there
/// are none. Blank lines are skipped.
pub fn collect_inputs<R: BufRead>(ids: &[String], reader: R) -> Result<Vec<String>> {
    if !ids.is_empty() {
        return Ok(ids.to_vec());
    }
    let mut inputs = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read input line {}", n + 1))?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    tracing::debug!(count = inputs.len(), "read inputs from stdin");
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_date_parses() {
        assert_eq!(
            parse_reference_date("2026-10-19"),
            Ok(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
        );
        assert!(parse_reference_date("2026-02-30").is_err());
        assert!(parse_reference_date("19/10/2026").is_err());
    }

    #[test]
    fn args_take_precedence_over_reader() {
        let ids = vec!["9001049818080".to_string()];
        let inputs = collect_inputs(&ids, "ignored\n".as_bytes()).unwrap();
        assert_eq!(inputs, ids);
    }

    #[test]
    fn reader_lines_skip_blanks() {
        let inputs = collect_inputs(&[], "9001049818080\n\n  \n 7805050050082 \n".as_bytes()).unwrap();
        assert_eq!(inputs, vec!["9001049818080", " 7805050050082 "]);
    }
}
