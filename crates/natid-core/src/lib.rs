//! # natid-core — 13-Digit National Identity Number Decoder
//!
//! Parses, validates and decodes identity numbers of the form
//! `YYMMDD SSSS C A Z` into a date of birth, age, gender and citizenship,
//! or reports the first rule the number violates.
//!
//! ## Key Design Principles
//!
//! 1. **One decoding path.** [`decode()`] is the only function that applies
//!    the rules. `is_valid`, `gender`, `age` and the other accessors all
//!    delegate to it, so they can never disagree with a full parse.
//!
//! 2. **Failures are values.** Decoding is total. A malformed number yields
//!    [`ParseOutcome::Invalid`] with one of four [`FailureReason`]s; nothing
//!    panics and nothing returns `Err` unless the caller asks for a
//!    `Result` via [`ParseOutcome::into_result()`].
//!
//! 3. **Injected clock.** "Today" is read through the [`Clock`] trait.
//!    [`SystemClock`] uses the UTC date; [`FixedClock`] pins it for tests.
//!
//! 4. **Isolated century policy.** Two-digit years are resolved by
//!    [`resolve_century()`] alone.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No I/O and no shared state.

pub mod checksum;
pub mod decoder;
pub mod error;
pub mod identity;
pub mod segments;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use checksum::{check_digit, luhn_valid};
pub use decoder::{age, citizenship, date_of_birth, decode, gender, is_valid, parse, Decoder};
pub use error::{FailureReason, InvalidIdentity};
pub use identity::{Citizenship, Gender, ParseOutcome, ValidIdentity};
pub use segments::{RawSegments, ID_LENGTH};
pub use temporal::{age_on, resolve_century, Clock, FixedClock, SystemClock};
