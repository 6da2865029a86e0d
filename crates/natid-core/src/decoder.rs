//! # Decoder — Ordered Validation Pipeline
//!
//! [`decode()`] is the single decoding path. Every other entry point
//! ([`Decoder`] methods, the free functions, `FromStr`) reads the clock
//! once and delegates here, so convenience accessors can never disagree
//! with a full parse.
//!
//! ## Pipeline
//!
//! The input is trimmed, then checked in order. The first failing check
//! determines the reason; later checks do not run.
//!
//! 1. Format: exactly 13 ASCII digits → `INVALID_FORMAT`
//! 2. Date: real calendar date, not after today → `INVALID_DATE`
//! 3. Citizenship digit: `0`, `1` or `2` → `INVALID_CITIZENSHIP_DIGIT`
//! 4. Luhn checksum over all 13 digits → `INVALID_CHECKSUM`
//!
//! Derivation of gender, citizenship and age happens only after all four
//! checks pass.

use chrono::{Datelike, NaiveDate};

use crate::checksum::luhn_valid;
use crate::error::{FailureReason, InvalidIdentity};
use crate::identity::{Citizenship, Gender, ParseOutcome, ValidIdentity};
use crate::segments::{RawSegments, MALE_SEQUENCE_THRESHOLD};
use crate::temporal::{age_on, resolve_century, Clock, SystemClock};

/// Decode `input` as of `today`.
///
/// Total: always returns an outcome, never panics.
pub fn decode(input: &str, today: NaiveDate) -> ParseOutcome {
    let id = input.trim();
    match validate(id, today) {
        Ok(valid) => ParseOutcome::Valid(valid),
        Err(reason) => ParseOutcome::Invalid(InvalidIdentity::new(id, reason)),
    }
}

fn validate(id: &str, today: NaiveDate) -> Result<ValidIdentity, FailureReason> {
    let segments = RawSegments::slice(id).ok_or(FailureReason::InvalidFormat)?;

    let date_of_birth =
        birth_date(&segments, today).ok_or(FailureReason::InvalidDate)?;

    let citizenship_digit = segments
        .citizenship_value()
        .filter(|d| *d <= 2)
        .ok_or(FailureReason::InvalidCitizenshipDigit)?;

    if !luhn_valid(id) {
        return Err(FailureReason::InvalidChecksum);
    }

    let gender = match segments.gender_sequence_value() {
        Some(seq) if seq >= MALE_SEQUENCE_THRESHOLD => Gender::Male,
        _ => Gender::Female,
    };
    let citizenship = if citizenship_digit == 0 {
        Citizenship::Citizen
    } else {
        Citizenship::PermanentResident
    };

    Ok(ValidIdentity {
        id_number: id.to_string(),
        date_of_birth,
        age: age_on(date_of_birth, today),
        gender,
        is_citizen: citizenship == Citizenship::Citizen,
        citizenship,
        segments,
    })
}

/// Resolve the YYMMDD segments to a real, non-future date.
fn birth_date(segments: &RawSegments, today: NaiveDate) -> Option<NaiveDate> {
    let yy: u32 = segments.year.parse().ok()?;
    let month: u32 = segments.month.parse().ok()?;
    let day: u32 = segments.day.parse().ok()?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let year = resolve_century(yy, today.year());
    // from_ymd_opt rejects dates that would normalize elsewhere (Feb 30).
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    (date <= today).then_some(date)
}

/// Identity-number decoder bound to a [`Clock`].
///
/// Each call reads the clock exactly once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder<C = SystemClock> {
    clock: C,
}

impl Decoder<SystemClock> {
    /// Decoder using the host's UTC date.
    pub fn system() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> Decoder<C> {
    /// Decoder using `clock` as the source of today's date.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// The clock this decoder reads.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Full decode with failure reason.
    pub fn parse(&self, input: &str) -> ParseOutcome {
        decode(input, self.clock.today())
    }

    /// `true` iff [`Decoder::parse`] is valid.
    pub fn is_valid(&self, input: &str) -> bool {
        self.parse(input).is_valid()
    }

    /// Date of birth of a valid number.
    pub fn date_of_birth(&self, input: &str) -> Option<NaiveDate> {
        self.parse(input).valid().map(|v| v.date_of_birth)
    }

    /// Gender of a valid number.
    pub fn gender(&self, input: &str) -> Option<Gender> {
        self.parse(input).valid().map(|v| v.gender)
    }

    /// Age in completed years of a valid number.
    pub fn age(&self, input: &str) -> Option<u32> {
        self.parse(input).valid().map(|v| v.age)
    }

    /// Citizenship of a valid number.
    pub fn citizenship(&self, input: &str) -> Option<Citizenship> {
        self.parse(input).valid().map(|v| v.citizenship)
    }
}

/// Decode against the system clock.
pub fn parse(input: &str) -> ParseOutcome {
    Decoder::system().parse(input)
}

/// `true` iff `input` decodes to a valid identity.
pub fn is_valid(input: &str) -> bool {
    Decoder::system().is_valid(input)
}

/// Date of birth, or `None` if `input` is invalid.
pub fn date_of_birth(input: &str) -> Option<NaiveDate> {
    Decoder::system().date_of_birth(input)
}

/// Gender, or `None` if `input` is invalid.
pub fn gender(input: &str) -> Option<Gender> {
    Decoder::system().gender(input)
}

/// Age in completed years, or `None` if `input` is invalid.
pub fn age(input: &str) -> Option<u32> {
    Decoder::system().age(input)
}

/// Citizenship, or `None` if `input` is invalid.
pub fn citizenship(input: &str) -> Option<Citizenship> {
    Decoder::system().citizenship(input)
}
