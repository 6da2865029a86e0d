//! # Temporal Policy — Clock, Century Resolution, Age
//!
//! The only ambient input to decoding is "today". It is always supplied
//! through the [`Clock`] trait so that the decoder stays a pure function
//! of `(input, today)` and tests can pin the date with [`FixedClock`].
//!
//! ## UTC Dates
//!
//! [`SystemClock`] reads the current **UTC** calendar date. A local
//! offset would make the same instant resolve to different dates on
//! different hosts, so a birth date of "today" could be accepted on one
//! machine and rejected as future-dated on another.
//!
//! ## Century Policy
//!
//! A two-digit year is ambiguous. [`resolve_century()`] prefers the 2000s
//! and falls back to the 1900s only when the 2000s year would lie in the
//! future. When both readings are in the past the younger one wins.

use chrono::{Datelike, NaiveDate, Utc};

/// Source of the current calendar date.
pub trait Clock {
    /// Today's date.
    fn today(&self) -> NaiveDate;
}

/// Reads the current UTC date from the host clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Pin the clock to `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Resolve a two-digit year (`0..=99`) to a four-digit year.
///
/// Returns `2000 + yy` unless that exceeds `current_year`, in which case
/// returns `1900 + yy`.
pub fn resolve_century(yy: u32, current_year: i32) -> i32 {
    let recent = 2000 + yy as i32;
    if recent <= current_year {
        recent
    } else {
        1900 + yy as i32
    }
}

/// Completed years between `birth` and `today`.
///
/// One less than the year difference while this year's birthday is still
/// ahead. Returns 0 if `birth` is after `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}
