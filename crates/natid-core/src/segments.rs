//! # Raw Segments
//!
//! Fixed-width slices of a 13-digit identity number:
//!
//! ```text
//! YY MM DD SSSS C A Z
//! |  |  |  |    | | └─ checksum digit
//! |  |  |  |    | └─── legacy digit
//! |  |  |  |    └───── citizenship digit
//! |  |  |  └────────── gender sequence
//! └──┴──┴───────────── date of birth
//! ```
//!
//! Segments stay as strings (leading zeros preserved). Concatenating them in
//! order reproduces the input exactly.

use serde::{Deserialize, Serialize};

/// Length of a well-formed identity number.
pub const ID_LENGTH: usize = 13;

/// Gender sequences at or above this value denote male.
pub const MALE_SEQUENCE_THRESHOLD: u32 = 5000;

/// The seven fixed-width segments of an identity number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawSegments {
    /// Two-digit year of birth.
    pub year: String,
    /// Two-digit month of birth.
    pub month: String,
    /// Two-digit day of birth.
    pub day: String,
    /// Four-digit gender sequence.
    pub gender_sequence: String,
    /// Citizenship digit.
    pub citizenship_digit: String,
    /// Legacy digit, carried but not interpreted.
    pub legacy_digit: String,
    /// Luhn checksum digit.
    pub checksum_digit: String,
}

impl RawSegments {
    /// Slice a well-formed identity number into its segments.
    ///
    /// Returns `None` unless `id` is exactly 13 ASCII digits.
    pub fn slice(id: &str) -> Option<Self> {
        if !is_well_formed(id) {
            return None;
        }
        Some(Self {
            year: id[0..2].to_string(),
            month: id[2..4].to_string(),
            day: id[4..6].to_string(),
            gender_sequence: id[6..10].to_string(),
            citizenship_digit: id[10..11].to_string(),
            legacy_digit: id[11..12].to_string(),
            checksum_digit: id[12..13].to_string(),
        })
    }

    /// Reassemble the identity number.
    pub fn concat(&self) -> String {
        [
            self.year.as_str(),
            &self.month,
            &self.day,
            &self.gender_sequence,
            &self.citizenship_digit,
            &self.legacy_digit,
            &self.checksum_digit,
        ]
        .concat()
    }

    /// Numeric value of the gender sequence.
    pub fn gender_sequence_value(&self) -> Option<u32> {
        self.gender_sequence.parse().ok()
    }

    /// Numeric value of the citizenship digit.
    pub fn citizenship_value(&self) -> Option<u32> {
        self.citizenship_digit.parse().ok()
    }
}

/// `true` if `s` is exactly 13 ASCII digits.
pub fn is_well_formed(s: &str) -> bool {
    s.len() == ID_LENGTH && s.bytes().all(|b| b.is_ascii_digit())
}
