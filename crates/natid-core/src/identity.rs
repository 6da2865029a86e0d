//! # Identity Outcome Types
//!
//! A decode call produces exactly one [`ParseOutcome`]: either a
//! [`ValidIdentity`] with every derived field populated, or an
//! [`InvalidIdentity`] naming the first failed check. There is no
//! partial-success state; segments are only exposed on a valid outcome.
//!
//! ## Serialization
//!
//! `ParseOutcome` serializes internally tagged by `status`:
//!
//! ```json
//! {"status":"invalid","id_number":"9001049818081","reason":"INVALID_CHECKSUM"}
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{FailureReason, InvalidIdentity};
use crate::segments::RawSegments;

/// Gender encoded by the four-digit sequence segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Sequence `5000..=9999`.
    Male,
    /// Sequence `0000..=4999`.
    Female,
}

impl Gender {
    /// Lowercase tag, e.g. `male`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Citizenship status encoded by the citizenship digit.
///
/// Digit `0` is a citizen. Digits `1` and `2` both map to
/// [`Citizenship::PermanentResident`]; `2` is a historical value and has no
/// tag of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Citizenship {
    /// Digit `0`.
    Citizen,
    /// Digits `1` and `2`.
    PermanentResident,
}

impl Citizenship {
    /// Snake-case tag, e.g. `permanent_resident`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Citizenship::Citizen => "citizen",
            Citizenship::PermanentResident => "permanent_resident",
        }
    }
}

impl std::fmt::Display for Citizenship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully validated identity number and its derived fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidIdentity {
    /// Trimmed 13-digit input.
    pub id_number: String,
    /// Resolved date of birth.
    pub date_of_birth: NaiveDate,
    /// Completed years as of the decode date.
    pub age: u32,
    /// Gender from the sequence segment.
    pub gender: Gender,
    /// Citizenship from the citizenship digit.
    pub citizenship: Citizenship,
    /// `true` iff `citizenship` is [`Citizenship::Citizen`].
    pub is_citizen: bool,
    /// Raw fixed-width segments.
    pub segments: RawSegments,
}

impl ValidIdentity {
    /// The identity number grouped as `YYMMDD SSSS CAZ`.
    pub fn formatted(&self) -> String {
        format!(
            "{}{}{} {} {}{}{}",
            self.segments.year,
            self.segments.month,
            self.segments.day,
            self.segments.gender_sequence,
            self.segments.citizenship_digit,
            self.segments.legacy_digit,
            self.segments.checksum_digit,
        )
    }
}

impl std::fmt::Display for ValidIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id_number)
    }
}

impl std::str::FromStr for ValidIdentity {
    type Err = InvalidIdentity;

    /// Decode against the system clock.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::decoder::parse(s).into_result()
    }
}

/// Result of decoding one identity number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ParseOutcome {
    /// Every check passed.
    Valid(ValidIdentity),
    /// A check failed.
    Invalid(InvalidIdentity),
}

impl ParseOutcome {
    /// `true` for [`ParseOutcome::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, ParseOutcome::Valid(_))
    }

    /// The trimmed input, whichever the variant.
    pub fn id_number(&self) -> &str {
        match self {
            ParseOutcome::Valid(v) => &v.id_number,
            ParseOutcome::Invalid(i) => &i.id_number,
        }
    }

    /// The valid payload, if any.
    pub fn valid(&self) -> Option<&ValidIdentity> {
        match self {
            ParseOutcome::Valid(v) => Some(v),
            ParseOutcome::Invalid(_) => None,
        }
    }

    /// The failure reason, if any.
    pub fn reason(&self) -> Option<FailureReason> {
        match self {
            ParseOutcome::Valid(_) => None,
            ParseOutcome::Invalid(i) => Some(i.reason),
        }
    }

    /// Convert to a `Result` for use with `?`.
    pub fn into_result(self) -> Result<ValidIdentity, InvalidIdentity> {
        match self {
            ParseOutcome::Valid(v) => Ok(v),
            ParseOutcome::Invalid(i) => Err(i),
        }
    }
}

impl From<ValidIdentity> for ParseOutcome {
    fn from(v: ValidIdentity) -> Self {
        ParseOutcome::Valid(v)
    }
}

impl From<InvalidIdentity> for ParseOutcome {
    fn from(i: InvalidIdentity) -> Self {
        ParseOutcome::Invalid(i)
    }
}
