//! # Error Types — Failure Reasons
//!
//! The decoder never fails to produce a result. Rejections are data: an
//! [`InvalidIdentity`] carrying exactly one [`FailureReason`]. Both types
//! implement `std::error::Error` via `thiserror` so callers who prefer
//! `Result` can convert with [`ParseOutcome::into_result()`] and use `?`.
//!
//! [`ParseOutcome::into_result()`]: crate::identity::ParseOutcome::into_result

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of reasons an identity number is rejected.
///
/// Checks run in declaration order; the first failing check wins.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureReason {
    /// Not exactly 13 ASCII digits after trimming whitespace.
    #[error("expected exactly 13 ASCII digits")]
    InvalidFormat,

    /// The YYMMDD prefix is not a real, non-future calendar date.
    #[error("date of birth is not a real past calendar date")]
    InvalidDate,

    /// The citizenship digit (position 11) is not 0, 1 or 2.
    #[error("citizenship digit must be 0, 1 or 2")]
    InvalidCitizenshipDigit,

    /// The Luhn check over all 13 digits failed.
    #[error("checksum digit does not match")]
    InvalidChecksum,
}

impl FailureReason {
    /// All reasons, in pipeline order.
    pub const ALL: [FailureReason; 4] = [
        FailureReason::InvalidFormat,
        FailureReason::InvalidDate,
        FailureReason::InvalidCitizenshipDigit,
        FailureReason::InvalidChecksum,
    ];

    /// Stable machine-readable code, e.g. `INVALID_CHECKSUM`.
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::InvalidFormat => "INVALID_FORMAT",
            FailureReason::InvalidDate => "INVALID_DATE",
            FailureReason::InvalidCitizenshipDigit => "INVALID_CITIZENSHIP_DIGIT",
            FailureReason::InvalidChecksum => "INVALID_CHECKSUM",
        }
    }
}

/// A rejected identity number together with the reason it was rejected.
///
/// `id_number` is the trimmed input, not the raw caller string.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[error("invalid identity number {id_number:?}: {reason}")]
pub struct InvalidIdentity {
    /// Trimmed input that failed validation.
    pub id_number: String,
    /// First check that failed.
    #[source]
    pub reason: FailureReason,
}

impl InvalidIdentity {
    /// Create a rejection record.
    pub fn new(id_number: impl Into<String>, reason: FailureReason) -> Self {
        Self {
            id_number: id_number.into(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn codes_are_screaming_snake_case() {
        let codes: Vec<&str> = FailureReason::ALL.iter().map(|r| r.code()).collect();
        assert_eq!(
            codes,
            vec![
                "INVALID_FORMAT",
                "INVALID_DATE",
                "INVALID_CITIZENSHIP_DIGIT",
                "INVALID_CHECKSUM",
            ]
        );
    }

    #[test]
    fn serde_uses_code() {
        for reason in FailureReason::ALL {
            let json = serde_json::to_string(&reason).unwrap();
            assert_eq!(json, format!("\"{}\"", reason.code()));
            let back: FailureReason = serde_json::from_str(&json).unwrap();
            assert_eq!(back, reason);
        }
    }

    #[test]
    fn invalid_identity_display_and_source() {
        let err = InvalidIdentity::new("9001049818081", FailureReason::InvalidChecksum);
        assert_eq!(
            err.to_string(),
            "invalid identity number \"9001049818081\": checksum digit does not match"
        );
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "checksum digit does not match");
    }
}
