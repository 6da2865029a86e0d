//! # Luhn Checksum
//!
//! Mod-10 weighted digit sum used as the final digit of every identity
//! number. Scans right to left, doubling every second digit and folding
//! doubled values above 9 back into a single digit.
//!
//! The empty string is valid (sum 0). Callers that require a non-empty
//! input must check length first.

/// Returns `true` if `digits` is all ASCII digits and passes the mod-10 check.
///
/// Any non-digit character fails the whole check immediately.
pub fn luhn_valid(digits: &str) -> bool {
    match luhn_sum(digits, false) {
        Some(sum) => sum == 0,
        None => false,
    }
}

/// Compute the digit that, appended to `payload`, makes it Luhn-valid.
///
/// Returns `None` if `payload` contains a non-digit character.
pub fn check_digit(payload: &str) -> Option<u8> {
    // The appended digit occupies the undoubled rightmost position, so the
    // payload's own rightmost digit is the first one doubled.
    let sum = luhn_sum(payload, true)?;
    Some(((10 - sum) % 10) as u8)
}

/// Weighted digit sum modulo 10, or `None` on the first non-digit.
fn luhn_sum(digits: &str, double_first: bool) -> Option<u32> {
    let mut double = double_first;
    let mut sum = 0u32;
    for c in digits.chars().rev() {
        let mut value = c.to_digit(10)?;
        if double {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        sum = (sum + value) % 10;
        double = !double;
    }
    Some(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_string_is_valid() {
        assert!(luhn_valid(""));
    }

    #[test]
    fn known_identity_numbers() {
        assert!(luhn_valid("9001049818080"));
        assert!(luhn_valid("8001015009087"));
        assert!(luhn_valid("7805050050082"));
        assert!(!luhn_valid("9001049818081"));
        assert!(!luhn_valid("7805050050083"));
    }

    #[test]
    fn classic_luhn_vectors() {
        assert!(luhn_valid("79927398713"));
        assert!(!luhn_valid("79927398710"));
        assert!(luhn_valid("0"));
        assert!(!luhn_valid("1"));
    }

    #[test]
    fn non_digit_fails() {
        assert!(!luhn_valid("900104981808a"));
        assert!(!luhn_valid("9001 04981808"));
        assert!(!luhn_valid("-0"));
        // Non-ASCII digits are not accepted either.
        assert!(!luhn_valid("٠"));
    }

    #[test]
    fn check_digit_completes_known_number() {
        assert_eq!(check_digit("900104981808"), Some(0));
        assert_eq!(check_digit("800101500908"), Some(7));
        assert_eq!(check_digit("780505005008"), Some(2));
    }

    #[test]
    fn check_digit_rejects_non_digits() {
        assert_eq!(check_digit("90010498180x"), None);
    }

    #[test]
    fn check_digit_of_empty_payload() {
        assert_eq!(check_digit(""), Some(0));
    }

    proptest! {
        /// Appending the computed check digit always yields a valid string.
        #[test]
        fn check_digit_always_validates(payload in "[0-9]{0,24}") {
            let digit = check_digit(&payload).unwrap();
            let full = format!("{payload}{digit}");
            prop_assert!(luhn_valid(&full));
        }

        /// Exactly one of the ten possible trailing digits is valid.
        #[test]
        fn exactly_one_trailing_digit_validates(payload in "[0-9]{1,16}") {
            let valid = (0..10)
                .filter(|d| luhn_valid(&format!("{payload}{d}")))
                .count();
            prop_assert_eq!(valid, 1);
        }

        /// Any string containing a non-digit is rejected.
        #[test]
        fn non_digit_anywhere_rejected(
            prefix in "[0-9]{0,6}",
            bad in "[^0-9]",
            suffix in "[0-9]{0,6}",
        ) {
            let s = format!("{prefix}{bad}{suffix}");
            prop_assert!(!luhn_valid(&s));
        }
    }
}
