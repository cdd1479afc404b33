//! Validation of raw positional arguments.
//!
//! Every rejection is a [`ValidationError`]; callers treat all variants as the
//! same usage failure and only the message differs.

use num_bigint::BigInt;
use num_traits::Signed;

/// Name shown for the Fibonacci index in error messages.
pub const NTH_NUMBER: &str = "NTH_NUMBER";

/// Largest Fibonacci index accepted from the command line.
///
/// F(10,000,000) has about 2.09 million decimal digits; beyond this the
/// result no longer fits a log line and computing it takes minutes.
pub const MAX_NTH_NUMBER: u64 = 10_000_000;

/// A positional argument failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The value was empty or only whitespace.
    #[error("{argument} must not be empty")]
    Empty { argument: &'static str },

    /// The value is not an integer.
    #[error("'{value}' is not a valid integer for {argument}")]
    NotANumber {
        argument: &'static str,
        value: String,
    },

    /// The value is an integer below zero.
    #[error("{value} is negative; {argument} must be a non-negative integer")]
    Negative {
        argument: &'static str,
        value: String,
    },

    /// The value is above [`MAX_NTH_NUMBER`].
    #[error("{value} exceeds the largest supported {argument} ({max})", max = MAX_NTH_NUMBER)]
    OutOfRange {
        argument: &'static str,
        value: String,
    },
}

/// Parse the Fibonacci index from its raw command-line form.
///
/// Surrounding whitespace is ignored and a leading `+` is accepted. `-0` is
/// zero, not a negative number.
///
/// # Errors
///
/// Returns [`ValidationError`] for empty, non-numeric, negative, or
/// out-of-range (above [`MAX_NTH_NUMBER`]) input.
pub fn parse_nth_number(raw: &str) -> Result<u64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty {
            argument: NTH_NUMBER,
        });
    }

    let value = trimmed.parse::<BigInt>().map_err(|_| ValidationError::NotANumber {
        argument: NTH_NUMBER,
        value: trimmed.to_string(),
    })?;

    if value.is_negative() {
        return Err(ValidationError::Negative {
            argument: NTH_NUMBER,
            value: trimmed.to_string(),
        });
    }

    u64::try_from(&value)
        .ok()
        .filter(|n| *n <= MAX_NTH_NUMBER)
        .ok_or_else(|| ValidationError::OutOfRange {
            argument: NTH_NUMBER,
            value: trimmed.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_integers() {
        assert_eq!(parse_nth_number("0"), Ok(0));
        assert_eq!(parse_nth_number("1"), Ok(1));
        assert_eq!(parse_nth_number("100"), Ok(100));
    }

    #[test]
    fn accepts_whitespace_and_plus_sign() {
        assert_eq!(parse_nth_number("  42 "), Ok(42));
        assert_eq!(parse_nth_number("+7"), Ok(7));
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(parse_nth_number("-0"), Ok(0));
    }

    #[test]
    fn accepts_the_cap() {
        assert_eq!(parse_nth_number("10000000"), Ok(MAX_NTH_NUMBER));
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            parse_nth_number(""),
            Err(ValidationError::Empty { .. })
        ));
        assert!(matches!(
            parse_nth_number("   "),
            Err(ValidationError::Empty { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(matches!(
            parse_nth_number("abc"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_nth_number("1.5"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_nth_number("12abc"),
            Err(ValidationError::NotANumber { .. })
        ));
    }

    #[test]
    fn rejects_negative() {
        assert!(matches!(
            parse_nth_number("-5"),
            Err(ValidationError::Negative { .. })
        ));
        // Huge negatives are negative, not out of range.
        assert!(matches!(
            parse_nth_number("-99999999999999999999999"),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range() {
        for raw in ["10000001", "18446744073709551615", "18446744073709551616"] {
            assert!(
                matches!(parse_nth_number(raw), Err(ValidationError::OutOfRange { .. })),
                "{raw}"
            );
        }
        let msg = parse_nth_number("10000001").unwrap_err().to_string();
        assert!(msg.contains("10000000"), "{msg}");
    }

    #[test]
    fn messages_name_the_argument() {
        for raw in ["", "abc", "-1", "99999999999999999999999"] {
            let err = parse_nth_number(raw).unwrap_err();
            assert!(err.to_string().contains(NTH_NUMBER), "{err}");
        }
    }

    #[test]
    fn messages_differ_by_cause() {
        let empty = parse_nth_number("").unwrap_err().to_string();
        let nan = parse_nth_number("abc").unwrap_err().to_string();
        let neg = parse_nth_number("-3").unwrap_err().to_string();
        assert_ne!(empty, nan);
        assert_ne!(nan, neg);
        assert!(nan.contains("'abc'"));
        assert!(neg.contains("-3"));
    }
}
