//! Error types for phone number parsing.
//!
//! Every parse failure is one error kind with a sub-reason, so callers that
//! only care about success can treat the whole family uniformly while
//! diagnostics still say what went wrong.

use std::fmt;

/// Result type alias for parsing operations.
pub type ParseResult<T> = Result<T, NumberParseError>;

/// Reasons a string could not be parsed as a phone number.
///
/// The matcher swallows all of these during scanning; they surface only to
/// callers invoking the parser directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberParseError {
    /// No default region was supplied and the number carried no country code
    /// the library recognizes.
    InvalidCountryCode,

    /// The string has no chance of being a phone number (wrong characters,
    /// not enough digits).
    NotANumber,

    /// An international dialing prefix was stripped and too few digits
    /// remained.
    TooShortAfterIdd,

    /// The national significant number is shorter than any phone number can
    /// be.
    TooShortNsn,

    /// The national significant number is longer than any phone number can
    /// be.
    TooLongNsn,
}

impl fmt::Display for NumberParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCountryCode => {
                write!(f, "missing or invalid default region or country code")
            }
            Self::NotANumber => write!(f, "the string supplied did not seem to be a phone number"),
            Self::TooShortAfterIdd => write!(
                f,
                "phone number too short after the international dialing prefix"
            ),
            Self::TooShortNsn => write!(f, "the string supplied is too short to be a phone number"),
            Self::TooLongNsn => write!(f, "the string supplied is too long to be a phone number"),
        }
    }
}

impl std::error::Error for NumberParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumberParseError::TooShortNsn.to_string(),
            "the string supplied is too short to be a phone number"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumberParseError::NotANumber);
        assert!(err.source().is_none());
    }
}
