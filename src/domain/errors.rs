//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten ASCII digits.
    InvalidPhoneFormat(String),

    /// The provided birthday is not a valid `YYYY-MM-DD` date.
    InvalidBirthdayFormat(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhoneFormat(phone) => write!(
                f,
                "Invalid phone number format: {:?} (expected 10 digits)",
                phone
            ),
            Self::InvalidBirthdayFormat(birthday) => write!(
                f,
                "Invalid birthday format: {:?} (use YYYY-MM-DD)",
                birthday
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
