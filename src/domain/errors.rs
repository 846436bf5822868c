//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A value of the wrong type was supplied where a phone number was expected.
    /// Holds the name of the type that was received.
    InvalidType(String),

    /// The provided phone number is not exactly 10 digits.
    InvalidFormat(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidType(kind) => {
                write!(f, "The telephone number must be a string, got {}", kind)
            }
            Self::InvalidFormat(phone) => write!(
                f,
                "The telephone number must contain exactly 10 digits: {}",
                phone
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
