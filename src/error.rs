//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Coarse classification of address book failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A phone value of the wrong type
    Type,
    /// A phone string that is not exactly ten digits
    Format,
    /// A contact or phone number that is not present
    KeyNotFound,
}

/// Errors that can occur when working with records and the directory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A phone number failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    RecordNotFound(String),

    /// The record holds no such phone number
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),
}

impl AddressBookError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(ValidationError::InvalidType(_)) => ErrorKind::Type,
            Self::Validation(ValidationError::InvalidFormat(_)) => ErrorKind::Format,
            Self::RecordNotFound(_) | Self::PhoneNotFound(_) => ErrorKind::KeyNotFound,
        }
    }
}

/// Errors that can occur while handling an assistant command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command was given too few arguments
    #[error("{0}")]
    MissingArguments(&'static str),

    /// The underlying address book operation failed
    #[error(transparent)]
    Book(#[from] AddressBookError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(err.into())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AddressBookError::RecordNotFound("Jane".to_string());
        assert_eq!(err.to_string(), "Contact not found: Jane");

        let err = AddressBookError::PhoneNotFound("1234567890".to_string());
        assert_eq!(err.to_string(), "Phone number not found: 1234567890");

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_MODE".to_string(),
            reason: "Unknown mode".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ADDRESS_BOOK_MODE: Unknown mode"
        );
    }

    #[test]
    fn test_error_kinds() {
        let err: AddressBookError = ValidationError::InvalidType("number".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::Type);

        let err: AddressBookError = ValidationError::InvalidFormat("12".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::Format);

        assert_eq!(
            AddressBookError::RecordNotFound("x".to_string()).kind(),
            ErrorKind::KeyNotFound
        );
        assert_eq!(
            AddressBookError::PhoneNotFound("x".to_string()).kind(),
            ErrorKind::KeyNotFound
        );
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = CommandError::from(ValidationError::InvalidFormat("12".to_string()));
        assert_eq!(
            err.to_string(),
            "The telephone number must contain exactly 10 digits: 12"
        );
    }
}
