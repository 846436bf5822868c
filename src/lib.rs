//! Address Book - an in-memory contact directory with validated phone numbers.
//!
//! Contacts are stored by normalized name and hold an ordered list of
//! ten-digit phone numbers. The crate ships a scripted demonstration and a
//! line-oriented command assistant on top of the same directory.
//!
//! # Architecture
//!
//! - **domain**: Field wrappers for names and phones, and the normalized key
//! - **models**: The contact record
//! - **repositories**: The record store trait and the in-memory directory
//! - **demo**: The scripted demonstration run
//! - **assistant**: Command parsing, handlers and the interactive session loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod assistant;
pub mod config;
pub mod demo;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

// Re-export commonly used types
pub use assistant::{Assistant, Command, Reply};
pub use config::{Config, RunMode};
pub use domain::{Field, Name, NormalizedKey, Phone, ValidationError};
pub use error::{AddressBookError, CommandError, ConfigError, ErrorKind};
pub use models::Record;
pub use repositories::{Directory, RecordRepository};
