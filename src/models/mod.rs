//! Data models for address book entities.
//!
//! This module contains the record type: one contact with its name and
//! phone numbers.

pub mod record;

pub use record::Record;
