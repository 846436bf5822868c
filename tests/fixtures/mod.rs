//! Test fixtures and sample data.
//!
//! Reusable records and directories for integration tests.

#![allow(dead_code)]

use address_book::{Directory, Record};

/// Create a record with the given name and phones.
///
/// Panics if any phone is invalid, so only pass ten-digit numbers.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record
            .add_phone(phone)
            .unwrap_or_else(|e| panic!("fixture phone {} rejected: {}", phone, e));
    }
    record
}

/// John with two numbers, as used throughout the tests.
pub fn john() -> Record {
    sample_record("John", &["1234567890", "5555555555"])
}

/// Jane with one number.
pub fn jane() -> Record {
    sample_record("Jane", &["9876543210"])
}

/// A directory holding John then Jane.
pub fn sample_directory() -> Directory {
    let mut book = Directory::new();
    book.add_record(john());
    book.add_record(jane());
    book
}
