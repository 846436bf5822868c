//! Scripted demonstration run.
//!
//! Builds two contacts, prints them, edits and looks up a phone number, then
//! deletes one contact. The produced lines are returned rather than printed so
//! the binary and the tests share the same driver.

use crate::domain::Field;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::Record;
use crate::repositories::RecordRepository;
use tracing::info;

/// Run the demonstration against `book` and return the output lines.
///
/// # Errors
///
/// Any validation or lookup failure aborts the run and is returned as is.
pub fn run<R: RecordRepository + ?Sized>(book: &mut R) -> AddressBookResult<Vec<String>> {
    let mut lines = Vec::new();

    let mut john = Record::new("John");
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = Record::new("Jane");
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    lines.extend(book.records().iter().map(|record| record.to_string()));

    let john = book
        .find_mut("John")
        .ok_or_else(|| AddressBookError::RecordNotFound("John".to_string()))?;
    john.edit_phone("1234567890", "1112223333")?;
    lines.push(john.to_string());

    let found = john
        .find_phone("5555555555")
        .map(Field::to_display_string)
        .unwrap_or_default();
    lines.push(format!("{}: {}", john.name(), found));

    book.delete("Jane")?;
    info!(remaining = book.records().len(), "Demonstration finished");

    Ok(lines)
}
