//! Integration tests for directory and record CRUD operations.
//!
//! These tests exercise the public API the way a caller would: build records,
//! insert them, look them up by name and mutate them in place.

mod fixtures;

use address_book::{AddressBookError, Directory, ErrorKind, Field, Phone, Record};
use fixtures::*;
use serde_json::json;

#[test]
fn test_phone_accepts_any_ten_digits() {
    for raw in ["0000000000", "0123456789", "9999999999", "5551234567"] {
        let phone = Phone::new(raw).unwrap();
        assert_eq!(phone.value(), Some(raw));
    }
}

#[test]
fn test_phone_rejects_malformed_strings() {
    for raw in ["", "1", "123456789", "12345678901", "12345abcde", "(555)123456"] {
        let err: AddressBookError = Phone::new(raw).unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Format, "{:?}", raw);
    }
}

#[test]
fn test_phone_rejects_non_string_values() {
    let mut phone = Phone::empty();
    for value in [json!(1234567890), json!(1.5), json!(false), json!(["x"])] {
        let err: AddressBookError = phone.set_value(value).unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Type);
    }
    assert_eq!(phone.value(), None);
}

#[test]
fn test_add_then_find_with_name_variants() {
    let mut book = Directory::new();
    book.add_record(sample_record("  John  ", &["1234567890"]));

    for query in ["john", "JOHN", " John", "john   "] {
        let found = book.find(query).expect("record should be found");
        assert_eq!(found.phones_display(), "1234567890");
    }
}

#[test]
fn test_add_record_overwrites_on_name_collision() {
    let mut book = Directory::new();
    book.add_record(sample_record("John", &["1234567890"]));
    book.add_record(sample_record("  JOHN ", &["5555555555"]));

    assert_eq!(book.len(), 1);
    let found = book.find("john").unwrap();
    assert_eq!(found.name().value(), Some("  JOHN "));
    assert_eq!(found.phones_display(), "5555555555");
}

#[test]
fn test_delete_lifecycle() {
    let mut book = sample_directory();

    let err = book.delete("Bob").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
    assert_eq!(book.len(), 2);

    book.delete("Jane").unwrap();
    assert!(book.find("Jane").is_none());

    // Deleting again fails because the key is gone
    assert!(matches!(
        book.delete("jane"),
        Err(AddressBookError::RecordNotFound(_))
    ));
}

#[test]
fn test_iteration_visits_each_record_once() {
    let book = sample_directory();
    let lines: Vec<String> = book.iter().map(|(_, r)| r.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "Contact name: John, phones: 1234567890; 5555555555",
            "Contact name: Jane, phones: 9876543210",
        ]
    );
}

#[test]
fn test_edit_phone_end_to_end() {
    let mut book = Directory::new();
    book.add_record(john());

    let record = book.find_mut("John").unwrap();
    assert_eq!(
        record.to_display_string(),
        "Contact name: John, phones: 1234567890; 5555555555"
    );

    assert!(record.edit_phone("1234567890", "1112223333").unwrap());
    assert_eq!(
        record.to_display_string(),
        "Contact name: John, phones: 1112223333; 5555555555"
    );
    assert!(!record.edit_phone("1234567890", "1112223333").unwrap());

    let phone = record.find_phone("5555555555").unwrap();
    assert_eq!(phone.value(), Some("5555555555"));

    // Changes are visible through a fresh lookup
    assert_eq!(
        book.find("john").unwrap().phones_display(),
        "1112223333; 5555555555"
    );
}

#[test]
fn test_remove_phone_by_value() {
    let mut record: Record = john();
    record.add_phone("1234567890").unwrap();

    record.remove_phone("1234567890").unwrap();
    assert_eq!(record.phones_display(), "5555555555; 1234567890");

    let err = record.remove_phone("0000000000").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
}
