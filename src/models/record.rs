//! Record model representing one contact in the address book.

use crate::domain::{Field, Name, Phone};
use crate::error::{AddressBookError, AddressBookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact: a name and the phone numbers stored for it.
///
/// Phones keep insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    /// The contact's name, as given at construction.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The stored phones, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `raw` and append it.
    ///
    /// The record is unchanged if validation fails.
    pub fn add_phone(&mut self, raw: &str) -> AddressBookResult<()> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        debug!(name = %self.name, phone = raw, "Added phone");
        Ok(())
    }

    /// Remove the first phone equal to `raw` and return it.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, raw: &str) -> AddressBookResult<Phone> {
        let index = self
            .phones
            .iter()
            .position(|p| p.matches(raw))
            .ok_or_else(|| AddressBookError::PhoneNotFound(raw.to_string()))?;

        debug!(name = %self.name, phone = raw, "Removed phone");
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old` with a new phone built from `new`.
    ///
    /// Returns `Ok(false)` when `old` is not present. The replacement keeps the
    /// original position. If `new` fails validation the record is unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> AddressBookResult<bool> {
        let Some(slot) = self.phones.iter_mut().find(|p| p.matches(old)) else {
            return Ok(false);
        };

        *slot = Phone::new(new)?;
        debug!(name = %self.name, old, new, "Edited phone");
        Ok(true)
    }

    /// Find the first phone equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.matches(raw))
    }

    /// Phones joined with `"; "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::to_display_string)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Format as `Contact name: <name>, phones: <p1>; <p2>`.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )
    }
}
