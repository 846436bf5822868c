//! In-memory directory of contact records.

use super::traits::RecordRepository;
use crate::domain::NormalizedKey;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::Record;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Records keyed by normalized name.
///
/// The key is computed once, when a record is inserted. Iteration follows
/// first-insertion order; overwriting a key keeps its position.
///
/// # Example
///
/// ```
/// use address_book::models::Record;
/// use address_book::repositories::Directory;
///
/// let mut book = Directory::new();
/// book.add_record(Record::new("  John  "));
/// assert!(book.find("john").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Directory {
    records: HashMap<NormalizedKey, Record>,
    order: Vec<NormalizedKey>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record under its normalized name.
    ///
    /// An existing record with the same key is silently replaced.
    pub fn add_record(&mut self, record: Record) {
        let key = NormalizedKey::from_name(record.name());

        match self.records.insert(key.clone(), record) {
            Some(previous) => {
                warn!(key = %key, replaced = %previous.name(), "Overwrote existing contact");
            }
            None => {
                debug!(key = %key, "Added contact");
                self.order.push(key);
            }
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(&NormalizedKey::new(name))
    }

    /// Look up a record by name for in-place mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(&NormalizedKey::new(name))
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::RecordNotFound` if no record has that key.
    pub fn delete(&mut self, name: &str) -> AddressBookResult<Record> {
        let key = NormalizedKey::new(name);
        let record = self
            .records
            .remove(&key)
            .ok_or_else(|| AddressBookError::RecordNotFound(name.to_string()))?;

        self.order.retain(|k| k != &key);
        debug!(key = %key, "Deleted contact");
        Ok(record)
    }

    /// Iterate over `(key, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&NormalizedKey, &Record)> {
        self.order
            .iter()
            .filter_map(move |key| self.records.get_key_value(key))
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordRepository for Directory {
    fn add_record(&mut self, record: Record) {
        Directory::add_record(self, record)
    }

    fn find(&self, name: &str) -> Option<&Record> {
        Directory::find(self, name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        Directory::find_mut(self, name)
    }

    fn delete(&mut self, name: &str) -> AddressBookResult<Record> {
        Directory::delete(self, name)
    }

    fn records(&self) -> Vec<&Record> {
        self.iter().map(|(_, record)| record).collect()
    }
}
