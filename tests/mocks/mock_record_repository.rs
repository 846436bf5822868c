use address_book::error::AddressBookResult;
use address_book::models::Record;
use address_book::repositories::{Directory, RecordRepository};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock record repository for testing.
///
/// Wraps a real `Directory` and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockRecordRepository {
    inner: Directory,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockRecordRepository {
    /// Create a new empty MockRecordRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    /// The wrapped directory.
    pub fn directory(&self) -> &Directory {
        &self.inner
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl RecordRepository for MockRecordRepository {
    fn add_record(&mut self, record: Record) {
        self.track_call("add_record");
        self.inner.add_record(record);
    }

    fn find(&self, name: &str) -> Option<&Record> {
        self.track_call("find");
        self.inner.find(name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.track_call("find_mut");
        self.inner.find_mut(name)
    }

    fn delete(&mut self, name: &str) -> AddressBookResult<Record> {
        self.track_call("delete");
        self.inner.delete(name)
    }

    fn records(&self) -> Vec<&Record> {
        self.track_call("records");
        RecordRepository::records(&self.inner)
    }
}
