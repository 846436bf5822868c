use crate::error::AddressBookResult;
use crate::models::Record;

/// Repository for managing contact records.
///
/// Provides abstraction over record storage keyed by normalized name, so the
/// assistant and the demo driver do not depend on a concrete store.
pub trait RecordRepository {
    /// Store a record under its normalized name, replacing any existing one.
    fn add_record(&mut self, record: Record);

    /// Look up a record by name (case and surrounding whitespace ignored).
    fn find(&self, name: &str) -> Option<&Record>;

    /// Look up a record by name for in-place mutation.
    fn find_mut(&mut self, name: &str) -> Option<&mut Record>;

    /// Remove and return the record stored under `name`.
    fn delete(&mut self, name: &str) -> AddressBookResult<Record>;

    /// All records in insertion order.
    fn records(&self) -> Vec<&Record>;
}
