//! NormalizedKey value object.

use super::field::Field;
use super::name::Name;
use std::fmt;

/// Storage identity of a contact name.
///
/// Built once from a name by trimming surrounding whitespace and
/// lower-casing. Two names that differ only in case or padding produce the
/// same key.
///
/// # Example
///
/// ```
/// use address_book::domain::NormalizedKey;
///
/// assert_eq!(NormalizedKey::new("  John "), NormalizedKey::new("john"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    /// Normalize a raw name.
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    /// Normalize a [`Name`]. An absent name maps to the empty key.
    pub fn from_name(name: &Name) -> Self {
        Self::new(name.value().unwrap_or_default())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
