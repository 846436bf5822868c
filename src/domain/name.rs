//! Name value object.

use super::field::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact's display name.
///
/// Names carry no validation: any string is kept exactly as given, including
/// surrounding whitespace and original casing. Lookups normalize separately
/// through [`NormalizedKey`](super::NormalizedKey).
///
/// # Example
///
/// ```
/// use address_book::domain::{Field, Name};
///
/// let name = Name::new("  John ");
/// assert_eq!(name.value(), Some("  John "));
/// assert_eq!(Name::empty().to_display_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(Option<String>);

impl Name {
    /// Create a name holding the given string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Some(name.into()))
    }

    /// Create a name with no value.
    pub fn empty() -> Self {
        Self(None)
    }

    /// Convert into the underlying value.
    pub fn into_inner(self) -> Option<String> {
        self.0
    }
}

impl Field for Name {
    fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value().unwrap_or_default())
    }
}
