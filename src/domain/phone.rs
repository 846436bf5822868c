//! Phone value object.

use super::errors::ValidationError;
use super::field::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone number regex"));

/// A validated phone number, or no number at all.
///
/// A present value is always exactly ten ASCII digits. Instances are never
/// edited in place: replacing a number means building a new `Phone`.
///
/// # Example
///
/// ```
/// use address_book::domain::{Field, Phone};
///
/// let phone = Phone::new("1234567890").unwrap();
/// assert_eq!(phone.value(), Some("1234567890"));
/// assert!(Phone::new("555-1234").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Phone(Option<String>);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` unless the value is exactly
    /// ten digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidFormat(phone));
        }

        Ok(Self(Some(phone)))
    }

    /// Create a Phone with no number.
    pub fn empty() -> Self {
        Self(None)
    }

    /// Create a Phone from a dynamically typed value.
    ///
    /// `null` yields an empty phone and strings are validated as in
    /// [`Phone::new`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidType` for any other JSON type and
    /// `ValidationError::InvalidFormat` for malformed strings.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::Null => Ok(Self::empty()),
            Value::String(s) => Self::new(s.as_str()),
            other => Err(ValidationError::InvalidType(json_type_name(other).to_string())),
        }
    }

    /// Replace the stored number with `value`.
    ///
    /// The replacement is validated first; on error `self` is left untouched.
    pub fn set_value(&mut self, value: Value) -> Result<(), ValidationError> {
        *self = Self::from_value(&value)?;
        Ok(())
    }

    /// Whether `phone` is exactly ten digits.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_PATTERN.is_match(phone)
    }

    /// Whether this phone holds exactly `raw`.
    pub fn matches(&self, raw: &str) -> bool {
        self.value() == Some(raw)
    }
}

impl Field for Phone {
    fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// Serde support - serialize as string or null
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize with the same validation as `from_value`
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Phone::from_value(&value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value().unwrap_or_default())
    }
}
