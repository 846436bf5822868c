//! The `Field` abstraction shared by names and phone numbers.

/// A single optional value with a display boundary.
///
/// Implementors hold at most one string. An absent value displays as the
/// empty string.
pub trait Field {
    /// The current value, if any.
    fn value(&self) -> Option<&str>;

    /// The value as text, or an empty string when absent.
    fn to_display_string(&self) -> String {
        self.value().unwrap_or_default().to_string()
    }

    /// Whether a value is present.
    fn is_present(&self) -> bool {
        self.value().is_some()
    }
}
