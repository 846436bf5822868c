//! Domain value objects and types.
//!
//! This module contains the field wrappers for contact names and phone
//! numbers, plus the normalized key used to store contacts. Phone numbers are
//! validated at construction time so an invalid number can never be held by
//! a record.

pub mod errors;
pub mod field;
pub mod name;
pub mod normalized_key;
pub mod phone;

pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use normalized_key::NormalizedKey;
pub use phone::Phone;
