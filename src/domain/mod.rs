//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values a contact is made
//! of: its name and its phone numbers. These value objects provide validation
//! at construction time and prevent invalid data from being represented in
//! the system.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::{ValidationError, ValidationResult};
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
