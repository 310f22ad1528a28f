//! Shared contract for contact fields.

use std::fmt;

/// A value held by a contact record.
///
/// Every field exposes its canonical value (the form used for comparison and
/// persistence) and renders itself for people through `Display`.
pub trait Field: fmt::Display {
    /// The canonical value of the field.
    fn value(&self) -> &str;
}
