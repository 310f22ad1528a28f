//! Record model representing one contact.

use crate::domain::{Field, Name, Phone, ValidationResult};
use std::fmt;

/// One contact: a name plus an ordered list of phone numbers.
///
/// The name is fixed at construction. Phones keep the order in which they were
/// added and may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

impl Record {
    /// Create a new record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl AsRef<str>) -> ValidationResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
        })
    }

    /// Create a record holding a single phone.
    pub fn with_phone(name: impl AsRef<str>, phone: impl Into<String>) -> ValidationResult<Self> {
        let mut record = Self::new(name)?;
        record.add_phone(phone)?;
        Ok(record)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The first phone added, if any.
    pub fn primary_phone(&self) -> Option<&Phone> {
        self.phones.first()
    }

    /// Validate and append a phone number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` and leaves the phone list
    /// untouched if the number is invalid.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> ValidationResult<()> {
        let phone = Phone::new(phone)?;
        tracing::debug!(name = %self.name.as_str(), phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone whose stored value equals `phone`.
    ///
    /// Returns the removed phone, or `None` when nothing matched.
    pub fn remove_phone(&mut self, phone: &str) -> Option<Phone> {
        let position = self.phones.iter().position(|p| p.value() == phone)?;
        tracing::debug!(name = %self.name.as_str(), phone, "Phone removed");
        Some(self.phones.remove(position))
    }

    /// Replace every phone equal to `old` with `new`.
    ///
    /// Returns how many entries were replaced. When nothing matches `old` this
    /// is a no-op and `new` is not checked.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if `new` is invalid; the
    /// phone list is not modified in that case.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ValidationResult<usize> {
        if !self.phones.iter().any(|p| p.value() == old) {
            return Ok(0);
        }

        let replacement = Phone::new(new)?;
        let mut replaced = 0;
        for phone in self.phones.iter_mut().filter(|p| p.value() == old) {
            *phone = replacement.clone();
            replaced += 1;
        }

        tracing::debug!(name = %self.name.as_str(), old, new, replaced, "Phone edited");
        Ok(replaced)
    }

    /// Look up a phone by its exact stored value.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.value() == phone)
    }

    /// All phone values joined by `"; "`, in list order.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(|p| p.value())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )
    }
}
