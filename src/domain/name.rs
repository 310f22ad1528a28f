//! Name value object.

use super::errors::{ValidationError, ValidationResult};
use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Fold a contact name into its lookup key.
///
/// Only the case changes: surrounding whitespace is kept, so `"bob"` and
/// `" bob"` are different contacts.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
}

/// The identity of a contact.
///
/// The value is stored lowercase so that names compare case-insensitively.
/// The case used at creation time is not kept; `Display` renders the name
/// title-cased.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Field, Name};
///
/// let name = Name::new("aLiCe smith").unwrap();
/// assert_eq!(name.value(), "alice smith");
/// assert_eq!(name.to_string(), "Alice Smith");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, normalizing its case.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the provided name is empty.
    pub fn new(name: impl AsRef<str>) -> ValidationResult<Self> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(normalize(name)))
    }

    /// Get the normalized name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with the first letter of every word upper-cased.
    ///
    /// A word starts at any letter that does not follow another letter, so
    /// `"o'neil"` becomes `"O'Neil"`.
    pub fn title(&self) -> String {
        let mut titled = String::with_capacity(self.0.len());
        let mut prev_is_letter = false;
        for c in self.0.chars() {
            if c.is_alphabetic() {
                if prev_is_letter {
                    titled.extend(c.to_lowercase());
                } else {
                    titled.extend(c.to_uppercase());
                }
                prev_is_letter = true;
            } else {
                titled.push(c);
                prev_is_letter = false;
            }
        }
        titled
    }
}

impl Field for Name {
    fn value(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize the normalized form
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_lowercased() {
        let name = Name::new("ALICE").unwrap();
        assert_eq!(name.value(), "alice");
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn test_name_rejects_empty() {
        assert_eq!(Name::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_name_keeps_whitespace() {
        let name = Name::new(" Bob ").unwrap();
        assert_eq!(name.value(), " bob ");
    }

    #[test]
    fn test_names_compare_case_insensitively() {
        assert_eq!(Name::new("Bob").unwrap(), Name::new("bOB").unwrap());
    }

    #[test]
    fn test_name_title_case() {
        assert_eq!(Name::new("alice").unwrap().title(), "Alice");
        assert_eq!(Name::new("mary JANE").unwrap().title(), "Mary Jane");
        assert_eq!(Name::new("o'neil").unwrap().title(), "O'Neil");
        assert_eq!(Name::new("anne-marie").unwrap().title(), "Anne-Marie");
        assert_eq!(Name::new("agent007bond").unwrap().title(), "Agent007Bond");
    }

    #[test]
    fn test_name_display() {
        let name = Name::new("john doe").unwrap();
        assert_eq!(format!("{}", name), "John Doe");
    }

    #[test]
    fn test_name_serialization() {
        let name = Name::new("Alice").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"alice\"");
    }

    #[test]
    fn test_name_deserialization_empty_fails() {
        let result: Result<Name, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_only_folds_case() {
        assert_eq!(normalize("  ALICE "), "  alice ");
    }
}
