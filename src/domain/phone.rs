//! Phone value object.

use super::errors::{ValidationError, ValidationResult};
use super::field::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// International prefix removed before the digit check.
pub const INTERNATIONAL_PREFIX: &str = "+38";

static NATIONAL_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{10}$").expect("Failed to compile national number regex")
});

/// A validated phone number.
///
/// A number is valid when removing every `+38` from it leaves exactly ten
/// ASCII digits. The prefix is removed wherever it appears, not only at the
/// start. The stored value is the string as it was given, prefix included.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Field, Phone};
///
/// let phone = Phone::new("+380991234567").unwrap();
/// assert_eq!(phone.value(), "+380991234567");
/// assert!(Phone::new("12345").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if the number does not
    /// reduce to ten digits.
    pub fn new(phone: impl Into<String>) -> ValidationResult<Self> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhoneFormat(phone));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    fn is_valid(phone: &str) -> bool {
        NATIONAL_NUMBER_REGEX.is_match(&Self::strip_prefix(phone))
    }

    fn strip_prefix(phone: &str) -> String {
        phone.replace(INTERNATIONAL_PREFIX, "")
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ten-digit national number.
    pub fn national_number(&self) -> String {
        Self::strip_prefix(&self.0)
    }
}

impl Field for Phone {
    fn value(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
