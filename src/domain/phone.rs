//! Phone value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

/// A phone number of exactly ten digits.
///
/// Validation runs on construction and on every reassignment through
/// [`Phone::set`], so a `Phone` can never hold an invalid value.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let phone = Phone::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert!(Phone::new("12345").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::WrongPhone` unless the value is exactly
    /// ten ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::WrongPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Check whether `phone` would be accepted by [`Phone::new`].
    pub fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }

    /// Replace the stored number. On failure the old value is kept.
    pub fn set(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::new(phone)?;
        Ok(())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Phone {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
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
