//! Strongly-typed value types with validation for contact primitives.
//!
//! This module provides newtype wrappers for phone numbers and email
//! addresses, ensuring they are always valid when used. Both are immutable;
//! equality and hashing are by the wrapped string.
//!
//! # Example
//!
//! ```ignore
//! use academia_models::value_types::{Email, Phone};
//!
//! // Parse and validate
//! let email: Email = "alice@example.com".parse()?;
//! let phone: Phone = "13912345678".parse()?;
//!
//! // Use as string
//! println!("Email: {}", email);
//! println!("Phone: {}", phone.as_str());
//! ```

use academia_core::ValidationError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email pattern is a valid regex")
});

// ============================================================================
// Email
// ============================================================================

/// A validated email address.
///
/// The address must have a local part, an `@`, and a domain that ends in a
/// dotted top-level label. `a@b` is rejected, `a@b.com` is accepted.
///
/// # Example
///
/// ```ignore
/// use academia_models::value_types::Email;
///
/// let email: Email = "user@example.com".parse().unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
///
/// // Invalid emails fail to parse
/// assert!("user@localhost".parse::<Email>().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new Email from a string, validating it.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        Self::validate(&email)?;
        Ok(Self(email))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before @) of the email.
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or("")
    }

    /// Get the domain part (after @) of the email.
    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or("")
    }

    fn validate(email: &str) -> Result<(), ValidationError> {
        if email.is_empty() {
            return Err(ValidationError::InvalidEmail("email cannot be empty".into()));
        }

        if !EMAIL_PATTERN.is_match(email) {
            return Err(ValidationError::InvalidEmail(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email({})", self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Email {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Email {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Email {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Email> for String {
    fn from(email: Email) -> String {
        email.0
    }
}

impl PartialEq<str> for Email {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// ============================================================================
// Phone
// ============================================================================

/// A validated mainland mobile phone number.
///
/// The number must be exactly 11 ASCII decimal digits with no separators,
/// spaces or country prefix.
///
/// # Example
///
/// ```ignore
/// use academia_models::value_types::Phone;
///
/// let phone: Phone = "13800138000".parse().unwrap();
/// assert_eq!(phone.as_str(), "13800138000");
///
/// // Anything but 11 digits fails to parse
/// assert!("1380013800".parse::<Phone>().is_err());
/// assert!("+8613800138000".parse::<Phone>().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Phone(String);

impl Phone {
    /// Number of digits in a valid phone number.
    pub const DIGITS: usize = 11;

    /// Create a new Phone from a string, validating it.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        Self::validate(&phone)?;
        Ok(Self(phone))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    fn validate(phone: &str) -> Result<(), ValidationError> {
        if phone.is_empty() {
            return Err(ValidationError::InvalidPhone(
                "phone number cannot be empty".into(),
            ));
        }

        if !phone.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone(format!(
                "'{}' contains non-digit characters",
                phone
            )));
        }

        if phone.len() != Self::DIGITS {
            return Err(ValidationError::InvalidPhone(format!(
                "expected {} digits, got {}",
                Self::DIGITS,
                phone.len()
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phone({})", self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Phone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Phone {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Phone {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> String {
        phone.0
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// ============================================================================
// Tests
// ============================================================================
