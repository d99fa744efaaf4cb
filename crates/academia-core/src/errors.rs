//! Validation errors raised while constructing value objects and entities.
//!
//! Every constructor in `academia-models` returns [`ValidationError`] when an
//! invariant does not hold, so no partially-valid value can ever exist.

use std::fmt;
use validator::ValidationErrors;

/// Error type for invariant violations at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone number is not exactly 11 decimal digits.
    InvalidPhone(String),
    /// The email address does not match `local@domain.tld`.
    InvalidEmail(String),
    /// The province is not one of the recognized regions.
    InvalidProvince(String),
    /// A time slot does not start before it ends.
    InvalidTimeRange(String),
    /// A field-level constraint (range, length, year bounds) failed.
    Constraint(String),
}

impl ValidationError {
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint(message.into())
    }
}

impl std::error::Error for ValidationError {}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(msg) => write!(f, "Invalid phone number: {}", msg),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {}", msg),
            Self::InvalidProvince(msg) => write!(f, "Invalid province: {}", msg),
            Self::InvalidTimeRange(msg) => write!(f, "Invalid time range: {}", msg),
            Self::Constraint(msg) => write!(f, "Constraint violated: {}", msg),
        }
    }
}

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map_or_else(|| format!("{} is invalid", field), ToString::to_string)
            })
        })
        .collect::<Vec<_>>();
    // field_errors is a HashMap; keep the rendering stable
    messages.sort();
    messages.join(", ")
}

impl From<ValidationErrors> for ValidationError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Constraint(format_errors(&errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Bounded {
        #[validate(range(min = 1, max = 5, message = "credit must be between 1 and 5"))]
        credit: u8,
    }

    #[derive(Validate)]
    struct Unlabeled {
        #[validate(range(min = 1))]
        count: u8,
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::InvalidEmail("test".into());
        assert_eq!(format!("{}", err), "Invalid email: test");

        let err = ValidationError::InvalidPhone("test".into());
        assert_eq!(format!("{}", err), "Invalid phone number: test");

        let err = ValidationError::constraint("score must be between 0 and 100");
        assert_eq!(
            format!("{}", err),
            "Constraint violated: score must be between 0 and 100"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<ValidationError>();
    }

    #[test]
    fn test_from_validation_errors_uses_message() {
        let errors = Bounded { credit: 6 }.validate().unwrap_err();
        let err = ValidationError::from(errors);
        assert_eq!(
            err,
            ValidationError::Constraint("credit must be between 1 and 5".into())
        );
    }

    #[test]
    fn test_from_validation_errors_without_message() {
        let errors = Unlabeled { count: 0 }.validate().unwrap_err();
        assert_eq!(
            ValidationError::from(errors),
            ValidationError::Constraint("count is invalid".into())
        );
    }

    #[test]
    fn test_valid_input_produces_no_errors() {
        assert!(Bounded { credit: 3 }.validate().is_ok());
    }
}
