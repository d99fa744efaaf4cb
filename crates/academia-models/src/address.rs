//! Postal address of a student.

use academia_core::ValidationError;

use crate::constants::is_recognized_province;

/// A province/city pair. The province must be a recognized region.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    province: String,
    city: String,
}

impl Address {
    pub fn new(
        province: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let province = province.into();
        if !is_recognized_province(&province) {
            return Err(ValidationError::InvalidProvince(format!(
                "'{}' is not a recognized province",
                province
            )));
        }

        Ok(Self {
            province,
            city: city.into(),
        })
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}
