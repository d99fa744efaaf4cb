//! Strongly-typed ID newtypes for domain entities.
//!
//! Identifiers in the records system are plain integers assigned by the
//! registrar. Wrapping them prevents passing a `CourseId` where a
//! `StudentId` is expected.
//!
//! # Example
//!
//! ```ignore
//! use academia_models::ids::{CourseId, StudentId};
//!
//! fn enrol(student: StudentId, course: CourseId) { /* ... */ }
//!
//! enrol(StudentId::new(2024001), CourseId::new(101));
//! // enrol(CourseId::new(101), StudentId::new(2024001)); // Compile error!
//! ```

use std::fmt;

/// Macro to define a strongly-typed integer ID newtype.
///
/// Each id is a `Copy` newtype over `i64` with `Display` and `FromStr`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub i64);

        impl $name {
            #[inline]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Get the inner integer value.
            #[inline]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for Student entities.
    StudentId
);

define_id!(
    /// Strongly-typed ID for Teacher entities.
    TeacherId
);

define_id!(
    /// Strongly-typed ID for Course entities.
    CourseId
);

define_id!(
    /// Strongly-typed ID for majors.
    MajorId
);

define_id!(
    /// Strongly-typed ID for administrative classes.
    ClassId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip_through_i64() {
        let id = StudentId::new(2024001);
        let raw: i64 = id.into();
        assert_eq!(raw, 2024001);
        assert_eq!(StudentId::from(raw), id);
    }

    #[test]
    fn test_id_debug() {
        let id = CourseId::new(101);
        assert_eq!(format!("{:?}", id), "CourseId(101)");
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", TeacherId::new(7)), "7");
    }

    #[test]
    fn test_id_from_str() {
        let id: ClassId = " 3 ".parse().unwrap();
        assert_eq!(id.get(), 3);
        assert!("three".parse::<ClassId>().is_err());
    }

    #[test]
    fn test_id_ordering() {
        let mut ids = vec![ClassId::new(3), ClassId::new(1), ClassId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![ClassId::new(1), ClassId::new(2), ClassId::new(3)]);
    }
}
