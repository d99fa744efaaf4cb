//! # Academia Models
//!
//! Validated domain models for academic records.
//!
//! Every type here is immutable after construction and enforces its
//! invariants in its constructor, so an instance that exists is valid.
//! The only in-place mutation is the [`Teacher`] course back-link.
//!
//! # Modules
//!
//! - [`value_types`]: Phone and email value objects
//! - [`constants`]: Closed enumerations and the province list
//! - [`ids`]: Strongly-typed integer identifiers
//! - [`address`], [`family`], [`timetable`]: Leaf entities
//! - [`teachers`], [`courses`], [`grades`], [`students`]: Composite entities
//!
//! # Example
//!
//! ```ignore
//! use academia_models::{Address, Phone, FamilyMember};
//!
//! let address = Address::new("Shanghai", "Shanghai")?;
//! let father = FamilyMember::new("Bob", "Father", Phone::new("13987654321")?);
//! ```

pub mod address;
pub mod constants;
pub mod courses;
pub mod family;
pub mod grades;
pub mod ids;
pub mod students;
pub mod teachers;
pub mod timetable;
pub mod value_types;

// Re-export commonly used types at crate root for convenience
pub use academia_core::ValidationError;

pub use address::Address;
pub use constants::{DayOfWeek, ParseEnumError, Repetition, Sex, Status};
pub use courses::{Course, NewCourse};
pub use family::FamilyMember;
pub use grades::Grade;
pub use ids::{ClassId, CourseId, MajorId, StudentId, TeacherId};
pub use students::{Major, NewStudent, Student};
pub use teachers::{NewTeacher, Teacher};
pub use timetable::TimeSlot;
pub use value_types::{Email, Phone};
