//! Course entity.

use std::collections::BTreeSet;

use academia_core::ValidationError;
use validator::Validate;

use crate::ids::{ClassId, CourseId};
use crate::teachers::Teacher;
use crate::timetable::TimeSlot;

/// Input for creating a new course.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub course_id: CourseId,
    pub name: String,
    pub teacher: Teacher,
    pub location: String,
    pub credit: u8,
    pub class_ids: BTreeSet<ClassId>,
    pub time_slots: Vec<TimeSlot>,
}

/// A course taught by one teacher to a set of classes.
///
/// The teacher is embedded by value. `credit` is in `1..=5` and there is at
/// least one time slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Validate)]
pub struct Course {
    course_id: CourseId,
    name: String,
    teacher: Teacher,
    location: String,
    #[validate(range(min = 1, max = 5, message = "credit must be between 1 and 5"))]
    credit: u8,
    class_ids: BTreeSet<ClassId>,
    time_slots: Vec<TimeSlot>,
}

impl Course {
    pub fn new(new: NewCourse) -> Result<Self, ValidationError> {
        if new.time_slots.is_empty() {
            return Err(ValidationError::constraint(
                "at least one time slot must be provided",
            ));
        }

        let course = Self {
            course_id: new.course_id,
            name: new.name,
            teacher: new.teacher,
            location: new.location,
            credit: new.credit,
            class_ids: new.class_ids,
            time_slots: new.time_slots,
        };
        course.validate()?;
        Ok(course)
    }

    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn teacher(&self) -> &Teacher {
        &self.teacher
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn credit(&self) -> u8 {
        self.credit
    }

    /// Classes that take this course. Unordered; no duplicates.
    pub fn class_ids(&self) -> &BTreeSet<ClassId> {
        &self.class_ids
    }

    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }
}
