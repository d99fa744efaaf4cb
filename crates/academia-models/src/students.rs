//! Student aggregate root and its derived academic metrics.
//!
//! Students are built from a [`NewStudent`] input, validated against the
//! current date:
//!
//! - `enroll_year` is not in the future
//! - the birth year is between 1900 and the current year
//!
//! `age` and `gpa` are computed on demand and never stored.

use academia_core::{ValidationError, clock};
use chrono::{Datelike, NaiveDate};

use crate::address::Address;
use crate::constants::{Sex, Status};
use crate::family::FamilyMember;
use crate::grades::{Grade, round1};
use crate::ids::{ClassId, MajorId, StudentId};
use crate::value_types::{Email, Phone};

/// Earliest accepted birth year.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// A field of study, identified by id and display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Major {
    pub id: MajorId,
    pub name: String,
}

impl Major {
    pub fn new(id: MajorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Input for creating a new student.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub student_id: StudentId,
    pub name: String,
    pub sex: Sex,
    pub birthdate: NaiveDate,
    pub enroll_year: i32,
    pub major: Major,
    pub class_id: ClassId,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub family_members: Vec<FamilyMember>,
    pub status: Status,
    pub grades: Vec<Grade>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    student_id: StudentId,
    name: String,
    sex: Sex,
    birthdate: NaiveDate,
    enroll_year: i32,
    major: Major,
    class_id: ClassId,
    phone: Phone,
    email: Email,
    address: Address,
    family_members: Vec<FamilyMember>,
    status: Status,
    grades: Vec<Grade>,
}

impl Student {
    /// Creates a student, validating year bounds against today's date.
    pub fn new(new: NewStudent) -> Result<Self, ValidationError> {
        Self::new_as_of(new, clock::today())
    }

    /// Creates a student, validating year bounds against `today`.
    pub fn new_as_of(new: NewStudent, today: NaiveDate) -> Result<Self, ValidationError> {
        let current_year = today.year();

        if new.enroll_year > current_year {
            return Err(ValidationError::constraint(format!(
                "enroll year {} cannot be in the future",
                new.enroll_year
            )));
        }

        let birth_year = new.birthdate.year();
        if !(MIN_BIRTH_YEAR..=current_year).contains(&birth_year) {
            return Err(ValidationError::constraint(format!(
                "birth year {} must be between {} and {}",
                birth_year, MIN_BIRTH_YEAR, current_year
            )));
        }

        Ok(Self {
            student_id: new.student_id,
            name: new.name,
            sex: new.sex,
            birthdate: new.birthdate,
            enroll_year: new.enroll_year,
            major: new.major,
            class_id: new.class_id,
            phone: new.phone,
            email: new.email,
            address: new.address,
            family_members: new.family_members,
            status: new.status,
            grades: new.grades,
        })
    }

    pub fn student_id(&self) -> StudentId {
        self.student_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn birthdate(&self) -> NaiveDate {
        self.birthdate
    }

    pub fn enroll_year(&self) -> i32 {
        self.enroll_year
    }

    pub fn major(&self) -> &Major {
        &self.major
    }

    pub fn class_id(&self) -> ClassId {
        self.class_id
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn family_members(&self) -> &[FamilyMember] {
        &self.family_members
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Age in whole years as of today.
    pub fn age(&self) -> i32 {
        self.age_on(clock::today())
    }

    /// Age in whole years as of `today`.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let had_birthday =
            (today.month(), today.day()) >= (self.birthdate.month(), self.birthdate.day());
        today.year() - self.birthdate.year() - i32::from(!had_birthday)
    }

    /// Credit-weighted grade point average, one decimal.
    ///
    /// Zero when the student has no grades.
    pub fn gpa(&self) -> f64 {
        let (quality_points, credits) = self
            .grades
            .iter()
            .fold((0.0, 0.0), |(quality, credits), grade| {
                (
                    quality + grade.quality_point(),
                    credits + f64::from(grade.course().credit()),
                )
            });

        if credits > 0.0 {
            round1(quality_points / credits)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn draft(birthdate: NaiveDate, enroll_year: i32) -> NewStudent {
        NewStudent {
            student_id: StudentId::new(2024001),
            name: "Alice".to_string(),
            sex: Sex::Female,
            birthdate,
            enroll_year,
            major: Major::new(MajorId::new(1), "Computer Science"),
            class_id: ClassId::new(1),
            phone: Phone::new("13912345678").unwrap(),
            email: Email::new("alice@example.com").unwrap(),
            address: Address::new("Shanghai", "Shanghai").unwrap(),
            family_members: vec![FamilyMember::new(
                "Bob",
                "Father",
                Phone::new("13987654321").unwrap(),
            )],
            status: Status::Active,
            grades: Vec::new(),
        }
    }

    #[test]
    fn test_valid_student() {
        let student = Student::new_as_of(draft(date(2005, 5, 20), 2024), date(2026, 3, 1)).unwrap();
        assert_eq!(student.name(), "Alice");
        assert_eq!(student.family_members().len(), 1);
        assert_eq!(student.major().name, "Computer Science");
    }

    #[test]
    fn test_enroll_year_in_future_fails() {
        let err = Student::new_as_of(draft(date(2005, 5, 20), 2027), date(2026, 3, 1)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Constraint("enroll year 2027 cannot be in the future".into())
        );
    }

    #[test]
    fn test_enroll_year_next_year_fails_against_clock() {
        let next_year = clock::current_year() + 1;
        assert!(Student::new(draft(date(2005, 5, 20), next_year)).is_err());
    }

    #[test]
    fn test_birth_year_bounds() {
        let today = date(2026, 3, 1);
        assert!(Student::new_as_of(draft(date(1900, 1, 1), 2024), today).is_ok());
        assert!(Student::new_as_of(draft(date(1899, 12, 31), 2024), today).is_err());
        assert!(Student::new_as_of(draft(date(2027, 1, 1), 2024), today).is_err());
    }

    #[test]
    fn test_age_on() {
        let student = Student::new_as_of(draft(date(2005, 5, 20), 2024), date(2026, 3, 1)).unwrap();
        assert_eq!(student.age_on(date(2026, 5, 19)), 20);
        assert_eq!(student.age_on(date(2026, 5, 20)), 21);
        assert_eq!(student.age_on(date(2026, 12, 31)), 21);
    }

    #[test]
    fn test_gpa_without_grades_is_zero() {
        let student = Student::new_as_of(draft(date(2005, 5, 20), 2024), date(2026, 3, 1)).unwrap();
        assert_eq!(student.gpa(), 0.0);
    }
}
