//! Course grades and the grade-point scale.

use academia_core::ValidationError;
use validator::Validate;

use crate::courses::Course;

/// Rounds to one decimal place, ties to even.
///
/// Ties are decided on the exact binary value, so `0.35` (stored just below
/// the midpoint) rounds to `0.3` while `4.25` (exact) rounds to `4.2`.
pub fn round1(value: f64) -> f64 {
    let scaled = value * 10.0;
    if (scaled - scaled.trunc()).abs() == 0.5 {
        // the product may have rounded onto the midpoint
        let residual = value.mul_add(10.0, -scaled);
        if residual > 0.0 {
            return scaled.ceil() / 10.0;
        }
        if residual < 0.0 {
            return scaled.floor() / 10.0;
        }
    }
    scaled.round_ties_even() / 10.0
}

/// A score out of 100 earned in a course.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct Grade {
    course: Course,
    #[validate(range(min = 0.0, max = 100.0, message = "score must be between 0 and 100"))]
    score: f64,
}

impl Grade {
    pub fn new(course: Course, score: f64) -> Result<Self, ValidationError> {
        if !score.is_finite() {
            return Err(ValidationError::constraint("score must be a finite number"));
        }

        let grade = Self { course, score };
        grade.validate()?;
        Ok(grade)
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Grade point on a five-point scale: `score / 20`, one decimal.
    pub fn grade_point(&self) -> f64 {
        round1(self.score / 20.0)
    }

    /// Grade point weighted by the course credit.
    pub fn quality_point(&self) -> f64 {
        self.grade_point() * f64::from(self.course.credit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DayOfWeek, Repetition, Sex};
    use crate::courses::NewCourse;
    use crate::ids::{ClassId, CourseId, TeacherId};
    use crate::teachers::{NewTeacher, Teacher};
    use crate::timetable::TimeSlot;
    use crate::value_types::{Email, Phone};
    use chrono::NaiveTime;

    fn course(credit: u8) -> Course {
        Course::new(NewCourse {
            course_id: CourseId::new(1),
            name: "Introduction to CS".to_string(),
            teacher: Teacher::new(NewTeacher {
                teacher_id: TeacherId::new(101),
                name: "Dr. Turing".to_string(),
                sex: Sex::Male,
                department: "Computer Science".to_string(),
                phone: Phone::new("12345678901").unwrap(),
                email: Email::new("turing@example.com").unwrap(),
            }),
            location: "Room 101".to_string(),
            credit,
            class_ids: [ClassId::new(1), ClassId::new(2)].into(),
            time_slots: vec![
                TimeSlot::new(
                    DayOfWeek::Tuesday,
                    NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
                    NaiveTime::from_hms_opt(15, 40, 0).unwrap(),
                    Repetition::Weekly,
                )
                .unwrap(),
            ],
        })
        .unwrap()
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(4.775), 4.8);
        assert_eq!(round1(4.0), 4.0);
        assert_eq!(round1(0.04), 0.0);
    }

    #[test]
    fn test_round1_ties_to_even() {
        assert_eq!(round1(4.25), 4.2);
        assert_eq!(round1(2.25), 2.2);
        assert_eq!(round1(0.25), 0.2);
        assert_eq!(round1(3.75), 3.8);
        assert_eq!(round1(0.35), 0.3);
    }

    #[test]
    fn test_grade_point_on_half_steps() {
        for (score, expected) in [(85.0, 4.2), (45.0, 2.2), (5.0, 0.2), (25.0, 1.2), (65.0, 3.2), (75.0, 3.8)] {
            assert_eq!(Grade::new(course(3), score).unwrap().grade_point(), expected, "score {}", score);
        }
    }

    #[test]
    fn test_grade_point_and_quality_point() {
        let grade = Grade::new(course(3), 95.5).unwrap();
        assert_eq!(grade.grade_point(), 4.8);
        assert!((grade.quality_point() - 14.4).abs() < 1e-9);
    }

    #[test]
    fn test_score_bounds() {
        assert!(Grade::new(course(3), 0.0).is_ok());
        assert!(Grade::new(course(3), 100.0).is_ok());
        assert_eq!(
            Grade::new(course(3), 101.0).unwrap_err(),
            ValidationError::Constraint("score must be between 0 and 100".into())
        );
        assert!(Grade::new(course(3), -1.0).is_err());
    }

    #[test]
    fn test_non_finite_score_rejected() {
        assert!(Grade::new(course(3), f64::NAN).is_err());
        assert!(Grade::new(course(3), f64::INFINITY).is_err());
    }
}
