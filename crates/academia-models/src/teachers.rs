//! Teacher aggregate root.
//!
//! A teacher's `courses` set is a non-authoritative back-link: it holds only
//! course ids, is filled in by application code after the courses exist, and
//! takes no part in equality, hashing or the wire format. The owning edge
//! runs the other way, from [`Course`] to its embedded [`Teacher`].

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use crate::constants::Sex;
use crate::courses::Course;
use crate::ids::{CourseId, TeacherId};
use crate::value_types::{Email, Phone};

/// Input for creating a new teacher.
#[derive(Debug, Clone)]
pub struct NewTeacher {
    pub teacher_id: TeacherId,
    pub name: String,
    pub sex: Sex,
    pub department: String,
    pub phone: Phone,
    pub email: Email,
}

#[derive(Debug, Clone)]
pub struct Teacher {
    teacher_id: TeacherId,
    name: String,
    sex: Sex,
    department: String,
    phone: Phone,
    email: Email,
    courses: BTreeSet<CourseId>,
}

impl Teacher {
    pub fn new(new: NewTeacher) -> Self {
        Self {
            teacher_id: new.teacher_id,
            name: new.name,
            sex: new.sex,
            department: new.department,
            phone: new.phone,
            email: new.email,
            courses: BTreeSet::new(),
        }
    }

    pub fn teacher_id(&self) -> TeacherId {
        self.teacher_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Ids of the courses this teacher is known to teach.
    pub fn courses(&self) -> &BTreeSet<CourseId> {
        &self.courses
    }

    /// Records that this teacher teaches `course_id`.
    ///
    /// Returns `false` if the link was already present.
    pub fn link_course(&mut self, course_id: CourseId) -> bool {
        self.courses.insert(course_id)
    }

    /// Links every course in `courses` whose embedded teacher has this
    /// teacher's id. Returns the number of new links.
    pub fn link_courses<'a>(&mut self, courses: impl IntoIterator<Item = &'a Course>) -> usize {
        let teacher_id = self.teacher_id;
        courses
            .into_iter()
            .filter(|course| course.teacher().teacher_id() == teacher_id)
            .map(|course| self.link_course(course.course_id()))
            .filter(|inserted| *inserted)
            .count()
    }
}

impl PartialEq for Teacher {
    fn eq(&self, other: &Self) -> bool {
        self.teacher_id == other.teacher_id
            && self.name == other.name
            && self.sex == other.sex
            && self.department == other.department
            && self.phone == other.phone
            && self.email == other.email
    }
}

impl Eq for Teacher {}

impl Hash for Teacher {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.teacher_id.hash(state);
        self.name.hash(state);
        self.sex.hash(state);
        self.department.hash(state);
        self.phone.hash(state);
        self.email.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DayOfWeek, Repetition};
    use crate::courses::NewCourse;
    use crate::ids::ClassId;
    use crate::timetable::TimeSlot;
    use chrono::NaiveTime;

    fn teacher(id: i64) -> Teacher {
        Teacher::new(NewTeacher {
            teacher_id: TeacherId::new(id),
            name: "Dr. Smith".to_string(),
            sex: Sex::Male,
            department: "Computer Science".to_string(),
            phone: Phone::new("13800138000").unwrap(),
            email: Email::new("smith@example.com").unwrap(),
        })
    }

    fn course(id: i64, taught_by: Teacher) -> Course {
        let slot = TimeSlot::new(
            DayOfWeek::Monday,
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            Repetition::Weekly,
        )
        .unwrap();
        Course::new(NewCourse {
            course_id: CourseId::new(id),
            name: "Course".to_string(),
            teacher: taught_by,
            location: "Room 101".to_string(),
            credit: 3,
            class_ids: [ClassId::new(1)].into(),
            time_slots: vec![slot],
        })
        .unwrap()
    }

    #[test]
    fn test_courses_excluded_from_equality() {
        let mut linked = teacher(1);
        linked.link_course(CourseId::new(101));
        assert_eq!(linked, teacher(1));
        assert_ne!(teacher(1), teacher(2));
    }

    #[test]
    fn test_courses_excluded_from_hash() {
        use std::collections::HashSet;
        let mut linked = teacher(1);
        linked.link_course(CourseId::new(101));

        let mut set = HashSet::new();
        set.insert(linked);
        set.insert(teacher(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_link_course_is_idempotent() {
        let mut t = teacher(1);
        assert!(t.link_course(CourseId::new(101)));
        assert!(!t.link_course(CourseId::new(101)));
        assert_eq!(t.courses().len(), 1);
    }

    #[test]
    fn test_link_courses_matches_by_teacher_id() {
        let courses = vec![course(101, teacher(1)), course(102, teacher(2)), course(103, teacher(1))];
        let mut t = teacher(1);
        assert_eq!(t.link_courses(&courses), 2);
        assert_eq!(
            t.courses().iter().copied().collect::<Vec<_>>(),
            vec![CourseId::new(101), CourseId::new(103)]
        );
        assert_eq!(t.link_courses(&courses), 0);
    }
}
