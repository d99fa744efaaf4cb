//! Teacher and course generation.

use std::collections::BTreeSet;

use academia_core::ValidationError;
use academia_models::{
    ClassId, Course, CourseId, DayOfWeek, Email, NewCourse, NewTeacher, Phone, Repetition, Sex,
    Teacher, TeacherId, TimeSlot,
};
use chrono::NaiveTime;
use fake::Fake;
use fake::faker::name::en::*;
use rayon::prelude::*;

const DEPARTMENTS: [&str; 5] = [
    "Computer Science",
    "Mathematics",
    "Physics",
    "Literature",
    "History",
];

const SUBJECTS: [&str; 8] = [
    "Programming",
    "Data Structures",
    "Calculus",
    "Linear Algebra",
    "Mechanics",
    "Poetry",
    "World History",
    "Databases",
];

/// Lowercase ASCII letters and digits only, so the result is a valid
/// email local part.
pub(crate) fn slug(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A valid 11-digit phone number unique per `(prefix, index)`.
pub(crate) fn phone(prefix: u8, index: usize) -> Result<Phone, ValidationError> {
    Phone::new(format!("1{:02}{:08}", prefix % 100, index % 100_000_000))
}

fn random_sex() -> Sex {
    Sex::ALL[(0..Sex::ALL.len()).fake::<usize>()]
}

/// Generates `count` teachers with ids starting at 1.
pub fn generate_teachers(count: usize) -> Result<Vec<Teacher>, ValidationError> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let email = Email::new(format!(
                "{}.{}.t{}@example.com",
                slug(&first_name),
                slug(&last_name),
                idx
            ))?;

            Ok(Teacher::new(NewTeacher {
                teacher_id: TeacherId::new(idx as i64 + 1),
                name: format!("{} {}", first_name, last_name),
                sex: random_sex(),
                department: DEPARTMENTS[idx % DEPARTMENTS.len()].to_string(),
                phone: phone(38, idx)?,
                email,
            }))
        })
        .collect()
}

fn time_slot(day: DayOfWeek) -> Result<TimeSlot, ValidationError> {
    let start_hour: u32 = (8..18).fake();
    let hours: u32 = (1..3).fake();
    let start = NaiveTime::from_hms_opt(start_hour, 0, 0)
        .ok_or_else(|| ValidationError::constraint("invalid start hour"))?;
    let end = NaiveTime::from_hms_opt(start_hour + hours, 0, 0)
        .ok_or_else(|| ValidationError::constraint("invalid end hour"))?;
    let repetition = Repetition::ALL[(0..Repetition::ALL.len()).fake::<usize>()];
    TimeSlot::new(day, start, end, repetition)
}

/// Generates one course per teacher, with ids starting at 101.
pub fn generate_courses(teachers: &[Teacher], classes: usize) -> Result<Vec<Course>, ValidationError> {
    teachers
        .par_iter()
        .enumerate()
        .map(|(idx, teacher)| {
            let slot_count: usize = (1..3).fake();
            let time_slots = (0..slot_count)
                .map(|n| time_slot(DayOfWeek::ALL[(idx + n * 2) % 5]))
                .collect::<Result<Vec<_>, _>>()?;
            let class_ids: BTreeSet<ClassId> = (1..=classes.max(1))
                .filter(|class| (class + idx) % 2 == 0 || classes <= 1)
                .map(|class| ClassId::new(class as i64))
                .collect();

            Course::new(NewCourse {
                course_id: CourseId::new(101 + idx as i64),
                name: SUBJECTS[idx % SUBJECTS.len()].to_string(),
                teacher: teacher.clone(),
                location: format!("Room {}{:02}", (idx % 4) + 1, (1..40).fake::<u8>()),
                credit: (1..6).fake::<u8>(),
                class_ids,
                time_slots,
            })
        })
        .collect()
}
