//! Student generation.

use academia_core::{ValidationError, clock};
use academia_models::constants::PROVINCES;
use academia_models::{
    Address, ClassId, Course, Email, FamilyMember, Grade, Major, MajorId, NewStudent, Sex, Status,
    Student, StudentId,
};
use chrono::{Datelike, NaiveDate};
use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::name::en::*;
use rayon::prelude::*;

use super::staff::{phone, slug};

const MAJORS: [(i64, &str); 4] = [
    (1, "Computer Science"),
    (2, "Mathematics"),
    (3, "Physics"),
    (4, "Literature"),
];

const RELATIONSHIPS: [&str; 3] = ["Father", "Mother", "Guardian"];

fn birthdate(enroll_year: i32) -> Result<NaiveDate, ValidationError> {
    let year = enroll_year - (17..20).fake::<i32>();
    NaiveDate::from_ymd_opt(year, (1..13).fake::<u32>(), (1..29).fake::<u32>())
        .ok_or_else(|| ValidationError::constraint("generated birthdate is out of range"))
}

fn grades(courses: &[Course], count: usize, offset: usize) -> Result<Vec<Grade>, ValidationError> {
    (0..count.min(courses.len()))
        .map(|n| {
            let course = courses[(offset + n) % courses.len()].clone();
            let score = f64::from((400..1001).fake::<u32>()) / 10.0;
            Grade::new(course, score)
        })
        .collect()
}

/// Generates `count` students with ids starting at `{current_year}001`,
/// each graded in up to `grades_per_student` of `courses`.
pub fn generate_students(
    count: usize,
    courses: &[Course],
    grades_per_student: usize,
) -> Result<Vec<Student>, ValidationError> {
    let current_year = clock::today().year();
    let id_base = i64::from(current_year) * 1000;

    (0..count)
        .into_par_iter()
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let parent_name: String = FirstName().fake();
            let enroll_year = current_year - (0..6).fake::<i32>();
            let (major_id, major_name) = MAJORS[idx % MAJORS.len()];
            let province = PROVINCES[(0..PROVINCES.len()).fake::<usize>()];
            let city: String = CityName().fake();
            let sex = Sex::ALL[(0..Sex::ALL.len()).fake::<usize>()];

            Student::new(NewStudent {
                student_id: StudentId::new(id_base + idx as i64 + 1),
                name: format!("{} {}", first_name, last_name),
                sex,
                birthdate: birthdate(enroll_year)?,
                enroll_year,
                major: Major::new(MajorId::new(major_id), major_name),
                class_id: ClassId::new((idx % 3) as i64 + 1),
                phone: phone(39, idx)?,
                email: Email::new(format!(
                    "{}.{}.s{}@example.com",
                    slug(&first_name),
                    slug(&last_name),
                    idx
                ))?,
                address: Address::new(province, city)?,
                family_members: vec![FamilyMember::new(
                    format!("{} {}", parent_name, last_name),
                    RELATIONSHIPS[idx % RELATIONSHIPS.len()],
                    phone(59, idx)?,
                )],
                status: if enroll_year + 4 <= current_year {
                    Status::Graduated
                } else {
                    Status::Active
                },
                grades: grades(courses, grades_per_student, idx)?,
            })
        })
        .collect()
}
