//! Sample record generation.
//!
//! Generates teachers, one course per teacher, and students graded in
//! those courses. Every record goes through its validating constructor.

pub mod models;
pub mod staff;
pub mod students;

use std::time::Instant;

use academia_core::ValidationError;
use academia_models::{Course, Student, Teacher};
use tracing::info;

pub use models::SampleConfig;
pub use staff::{generate_courses, generate_teachers};
pub use students::generate_students;

/// A generated set of related records.
#[derive(Debug, Clone)]
pub struct SampleSet {
    pub teachers: Vec<Teacher>,
    pub courses: Vec<Course>,
    pub students: Vec<Student>,
}

/// Generates a full sample set, linking each teacher to its courses.
pub fn generate(config: &SampleConfig) -> Result<SampleSet, ValidationError> {
    let start_time = Instant::now();

    let mut teachers = generate_teachers(config.teachers)?;
    let courses = generate_courses(&teachers, 3)?;
    for teacher in &mut teachers {
        teacher.link_courses(&courses);
    }
    let students = generate_students(config.students, &courses, config.effective_grades())?;

    info!(
        teachers = teachers.len(),
        courses = courses.len(),
        students = students.len(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Generated sample records"
    );

    Ok(SampleSet {
        teachers,
        courses,
        students,
    })
}
