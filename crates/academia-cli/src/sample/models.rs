//! Configuration for sample data generation.

/// How much sample data to generate.
#[derive(Clone, Debug)]
pub struct SampleConfig {
    pub students: usize,
    pub teachers: usize,
    /// Upper bound; a student never has more grades than there are courses.
    pub grades_per_student: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            students: 10,
            teachers: 4,
            grades_per_student: 3,
        }
    }
}

impl SampleConfig {
    /// Creates a configuration for `students` students with default staffing.
    pub fn new(students: usize) -> Self {
        Self {
            students,
            ..Default::default()
        }
    }

    pub fn with_teachers(mut self, teachers: usize) -> Self {
        self.teachers = teachers;
        self
    }

    pub fn with_grades_per_student(mut self, grades: usize) -> Self {
        self.grades_per_student = grades;
        self
    }

    /// Grades each student actually receives.
    pub fn effective_grades(&self) -> usize {
        // one course per teacher
        self.grades_per_student.min(self.teachers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = SampleConfig::new(50).with_teachers(2).with_grades_per_student(5);
        assert_eq!(config.students, 50);
        assert_eq!(config.effective_grades(), 2);
    }
}
