//! Record key generation.
//!
//! Keys have the shape `{prefix}:{kind}:{id}`, e.g. `academia:student:2024001`.

use academia_models::{CourseId, StudentId, TeacherId};

/// Builds a key under `prefix` from its parts.
pub fn build_key(prefix: &str, parts: &[&str]) -> String {
    format!("{}:{}", prefix, parts.join(":"))
}

/// Keys for student records.
pub mod students {
    use super::*;

    /// Key for a single student by ID.
    pub fn by_id(prefix: &str, student_id: StudentId) -> String {
        build_key(prefix, &["student", &student_id.to_string()])
    }

    /// Prefix shared by every student key.
    pub fn all(prefix: &str) -> String {
        build_key(prefix, &["student", ""])
    }
}

/// Keys for teacher records.
pub mod teachers {
    use super::*;

    pub fn by_id(prefix: &str, teacher_id: TeacherId) -> String {
        build_key(prefix, &["teacher", &teacher_id.to_string()])
    }

    pub fn all(prefix: &str) -> String {
        build_key(prefix, &["teacher", ""])
    }
}

/// Keys for course records.
pub mod courses {
    use super::*;

    pub fn by_id(prefix: &str, course_id: CourseId) -> String {
        build_key(prefix, &["course", &course_id.to_string()])
    }

    pub fn all(prefix: &str) -> String {
        build_key(prefix, &["course", ""])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_key_generation() {
        let key = students::by_id("academia", StudentId::new(2024001));
        assert_eq!(key, "academia:student:2024001");
        assert!(key.starts_with(&students::all("academia")));
    }

    #[test]
    fn test_keys_do_not_share_prefixes() {
        let teacher = teachers::by_id("academia", TeacherId::new(1));
        let course = courses::by_id("academia", CourseId::new(1));
        assert_eq!(teacher, "academia:teacher:1");
        assert_eq!(course, "academia:course:1");
        assert!(!course.starts_with(&teachers::all("academia")));
    }

    #[test]
    fn test_custom_prefix() {
        assert_eq!(
            courses::by_id("school-a", CourseId::new(101)),
            "school-a:course:101"
        );
    }
}
