//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

use academia::models::{
    Address, ClassId, Course, CourseId, DayOfWeek, Email, FamilyMember, Grade, Major, MajorId,
    NewCourse, NewStudent, NewTeacher, Phone, Repetition, Sex, Status, Student, StudentId, Teacher,
    TeacherId, TimeSlot,
};
use chrono::{NaiveDate, NaiveTime};
use serde_json::Value as JsonValue;

pub fn phone(digits: &str) -> Phone {
    Phone::new(digits).expect("fixture phone is valid")
}

pub fn email(address: &str) -> Email {
    Email::new(address).expect("fixture email is valid")
}

pub fn sample_teacher() -> Teacher {
    Teacher::new(NewTeacher {
        teacher_id: TeacherId::new(1),
        name: "Dr. Smith".to_string(),
        sex: Sex::Male,
        department: "Computer Science".to_string(),
        phone: phone("13800138000"),
        email: email("smith@example.com"),
    })
}

pub fn monday_morning() -> TimeSlot {
    TimeSlot::new(
        DayOfWeek::Monday,
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
        Repetition::Weekly,
    )
    .expect("fixture slot is valid")
}

pub fn new_course() -> NewCourse {
    NewCourse {
        course_id: CourseId::new(101),
        name: "Programming".to_string(),
        teacher: sample_teacher(),
        location: "Room 101".to_string(),
        credit: 3,
        class_ids: BTreeSet::from([ClassId::new(1)]),
        time_slots: vec![monday_morning()],
    }
}

pub fn sample_course() -> Course {
    Course::new(new_course()).expect("fixture course is valid")
}

pub fn new_student() -> NewStudent {
    NewStudent {
        student_id: StudentId::new(2024001),
        name: "Alice".to_string(),
        sex: Sex::Female,
        birthdate: NaiveDate::from_ymd_opt(2005, 5, 20).unwrap(),
        enroll_year: 2024,
        major: Major::new(MajorId::new(1), "Computer Science"),
        class_id: ClassId::new(1),
        phone: phone("13912345678"),
        email: email("alice@example.com"),
        address: Address::new("Shanghai", "Shanghai").expect("fixture address is valid"),
        family_members: vec![FamilyMember::new("Bob", "Father", phone("13987654321"))],
        status: Status::Active,
        grades: vec![Grade::new(sample_course(), 95.5).expect("fixture grade is valid")],
    }
}

pub fn sample_student() -> Student {
    Student::new(new_student()).expect("fixture student is valid")
}

/// Replaces `field` in a tagged JSON object.
pub fn with_field(mut json: JsonValue, field: &str, value: JsonValue) -> JsonValue {
    json.as_object_mut()
        .expect("tagged JSON is an object")
        .insert(field.to_string(), value);
    json
}
