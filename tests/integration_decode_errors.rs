//! Decoding failures: every rejection is terminal and typed.

mod common;

use academia::codec::CodecError;
use academia::models::{Course, Grade, Student, Teacher};
use academia::{Codec, CodecConfig, EnumMatching, ValidationError};
use common::{sample_course, sample_student, sample_teacher, with_field};
use serde_json::{Value as JsonValue, json};

fn student_json(codec: &Codec) -> JsonValue {
    codec.encoder().encode_entity(&sample_student()).unwrap()
}

fn course_json(codec: &Codec) -> JsonValue {
    codec.encoder().encode_entity(&sample_course()).unwrap()
}

#[test]
fn test_unknown_type_is_rejected() {
    let codec = Codec::standard();
    let err = codec
        .decode(json!({"__type__": "Dormitory", "building": "A"}))
        .unwrap_err();
    assert!(matches!(err, CodecError::UnknownType(ref name) if name == "Dormitory"));
}

#[test]
fn test_malformed_birthdate() {
    let codec = Codec::standard();
    let json = with_field(student_json(&codec), "birthdate", json!("not-a-date"));

    let err = codec.decode_entity::<Student>(json).unwrap_err();
    assert!(matches!(
        err,
        CodecError::MalformedDate { ref field, ref value, .. }
            if field == "birthdate" && value == "not-a-date"
    ));
}

#[test]
fn test_enum_matching_modes() {
    let strict = Codec::standard();
    let json = with_field(student_json(&strict), "status", json!("active"));

    let err = strict.decode_entity::<Student>(json.clone()).unwrap_err();
    assert!(matches!(err, CodecError::InvalidEnumValue { ref value, .. } if value == "active"));

    let lenient = Codec::standard()
        .with_config(CodecConfig::default().with_enum_matching(EnumMatching::CaseInsensitive));
    let student = lenient.decode_entity::<Student>(json).unwrap();
    assert_eq!(student, sample_student());
}

#[test]
fn test_unknown_enum_member() {
    let codec = Codec::standard();
    let json = with_field(student_json(&codec), "status", json!("SUSPENDED"));
    let err = codec.decode_entity::<Student>(json).unwrap_err();
    assert!(matches!(err, CodecError::InvalidEnumValue { .. }));
}

#[test]
fn test_credit_out_of_range() {
    let codec = Codec::standard();
    for credit in [0, 6] {
        let json = with_field(course_json(&codec), "credit", json!(credit));
        let err = codec.decode_entity::<Course>(json).unwrap_err();
        assert!(
            matches!(err, CodecError::Validation(ValidationError::Constraint(_))),
            "credit {} should be rejected, got {:?}",
            credit,
            err
        );
    }
}

#[test]
fn test_course_without_time_slots() {
    let codec = Codec::standard();
    let json = with_field(course_json(&codec), "time_slots", json!([]));
    let err = codec.decode_entity::<Course>(json).unwrap_err();
    assert!(matches!(err, CodecError::Validation(_)));
}

#[test]
fn test_score_out_of_range() {
    let codec = Codec::standard();
    let grade = json!({
        "__type__": "Grade",
        "course": course_json(&codec),
        "score": 95.5,
    });
    assert!(codec.decode_entity::<Grade>(grade.clone()).is_ok());

    for score in [json!(101), json!(-1), json!(100.5)] {
        let json = with_field(grade.clone(), "score", score);
        let err = codec.decode_entity::<Grade>(json).unwrap_err();
        assert!(matches!(err, CodecError::Validation(ValidationError::Constraint(_))));
    }
}

#[test]
fn test_phone_must_have_eleven_digits() {
    let codec = Codec::standard();
    let teacher = codec.encoder().encode_entity(&sample_teacher()).unwrap();

    for phone in ["1380013800", "138001380001", "1380013800a"] {
        let json = with_field(teacher.clone(), "phone", json!(phone));
        let err = codec.decode_entity::<Teacher>(json).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Validation(ValidationError::InvalidPhone(_))
        ));
    }
}

#[test]
fn test_email_needs_domain_suffix() {
    let codec = Codec::standard();
    let json = with_field(student_json(&codec), "email", json!("a@b"));
    let err = codec.decode_entity::<Student>(json).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Validation(ValidationError::InvalidEmail(_))
    ));
}

#[test]
fn test_future_enroll_year() {
    let codec = Codec::standard();
    let json = with_field(student_json(&codec), "enroll_year", json!(9999));
    let err = codec.decode_entity::<Student>(json).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Validation(ValidationError::Constraint(_))
    ));
}

#[test]
fn test_nested_failure_aborts_whole_decode() {
    let codec = Codec::standard();
    let mut json = student_json(&codec);
    json["grades"][0]["course"]["teacher"]["email"] = json!("not-an-email");

    let err = codec.decode_entity::<Student>(json).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Validation(ValidationError::InvalidEmail(_))
    ));
}

#[test]
fn test_missing_and_unknown_fields() {
    let codec = Codec::standard();

    let mut json = student_json(&codec);
    json.as_object_mut().unwrap().remove("name");
    let err = codec.decode_entity::<Student>(json).unwrap_err();
    assert!(matches!(err, CodecError::MissingField { field: "name", .. }));

    let json = with_field(student_json(&codec), "nickname", json!("Al"));
    let err = codec.decode_entity::<Student>(json).unwrap_err();
    assert!(matches!(err, CodecError::UnknownField { ref field, .. } if field == "nickname"));
}
