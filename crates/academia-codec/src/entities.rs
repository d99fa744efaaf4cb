//! Wire schemas for every registered entity.
//!
//! Field names here are the wire contract. `Teacher.courses` is a
//! non-authoritative back-link and is deliberately absent.

use academia_models::{
    Address, Course, FamilyMember, Grade, NewCourse, NewStudent, NewTeacher, Student, Teacher,
    TimeSlot,
};

use crate::error::Result;
use crate::fields::{FieldSet, FromValue, ToValue, mismatch};
use crate::schema::{FieldKind, FieldSchema, Primitive, Tagged, ValueObjectKind};
use crate::value::{EntityKind, EnumKind, Record, Value};

const INT: FieldKind = FieldKind::Primitive(Primitive::Int);
const FLOAT: FieldKind = FieldKind::Primitive(Primitive::Float);
const TEXT: FieldKind = FieldKind::Primitive(Primitive::Text);
const PHONE: FieldKind = FieldKind::ValueObject(ValueObjectKind::Phone);
const EMAIL: FieldKind = FieldKind::ValueObject(ValueObjectKind::Email);

/// Implements the `Record` conversions and field projections for an entity.
macro_rules! record_variant {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Record {
                fn from(entity: $ty) -> Self {
                    Record::$ty(entity)
                }
            }

            impl TryFrom<Record> for $ty {
                type Error = Record;

                fn try_from(record: Record) -> std::result::Result<Self, Record> {
                    match record {
                        Record::$ty(entity) => Ok(entity),
                        other => Err(other),
                    }
                }
            }

            impl FromValue for $ty {
                fn from_value(value: Value, field: &str) -> Result<Self> {
                    match value {
                        Value::Record(record) => {
                            $ty::try_from(*record).map_err(|other| {
                                mismatch(field, stringify!($ty), &Value::from(other))
                            })
                        }
                        other => Err(mismatch(field, stringify!($ty), &other)),
                    }
                }
            }

            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::from(Record::from(self.clone()))
                }
            }
        )+
    };
}

record_variant!(Address, FamilyMember, TimeSlot, Teacher, Course, Grade, Student);

impl Record {
    /// Wire fields of the wrapped entity.
    pub fn fields(&self) -> Vec<(&'static str, Value)> {
        match self {
            Record::Address(e) => e.to_fields(),
            Record::FamilyMember(e) => e.to_fields(),
            Record::TimeSlot(e) => e.to_fields(),
            Record::Teacher(e) => e.to_fields(),
            Record::Course(e) => e.to_fields(),
            Record::Grade(e) => e.to_fields(),
            Record::Student(e) => e.to_fields(),
        }
    }
}

impl Tagged for Address {
    const KIND: EntityKind = EntityKind::Address;
    const FIELDS: &'static [FieldSchema] = &[
        FieldSchema::required("province", TEXT),
        FieldSchema::required("city", TEXT),
    ];

    fn to_fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("province", self.province().to_value()),
            ("city", self.city().to_value()),
        ]
    }

    fn from_fields(fields: &mut FieldSet) -> Result<Self> {
        let province: String = fields.take("province")?;
        let city: String = fields.take("city")?;
        Ok(Address::new(province, city)?)
    }
}

impl Tagged for FamilyMember {
    const KIND: EntityKind = EntityKind::FamilyMember;
    const FIELDS: &'static [FieldSchema] = &[
        FieldSchema::required("name", TEXT),
        FieldSchema::required("relationship", TEXT),
        FieldSchema::required("phone", PHONE),
    ];

    fn to_fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("name", self.name().to_value()),
            ("relationship", self.relationship().to_value()),
            ("phone", self.phone().to_value()),
        ]
    }

    fn from_fields(fields: &mut FieldSet) -> Result<Self> {
        Ok(FamilyMember::new(
            fields.take::<String>("name")?,
            fields.take::<String>("relationship")?,
            fields.take("phone")?,
        ))
    }
}

impl Tagged for TimeSlot {
    const KIND: EntityKind = EntityKind::TimeSlot;
    const FIELDS: &'static [FieldSchema] = &[
        FieldSchema::required("day", FieldKind::Enum(EnumKind::DayOfWeek)),
        FieldSchema::required("start_time", FieldKind::Time),
        FieldSchema::required("end_time", FieldKind::Time),
        FieldSchema::required("repetition", FieldKind::Enum(EnumKind::Repetition)),
    ];

    fn to_fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("day", self.day().to_value()),
            ("start_time", self.start_time().to_value()),
            ("end_time", self.end_time().to_value()),
            ("repetition", self.repetition().to_value()),
        ]
    }

    fn from_fields(fields: &mut FieldSet) -> Result<Self> {
        Ok(TimeSlot::new(
            fields.take("day")?,
            fields.take("start_time")?,
            fields.take("end_time")?,
            fields.take("repetition")?,
        )?)
    }
}

impl Tagged for Teacher {
    const KIND: EntityKind = EntityKind::Teacher;
    const FIELDS: &'static [FieldSchema] = &[
        FieldSchema::required("teacher_id", INT),
        FieldSchema::required("name", TEXT),
        FieldSchema::required("sex", FieldKind::Enum(EnumKind::Sex)),
        FieldSchema::required("department", TEXT),
        FieldSchema::required("phone", PHONE),
        FieldSchema::required("email", EMAIL),
    ];

    fn to_fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("teacher_id", self.teacher_id().to_value()),
            ("name", self.name().to_value()),
            ("sex", self.sex().to_value()),
            ("department", self.department().to_value()),
            ("phone", self.phone().to_value()),
            ("email", self.email().to_value()),
        ]
    }

    fn from_fields(fields: &mut FieldSet) -> Result<Self> {
        Ok(Teacher::new(NewTeacher {
            teacher_id: fields.take("teacher_id")?,
            name: fields.take("name")?,
            sex: fields.take("sex")?,
            department: fields.take("department")?,
            phone: fields.take("phone")?,
            email: fields.take("email")?,
        }))
    }
}

impl Tagged for Course {
    const KIND: EntityKind = EntityKind::Course;
    const FIELDS: &'static [FieldSchema] = &[
        FieldSchema::required("course_id", INT),
        FieldSchema::required("name", TEXT),
        FieldSchema::required("teacher", FieldKind::Nested(EntityKind::Teacher)),
        FieldSchema::required("location", TEXT),
        FieldSchema::required("credit", INT),
        FieldSchema::required("class_id", FieldKind::Set(&INT)),
        FieldSchema::required(
            "time_slots",
            FieldKind::List(&FieldKind::Nested(EntityKind::TimeSlot)),
        ),
    ];

    fn to_fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("course_id", self.course_id().to_value()),
            ("name", self.name().to_value()),
            ("teacher", self.teacher().to_value()),
            ("location", self.location().to_value()),
            ("credit", self.credit().to_value()),
            ("class_id", self.class_ids().to_value()),
            ("time_slots", self.time_slots().to_value()),
        ]
    }

    fn from_fields(fields: &mut FieldSet) -> Result<Self> {
        Ok(Course::new(NewCourse {
            course_id: fields.take("course_id")?,
            name: fields.take("name")?,
            teacher: fields.take("teacher")?,
            location: fields.take("location")?,
            credit: fields.take("credit")?,
            class_ids: fields.take("class_id")?,
            time_slots: fields.take("time_slots")?,
        })?)
    }
}

impl Tagged for Grade {
    const KIND: EntityKind = EntityKind::Grade;
    const FIELDS: &'static [FieldSchema] = &[
        FieldSchema::required("course", FieldKind::Nested(EntityKind::Course)),
        FieldSchema::required("score", FLOAT),
    ];

    fn to_fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("course", self.course().to_value()),
            ("score", self.score().to_value()),
        ]
    }

    fn from_fields(fields: &mut FieldSet) -> Result<Self> {
        Ok(Grade::new(fields.take("course")?, fields.take("score")?)?)
    }
}

impl Tagged for Student {
    const KIND: EntityKind = EntityKind::Student;
    const FIELDS: &'static [FieldSchema] = &[
        FieldSchema::required("student_id", INT),
        FieldSchema::required("name", TEXT),
        FieldSchema::required("sex", FieldKind::Enum(EnumKind::Sex)),
        FieldSchema::required("birthdate", FieldKind::Date),
        FieldSchema::required("enroll_year", INT),
        FieldSchema::required("major", FieldKind::Tuple(&[INT, TEXT])),
        FieldSchema::required("class_id", INT),
        FieldSchema::required("phone", PHONE),
        FieldSchema::required("email", EMAIL),
        FieldSchema::required("address", FieldKind::Nested(EntityKind::Address)),
        FieldSchema::required(
            "family_members",
            FieldKind::List(&FieldKind::Nested(EntityKind::FamilyMember)),
        ),
        FieldSchema::required("status", FieldKind::Enum(EnumKind::Status)),
        FieldSchema::optional(
            "grades",
            FieldKind::List(&FieldKind::Nested(EntityKind::Grade)),
        ),
    ];

    fn to_fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("student_id", self.student_id().to_value()),
            ("name", self.name().to_value()),
            ("sex", self.sex().to_value()),
            ("birthdate", self.birthdate().to_value()),
            ("enroll_year", self.enroll_year().to_value()),
            ("major", self.major().to_value()),
            ("class_id", self.class_id().to_value()),
            ("phone", self.phone().to_value()),
            ("email", self.email().to_value()),
            ("address", self.address().to_value()),
            ("family_members", self.family_members().to_value()),
            ("status", self.status().to_value()),
            ("grades", self.grades().to_value()),
        ]
    }

    fn from_fields(fields: &mut FieldSet) -> Result<Self> {
        Ok(Student::new(NewStudent {
            student_id: fields.take("student_id")?,
            name: fields.take("name")?,
            sex: fields.take("sex")?,
            birthdate: fields.take("birthdate")?,
            enroll_year: fields.take("enroll_year")?,
            major: fields.take("major")?,
            class_id: fields.take("class_id")?,
            phone: fields.take("phone")?,
            email: fields.take("email")?,
            address: fields.take("address")?,
            family_members: fields.take("family_members")?,
            status: fields.take("status")?,
            grades: fields.take_or_default("grades")?,
        })?)
    }
}
