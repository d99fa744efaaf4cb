//! The in-memory value model the codec maps to and from JSON.
//!
//! [`Value`] is a closed union of everything the codec can project: JSON
//! primitives, dates and times, enum members, contact value objects,
//! sequences, sets, untyped maps and registered entities ([`Record`]).
//! [`EntityKind`] is the closed set of entity variants; its canonical name
//! is the discriminator written on the wire.

use std::collections::BTreeMap;
use std::fmt;

use academia_config::EnumMatching;
use academia_models::{
    Address, Course, DayOfWeek, Email, FamilyMember, Grade, Phone, Repetition, Sex, Status,
    Student, Teacher, TimeSlot,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Every entity type that can carry a discriminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Address,
    FamilyMember,
    TimeSlot,
    Teacher,
    Course,
    Grade,
    Student,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Address,
        EntityKind::FamilyMember,
        EntityKind::TimeSlot,
        EntityKind::Teacher,
        EntityKind::Course,
        EntityKind::Grade,
        EntityKind::Student,
    ];

    /// The canonical type name used as the wire discriminator.
    pub const fn name(self) -> &'static str {
        match self {
            EntityKind::Address => "Address",
            EntityKind::FamilyMember => "FamilyMember",
            EntityKind::TimeSlot => "TimeSlot",
            EntityKind::Teacher => "Teacher",
            EntityKind::Course => "Course",
            EntityKind::Grade => "Grade",
            EntityKind::Student => "Student",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enumerations a field can be declared as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnumKind {
    DayOfWeek,
    Repetition,
    Sex,
    Status,
}

impl EnumKind {
    pub const fn name(self) -> &'static str {
        match self {
            EnumKind::DayOfWeek => "DayOfWeek",
            EnumKind::Repetition => "Repetition",
            EnumKind::Sex => "Sex",
            EnumKind::Status => "Status",
        }
    }

    /// Resolves stored text to a member of this enumeration.
    pub fn parse(self, text: &str, matching: EnumMatching) -> Option<EnumValue> {
        let normalized;
        let name = match matching {
            EnumMatching::Strict => text,
            EnumMatching::CaseInsensitive => {
                normalized = text.to_ascii_uppercase();
                normalized.as_str()
            }
        };

        match self {
            EnumKind::DayOfWeek => DayOfWeek::from_name(name).map(EnumValue::DayOfWeek),
            EnumKind::Repetition => Repetition::from_name(name).map(EnumValue::Repetition),
            EnumKind::Sex => Sex::from_name(name).map(EnumValue::Sex),
            EnumKind::Status => Status::from_name(name).map(EnumValue::Status),
        }
    }
}

/// A member of one of the declared enumerations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnumValue {
    DayOfWeek(DayOfWeek),
    Repetition(Repetition),
    Sex(Sex),
    Status(Status),
}

impl EnumValue {
    pub fn kind(&self) -> EnumKind {
        match self {
            EnumValue::DayOfWeek(_) => EnumKind::DayOfWeek,
            EnumValue::Repetition(_) => EnumKind::Repetition,
            EnumValue::Sex(_) => EnumKind::Sex,
            EnumValue::Status(_) => EnumKind::Status,
        }
    }

    /// The stored SCREAMING_SNAKE_CASE name.
    pub fn name(&self) -> &'static str {
        match self {
            EnumValue::DayOfWeek(v) => v.name(),
            EnumValue::Repetition(v) => v.name(),
            EnumValue::Sex(v) => v.name(),
            EnumValue::Status(v) => v.name(),
        }
    }
}

/// A registered entity instance.
#[derive(Clone, Debug, PartialEq)]
pub enum Record {
    Address(Address),
    FamilyMember(FamilyMember),
    TimeSlot(TimeSlot),
    Teacher(Teacher),
    Course(Course),
    Grade(Grade),
    Student(Student),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Address(_) => EntityKind::Address,
            Record::FamilyMember(_) => EntityKind::FamilyMember,
            Record::TimeSlot(_) => EntityKind::TimeSlot,
            Record::Teacher(_) => EntityKind::Teacher,
            Record::Course(_) => EntityKind::Course,
            Record::Grade(_) => EntityKind::Grade,
            Record::Student(_) => EntityKind::Student,
        }
    }
}

/// Anything the codec can encode or decode.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Enum(EnumValue),
    Phone(Phone),
    Email(Email),
    /// Ordered sequence; also the shape of fixed-size tuples.
    List(Vec<Value>),
    /// Unordered collection; duplicates are dropped on encode.
    Set(Vec<Value>),
    /// Untagged JSON object.
    Map(BTreeMap<String, Value>),
    Record(Box<Record>),
}

impl Value {
    /// Short description of the variant, for error messages.
    pub fn type_label(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "string",
            Value::Date(_) => "date",
            Value::Time(_) => "time",
            Value::DateTime(_) => "datetime",
            Value::Enum(_) => "enum",
            Value::Phone(_) => "phone",
            Value::Email(_) => "email",
            Value::List(_) => "array",
            Value::Set(_) => "set",
            Value::Map(_) => "untyped object",
            Value::Record(record) => record.kind().name(),
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn into_record(self) -> Option<Record> {
        match self {
            Value::Record(record) => Some(*record),
            _ => None,
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(Box::new(record))
    }
}

impl From<EnumValue> for Value {
    fn from(value: EnumValue) -> Self {
        Value::Enum(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_names_roundtrip() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(EntityKind::from_name("NotARealType"), None);
        assert_eq!(EntityKind::from_name("student"), None);
    }

    #[test]
    fn test_enum_parse_strict() {
        assert_eq!(
            EnumKind::Status.parse("ACTIVE", EnumMatching::Strict),
            Some(EnumValue::Status(Status::Active))
        );
        assert_eq!(EnumKind::Status.parse("active", EnumMatching::Strict), None);
        assert_eq!(EnumKind::Sex.parse("ACTIVE", EnumMatching::Strict), None);
    }

    #[test]
    fn test_enum_parse_case_insensitive() {
        assert_eq!(
            EnumKind::Repetition.parse("biweekly_even", EnumMatching::CaseInsensitive),
            Some(EnumValue::Repetition(Repetition::BiweeklyEven))
        );
        assert_eq!(
            EnumKind::DayOfWeek.parse("Friday", EnumMatching::CaseInsensitive),
            Some(EnumValue::DayOfWeek(DayOfWeek::Friday))
        );
    }

    #[test]
    fn test_enum_value_name_and_kind() {
        let value = EnumValue::Sex(Sex::NonBinary);
        assert_eq!(value.name(), "NON_BINARY");
        assert_eq!(value.kind(), EnumKind::Sex);
    }

    #[test]
    fn test_type_label() {
        assert_eq!(Value::Map(BTreeMap::new()).type_label(), "untyped object");
        assert_eq!(Value::Int(1).type_label(), "integer");
        let address = Address::new("Beijing", "Beijing").unwrap();
        assert_eq!(Value::from(Record::Address(address)).type_label(), "Address");
    }
}
