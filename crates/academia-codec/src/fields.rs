//! Conversions between typed Rust values and the dynamic [`Value`] model.

use std::collections::{BTreeMap, BTreeSet};

use academia_core::ValidationError;
use academia_models::{
    ClassId, CourseId, DayOfWeek, Email, Major, MajorId, Phone, Repetition, Sex, Status,
    StudentId, TeacherId,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{CodecError, Result};
use crate::value::{EnumValue, Value};

/// Converts a coerced field value into a typed value.
pub trait FromValue: Sized {
    fn from_value(value: Value, field: &str) -> Result<Self>;
}

/// Projects a typed value into the dynamic model.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

pub(crate) fn mismatch(field: &str, expected: &'static str, found: &Value) -> CodecError {
    CodecError::InvalidFieldType {
        field: field.to_string(),
        expected,
        found: found.type_label(),
    }
}

/// Decoded fields of a single tagged object, consumed by its constructor.
#[derive(Debug)]
pub struct FieldSet {
    type_name: &'static str,
    fields: BTreeMap<String, Value>,
}

impl FieldSet {
    pub fn new(type_name: &'static str, fields: BTreeMap<String, Value>) -> Self {
        Self { type_name, fields }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Removes and converts a required field.
    pub fn take<T: FromValue>(&mut self, name: &'static str) -> Result<T> {
        let value = self.fields.remove(name).ok_or(CodecError::MissingField {
            type_name: self.type_name,
            field: name,
        })?;
        T::from_value(value, name)
    }

    /// Removes and converts an optional field; absent or `null` yields the default.
    pub fn take_or_default<T: FromValue + Default>(&mut self, name: &'static str) -> Result<T> {
        match self.fields.remove(name) {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => T::from_value(value, name),
        }
    }
}

// ============================================================================
// Primitives
// ============================================================================

impl FromValue for String {
    fn from_value(value: Value, field: &str) -> Result<Self> {
        match value {
            Value::Text(text) => Ok(text),
            other => Err(mismatch(field, "string", &other)),
        }
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl FromValue for bool {
    fn from_value(value: Value, field: &str) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch(field, "bool", &other)),
        }
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for i64 {
    fn from_value(value: Value, field: &str) -> Result<Self> {
        match value {
            Value::Int(n) => Ok(n),
            other => Err(mismatch(field, "integer", &other)),
        }
    }
}

impl ToValue for i64 {
    fn to_value(&self) -> Value {
        Value::Int(*self)
    }
}

fn narrow<T: TryFrom<i64>>(value: Value, field: &str) -> Result<T> {
    let n = i64::from_value(value, field)?;
    T::try_from(n).map_err(|_| {
        CodecError::Validation(ValidationError::constraint(format!(
            "{} value {} is out of range",
            field, n
        )))
    })
}

impl FromValue for i32 {
    fn from_value(value: Value, field: &str) -> Result<Self> {
        narrow(value, field)
    }
}

impl ToValue for i32 {
    fn to_value(&self) -> Value {
        Value::Int(i64::from(*self))
    }
}

impl FromValue for u8 {
    fn from_value(value: Value, field: &str) -> Result<Self> {
        narrow(value, field)
    }
}

impl ToValue for u8 {
    fn to_value(&self) -> Value {
        Value::Int(i64::from(*self))
    }
}

impl FromValue for f64 {
    fn from_value(value: Value, field: &str) -> Result<Self> {
        match value {
            Value::Float(x) => Ok(x),
            Value::Int(n) => Ok(n as f64),
            other => Err(mismatch(field, "float", &other)),
        }
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

// ============================================================================
// Dates and times
// ============================================================================

macro_rules! impl_chrono_value {
    ($ty:ty, $variant:ident, $label:literal) => {
        impl FromValue for $ty {
            fn from_value(value: Value, field: &str) -> Result<Self> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(mismatch(field, $label, &other)),
                }
            }
        }

        impl ToValue for $ty {
            fn to_value(&self) -> Value {
                Value::$variant(*self)
            }
        }
    };
}

impl_chrono_value!(NaiveDate, Date, "date");
impl_chrono_value!(NaiveTime, Time, "time");
impl_chrono_value!(NaiveDateTime, DateTime, "datetime");

// ============================================================================
// Value objects, ids and enums
// ============================================================================

impl FromValue for Phone {
    fn from_value(value: Value, field: &str) -> Result<Self> {
        match value {
            Value::Phone(phone) => Ok(phone),
            other => Err(mismatch(field, "Phone", &other)),
        }
    }
}

impl ToValue for Phone {
    fn to_value(&self) -> Value {
        Value::Phone(self.clone())
    }
}

impl FromValue for Email {
    fn from_value(value: Value, field: &str) -> Result<Self> {
        match value {
            Value::Email(email) => Ok(email),
            other => Err(mismatch(field, "Email", &other)),
        }
    }
}

impl ToValue for Email {
    fn to_value(&self) -> Value {
        Value::Email(self.clone())
    }
}

macro_rules! impl_id_value {
    ($($id:ty),+ $(,)?) => {
        $(
            impl FromValue for $id {
                fn from_value(value: Value, field: &str) -> Result<Self> {
                    i64::from_value(value, field).map(<$id>::new)
                }
            }

            impl ToValue for $id {
                fn to_value(&self) -> Value {
                    Value::Int(self.get())
                }
            }
        )+
    };
}

impl_id_value!(StudentId, TeacherId, CourseId, MajorId, ClassId);

macro_rules! impl_enum_value {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: Value, field: &str) -> Result<Self> {
                    match value {
                        Value::Enum(EnumValue::$ty(v)) => Ok(v),
                        other => Err(mismatch(field, stringify!($ty), &other)),
                    }
                }
            }

            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Enum(EnumValue::$ty(*self))
                }
            }
        )+
    };
}

impl_enum_value!(DayOfWeek, Repetition, Sex, Status);

// ============================================================================
// Collections
// ============================================================================

fn elements(value: Value, field: &str) -> Result<Vec<Value>> {
    match value {
        Value::List(items) | Value::Set(items) => Ok(items),
        other => Err(mismatch(field, "array", &other)),
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value, field: &str) -> Result<Self> {
        elements(value, field)?
            .into_iter()
            .map(|item| T::from_value(item, field))
            .collect()
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: FromValue + Ord> FromValue for BTreeSet<T> {
    fn from_value(value: Value, field: &str) -> Result<Self> {
        elements(value, field)?
            .into_iter()
            .map(|item| T::from_value(item, field))
            .collect()
    }
}

impl<T: ToValue> ToValue for BTreeSet<T> {
    fn to_value(&self) -> Value {
        Value::Set(self.iter().map(ToValue::to_value).collect())
    }
}

/// `Major` travels as the pair `[id, name]`.
impl FromValue for Major {
    fn from_value(value: Value, field: &str) -> Result<Self> {
        let [id, name]: [Value; 2] =
            elements(value, field)?
                .try_into()
                .map_err(|_| CodecError::InvalidFieldType {
                    field: field.to_string(),
                    expected: "[id, name] pair",
                    found: "array",
                })?;
        Ok(Major::new(
            MajorId::from_value(id, field)?,
            String::from_value(name, field)?,
        ))
    }
}

impl ToValue for Major {
    fn to_value(&self) -> Value {
        Value::List(vec![self.id.to_value(), self.name.to_value()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_missing_field() {
        let mut fields = FieldSet::new("Address", BTreeMap::new());
        let err = fields.take::<String>("city").unwrap_err();
        assert!(matches!(
            err,
            CodecError::MissingField {
                type_name: "Address",
                field: "city"
            }
        ));
    }

    #[test]
    fn test_take_or_default_handles_null() {
        let mut map = BTreeMap::new();
        map.insert("grades".to_string(), Value::Null);
        let mut fields = FieldSet::new("Student", map);
        let grades: Vec<i64> = fields.take_or_default("grades").unwrap();
        assert!(grades.is_empty());
        let absent: Vec<i64> = fields.take_or_default("other").unwrap();
        assert!(absent.is_empty());
    }

    #[test]
    fn test_wrong_primitive_is_field_type_error() {
        let err = String::from_value(Value::Int(5), "name").unwrap_err();
        match err {
            CodecError::InvalidFieldType {
                field,
                expected,
                found,
            } => {
                assert_eq!(field, "name");
                assert_eq!(expected, "string");
                assert_eq!(found, "integer");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_narrowing_out_of_range_is_validation_error() {
        let err = u8::from_value(Value::Int(300), "credit").unwrap_err();
        assert!(matches!(err, CodecError::Validation(_)));
        assert_eq!(u8::from_value(Value::Int(3), "credit").unwrap(), 3);
    }

    #[test]
    fn test_float_accepts_integer() {
        assert_eq!(f64::from_value(Value::Int(90), "score").unwrap(), 90.0);
    }

    #[test]
    fn test_major_pair() {
        let major = Major::new(MajorId::new(1), "Computer Science");
        let value = major.to_value();
        assert_eq!(
            value,
            Value::List(vec![Value::Int(1), Value::Text("Computer Science".into())])
        );
        assert_eq!(Major::from_value(value, "major").unwrap(), major);

        let short = Value::List(vec![Value::Int(1)]);
        assert!(Major::from_value(short, "major").is_err());
    }

    #[test]
    fn test_set_projection() {
        let ids: BTreeSet<ClassId> = [ClassId::new(2), ClassId::new(1)].into_iter().collect();
        assert_eq!(
            ids.to_value(),
            Value::Set(vec![Value::Int(1), Value::Int(2)])
        );
    }
}
