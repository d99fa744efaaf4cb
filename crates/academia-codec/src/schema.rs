//! Statically declared entity schemas.
//!
//! Each entity type implements [`Tagged`], declaring its wire fields as a
//! `&'static [FieldSchema]` and how to project itself to and from those
//! fields. The decoder coerces raw JSON using the declared [`FieldKind`];
//! the registry validates that every nested kind is itself registered.

use std::fmt;

use crate::error::Result;
use crate::fields::FieldSet;
use crate::value::{EntityKind, EnumKind, Record, Value};

/// Primitive JSON shapes a field can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    Bool,
    Int,
    Float,
    Text,
}

impl Primitive {
    pub const fn name(self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::Int => "integer",
            Primitive::Float => "float",
            Primitive::Text => "string",
        }
    }
}

/// Validated string wrappers stored as plain JSON strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueObjectKind {
    Phone,
    Email,
}

impl ValueObjectKind {
    pub const fn name(self) -> &'static str {
        match self {
            ValueObjectKind::Phone => "Phone",
            ValueObjectKind::Email => "Email",
        }
    }
}

/// Declared type of a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Primitive(Primitive),
    ValueObject(ValueObjectKind),
    Enum(EnumKind),
    Date,
    Time,
    DateTime,
    Nested(EntityKind),
    List(&'static FieldKind),
    Set(&'static FieldKind),
    /// Fixed-length heterogeneous array.
    Tuple(&'static [FieldKind]),
}

impl FieldKind {
    /// Every entity kind reachable from this field, including through
    /// collections.
    pub fn nested_kinds(&self) -> Vec<EntityKind> {
        let mut kinds = Vec::new();
        self.collect_nested(&mut kinds);
        kinds
    }

    fn collect_nested(&self, out: &mut Vec<EntityKind>) {
        match self {
            FieldKind::Nested(kind) => out.push(*kind),
            FieldKind::List(inner) | FieldKind::Set(inner) => inner.collect_nested(out),
            FieldKind::Tuple(items) => items.iter().for_each(|item| item.collect_nested(out)),
            _ => {}
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Primitive(p) => f.write_str(p.name()),
            FieldKind::ValueObject(v) => f.write_str(v.name()),
            FieldKind::Enum(e) => f.write_str(e.name()),
            FieldKind::Date => f.write_str("date"),
            FieldKind::Time => f.write_str("time"),
            FieldKind::DateTime => f.write_str("datetime"),
            FieldKind::Nested(kind) => f.write_str(kind.name()),
            FieldKind::List(inner) => write!(f, "list<{}>", inner),
            FieldKind::Set(inner) => write!(f, "set<{}>", inner),
            FieldKind::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// One declared wire field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Absent optional fields decode to their default.
    pub required: bool,
}

impl FieldSchema {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// An entity type the codec can tag, encode and reconstruct.
pub trait Tagged: Sized + Clone + Into<Record> + TryFrom<Record, Error = Record> {
    const KIND: EntityKind;
    const FIELDS: &'static [FieldSchema];

    /// Projects the instance to its wire fields, in declaration order.
    fn to_fields(&self) -> Vec<(&'static str, Value)>;

    /// Rebuilds an instance from coerced fields, running its constructor.
    fn from_fields(fields: &mut FieldSet) -> Result<Self>;
}

/// Looks up a declared field by name.
pub fn field<'a>(fields: &'a [FieldSchema], name: &str) -> Option<&'a FieldSchema> {
    fields.iter().find(|schema| schema.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOTS: FieldKind = FieldKind::List(&FieldKind::Nested(EntityKind::TimeSlot));
    const MAJOR: FieldKind = FieldKind::Tuple(&[
        FieldKind::Primitive(Primitive::Int),
        FieldKind::Primitive(Primitive::Text),
    ]);

    #[test]
    fn test_nested_kinds_through_collections() {
        assert_eq!(SLOTS.nested_kinds(), vec![EntityKind::TimeSlot]);
        assert!(MAJOR.nested_kinds().is_empty());
        assert!(FieldKind::Date.nested_kinds().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(SLOTS.to_string(), "list<TimeSlot>");
        assert_eq!(MAJOR.to_string(), "(integer, string)");
        assert_eq!(
            FieldKind::Set(&FieldKind::Primitive(Primitive::Int)).to_string(),
            "set<integer>"
        );
    }

    #[test]
    fn test_field_lookup() {
        let fields = [
            FieldSchema::required("day", FieldKind::Enum(EnumKind::DayOfWeek)),
            FieldSchema::optional("grades", SLOTS),
        ];
        assert!(field(&fields, "day").unwrap().required);
        assert!(!field(&fields, "grades").unwrap().required);
        assert!(field(&fields, "missing").is_none());
    }
}
