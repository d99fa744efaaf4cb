//! Reconstruction of [`Value`] trees from tagged JSON.
//!
//! Decoding is bottom-up: the children of an object are decoded before the
//! object itself, so by the time a constructor runs every nested entity has
//! already been rebuilt and validated. Each tagged object goes through:
//!
//! 1. registry lookup of its `__type__` (miss: [`CodecError::UnknownType`])
//! 2. rejection of undeclared keys
//! 3. coercion of each field to its declared [`FieldKind`]
//! 4. the type's constructor, whose invariant errors propagate unchanged

use std::collections::BTreeMap;

use academia_config::EnumMatching;
use academia_core::time;
use academia_models::{Email, Phone};
use serde_json::{Map, Value as JsonValue};
use tracing::warn;

use crate::error::{CodecError, Result};
use crate::fields::{FieldSet, mismatch};
use crate::registry::{TYPE_FIELD, TypeDescriptor, TypeRegistry};
use crate::schema::{self, FieldKind, Primitive, ValueObjectKind};
use crate::value::Value;

/// Decodes JSON against a registry.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    registry: &'a TypeRegistry,
    enum_matching: EnumMatching,
}

impl<'a> Decoder<'a> {
    pub fn new(registry: &'a TypeRegistry, enum_matching: EnumMatching) -> Self {
        Self {
            registry,
            enum_matching,
        }
    }

    pub fn decode(&self, json: JsonValue) -> Result<Value> {
        Ok(match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => Value::Text(s),
            JsonValue::Array(items) => Value::List(
                items
                    .into_iter()
                    .map(|item| self.decode(item))
                    .collect::<Result<_>>()?,
            ),
            JsonValue::Object(mut object) => match object.remove(TYPE_FIELD) {
                None => Value::Map(
                    object
                        .into_iter()
                        .map(|(key, item)| Ok((key, self.decode(item)?)))
                        .collect::<Result<BTreeMap<_, _>>>()?,
                ),
                Some(JsonValue::String(name)) => self.decode_tagged(&name, object)?,
                Some(other) => return Err(CodecError::UnknownType(other.to_string())),
            },
        })
    }

    fn decode_tagged(&self, name: &str, object: Map<String, JsonValue>) -> Result<Value> {
        let Some(descriptor) = self.registry.lookup(name) else {
            warn!(type_name = %name, "Rejected unregistered type");
            return Err(CodecError::UnknownType(name.to_string()));
        };

        let mut fields = BTreeMap::new();
        for (key, raw) in object {
            let Some(schema) = schema::field(descriptor.fields, &key) else {
                return Err(CodecError::UnknownField {
                    type_name: descriptor.name(),
                    field: key,
                });
            };
            let value = self.decode(raw)?;
            let value = self.coerce(value, &schema.kind, schema.name)?;
            fields.insert(key, value);
        }

        self.construct(descriptor, fields).map(Value::from)
    }

    fn construct(
        &self,
        descriptor: &TypeDescriptor,
        fields: BTreeMap<String, Value>,
    ) -> Result<crate::value::Record> {
        let mut fields = FieldSet::new(descriptor.name(), fields);
        descriptor.construct(&mut fields).inspect_err(|err| {
            warn!(type_name = descriptor.name(), error = %err, "Failed to construct record");
        })
    }

    /// Converts a generically decoded value to the declared field kind.
    fn coerce(&self, value: Value, kind: &FieldKind, field: &str) -> Result<Value> {
        if matches!(value, Value::Null) {
            return Ok(value);
        }

        match kind {
            FieldKind::Primitive(primitive) => coerce_primitive(value, *primitive, field),
            FieldKind::ValueObject(object) => {
                let text = match value {
                    Value::Text(text) => text,
                    other => return Err(mismatch(field, "string", &other)),
                };
                Ok(match object {
                    ValueObjectKind::Phone => Value::Phone(Phone::new(text)?),
                    ValueObjectKind::Email => Value::Email(Email::new(text)?),
                })
            }
            FieldKind::Enum(enum_kind) => {
                let text = match value {
                    Value::Text(text) => text,
                    other => return Err(mismatch(field, "string", &other)),
                };
                enum_kind
                    .parse(&text, self.enum_matching)
                    .map(Value::Enum)
                    .ok_or(CodecError::InvalidEnumValue {
                        enum_name: enum_kind.name(),
                        value: text,
                    })
            }
            FieldKind::Date => coerce_temporal(value, field, "date", |s| {
                time::parse_date(s).map(Value::Date).ok()
            }),
            FieldKind::Time => coerce_temporal(value, field, "time", |s| {
                time::parse_time(s).map(Value::Time).ok()
            }),
            FieldKind::DateTime => coerce_temporal(value, field, "datetime", |s| {
                time::parse_datetime(s).map(Value::DateTime).ok()
            }),
            FieldKind::Nested(expected) => match value {
                Value::Record(record) if record.kind() == *expected => Ok(Value::Record(record)),
                other @ (Value::Record(_) | Value::Map(_)) => Err(CodecError::UnexpectedType {
                    expected: expected.name().to_string(),
                    found: other.type_label().to_string(),
                }),
                other => Err(mismatch(field, expected.name(), &other)),
            },
            FieldKind::List(inner) => self.coerce_items(value, inner, field).map(Value::List),
            FieldKind::Set(inner) => self.coerce_items(value, inner, field).map(Value::Set),
            FieldKind::Tuple(kinds) => {
                let items = match value {
                    Value::List(items) => items,
                    other => return Err(mismatch(field, "array", &other)),
                };
                if items.len() != kinds.len() {
                    return Err(CodecError::InvalidFieldType {
                        field: field.to_string(),
                        expected: "fixed-length array",
                        found: "array",
                    });
                }
                items
                    .into_iter()
                    .zip(kinds.iter())
                    .enumerate()
                    .map(|(i, (item, kind))| self.coerce(item, kind, &format!("{field}[{i}]")))
                    .collect::<Result<_>>()
                    .map(Value::List)
            }
        }
    }

    fn coerce_items(&self, value: Value, inner: &FieldKind, field: &str) -> Result<Vec<Value>> {
        let items = match value {
            Value::List(items) => items,
            other => return Err(mismatch(field, "array", &other)),
        };
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| self.coerce(item, inner, &format!("{field}[{i}]")))
            .collect()
    }
}

fn coerce_primitive(value: Value, primitive: Primitive, field: &str) -> Result<Value> {
    match (primitive, value) {
        (Primitive::Bool, v @ Value::Bool(_))
        | (Primitive::Int, v @ Value::Int(_))
        | (Primitive::Float, v @ Value::Float(_))
        | (Primitive::Text, v @ Value::Text(_)) => Ok(v),
        (Primitive::Float, Value::Int(n)) => Ok(Value::Float(n as f64)),
        (primitive, other) => Err(mismatch(field, primitive.name(), &other)),
    }
}

fn coerce_temporal(
    value: Value,
    field: &str,
    expected: &'static str,
    parse: impl Fn(&str) -> Option<Value>,
) -> Result<Value> {
    let text = match value {
        Value::Text(text) => text,
        other => return Err(mismatch(field, expected, &other)),
    };
    parse(&text).ok_or_else(|| CodecError::MalformedDate {
        field: field.to_string(),
        expected,
        value: text,
    })
}
