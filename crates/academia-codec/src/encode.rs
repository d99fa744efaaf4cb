//! Projection of [`Value`] trees onto tagged JSON.

use std::collections::HashSet;

use academia_core::time;
use serde_json::{Map, Number, Value as JsonValue};

use crate::error::{CodecError, Result};
use crate::registry::{TYPE_FIELD, TypeRegistry};
use crate::schema::Tagged;
use crate::value::{Record, Value};

/// Encodes values against a registry.
///
/// Pure: neither the registry nor the input is modified.
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'a> {
    registry: &'a TypeRegistry,
    max_depth: usize,
}

impl<'a> Encoder<'a> {
    pub fn new(registry: &'a TypeRegistry, max_depth: usize) -> Self {
        Self {
            registry,
            max_depth,
        }
    }

    pub fn encode(&self, value: &Value) -> Result<JsonValue> {
        let mut path = Vec::new();
        self.encode_at(value, &mut path)
    }

    pub fn encode_entity<T: Tagged>(&self, entity: &T) -> Result<JsonValue> {
        let record: Record = entity.clone().into();
        self.encode(&Value::from(record))
    }

    fn encode_at(&self, value: &Value, path: &mut Vec<String>) -> Result<JsonValue> {
        if path.len() > self.max_depth {
            return Err(CodecError::CyclicReference {
                depth: path.len(),
                path: path.join("."),
            });
        }

        Ok(match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Int(n) => JsonValue::from(*n),
            Value::Float(x) => Number::from_f64(*x).map(JsonValue::Number).ok_or_else(|| {
                CodecError::UnsupportedType(format!("non-finite float {} at '{}'", x, path.join(".")))
            })?,
            Value::Text(text) => JsonValue::String(text.clone()),
            Value::Date(date) => JsonValue::String(time::format_date(date)),
            Value::Time(t) => JsonValue::String(time::format_time(t)),
            Value::DateTime(dt) => JsonValue::String(time::format_datetime(dt)),
            Value::Enum(member) => JsonValue::String(member.name().to_string()),
            Value::Phone(phone) => JsonValue::String(phone.as_str().to_string()),
            Value::Email(email) => JsonValue::String(email.as_str().to_string()),
            Value::List(items) => JsonValue::Array(self.encode_items(items, path)?),
            Value::Set(items) => {
                let mut seen = HashSet::new();
                let unique = self
                    .encode_items(items, path)?
                    .into_iter()
                    .filter(|item| seen.insert(item.to_string()))
                    .collect();
                JsonValue::Array(unique)
            }
            Value::Map(entries) => {
                if entries.contains_key(TYPE_FIELD) {
                    return Err(CodecError::UnsupportedType(format!(
                        "untyped map carrying reserved key '{}'",
                        TYPE_FIELD
                    )));
                }
                let mut object = Map::with_capacity(entries.len());
                for (key, item) in entries {
                    path.push(key.clone());
                    let encoded = self.encode_at(item, path);
                    path.pop();
                    object.insert(key.clone(), encoded?);
                }
                JsonValue::Object(object)
            }
            Value::Record(record) => self.encode_record(record, path)?,
        })
    }

    fn encode_items(&self, items: &[Value], path: &mut Vec<String>) -> Result<Vec<JsonValue>> {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                path.push(i.to_string());
                let encoded = self.encode_at(item, path);
                path.pop();
                encoded
            })
            .collect()
    }

    fn encode_record(&self, record: &Record, path: &mut Vec<String>) -> Result<JsonValue> {
        let kind = record.kind();
        if !self.registry.contains(kind) {
            return Err(CodecError::UnsupportedType(format!(
                "type '{}' is not registered",
                kind
            )));
        }

        let fields = record.fields();
        let mut object = Map::with_capacity(fields.len() + 1);
        for (name, field) in &fields {
            path.push((*name).to_string());
            let encoded = self.encode_at(field, path);
            path.pop();
            object.insert((*name).to_string(), encoded?);
        }
        object.insert(TYPE_FIELD.to_string(), JsonValue::String(kind.name().to_string()));
        Ok(JsonValue::Object(object))
    }
}
