//! Boundary operations: typed entities to text and bytes, and back.

use std::sync::Arc;

use academia_config::CodecConfig;
use serde_json::Value as JsonValue;

use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::{CodecError, Result};
use crate::registry::TypeRegistry;
use crate::schema::Tagged;
use crate::value::Value;

/// A registry paired with codec settings.
///
/// Cheap to clone; clones share the registry.
#[derive(Debug, Clone)]
pub struct Codec {
    registry: Arc<TypeRegistry>,
    config: CodecConfig,
}

impl Codec {
    pub fn new(registry: Arc<TypeRegistry>, config: CodecConfig) -> Self {
        Self { registry, config }
    }

    /// Codec over every entity type with default settings.
    pub fn standard() -> Self {
        Self::new(Arc::new(TypeRegistry::standard()), CodecConfig::default())
    }

    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn encoder(&self) -> Encoder<'_> {
        Encoder::new(&self.registry, self.config.max_depth)
    }

    pub fn decoder(&self) -> Decoder<'_> {
        Decoder::new(&self.registry, self.config.enum_matching)
    }

    pub fn encode(&self, value: &Value) -> Result<JsonValue> {
        self.encoder().encode(value)
    }

    pub fn decode(&self, json: JsonValue) -> Result<Value> {
        self.decoder().decode(json)
    }

    /// Parses and decodes JSON text.
    pub fn decode_str(&self, text: &str) -> Result<Value> {
        self.decode(serde_json::from_str(text)?)
    }

    pub fn serialize<T: Tagged>(&self, entity: &T) -> Result<String> {
        let json = self.encoder().encode_entity(entity)?;
        let text = if self.config.pretty {
            serde_json::to_string_pretty(&json)?
        } else {
            serde_json::to_string(&json)?
        };
        Ok(text)
    }

    pub fn serialize_bytes<T: Tagged>(&self, entity: &T) -> Result<Vec<u8>> {
        self.serialize(entity).map(String::into_bytes)
    }

    /// Decodes an already parsed document that must hold a `T`.
    pub fn decode_entity<T: Tagged>(&self, json: JsonValue) -> Result<T> {
        expect_entity(self.decode(json)?)
    }

    /// Decodes text that must hold a `T`.
    ///
    /// Any other decoded shape fails with [`CodecError::UnexpectedType`].
    pub fn deserialize<T: Tagged>(&self, text: &str) -> Result<T> {
        self.decode_entity(serde_json::from_str(text)?)
    }

    pub fn deserialize_bytes<T: Tagged>(&self, bytes: &[u8]) -> Result<T> {
        self.decode_entity(serde_json::from_slice(bytes)?)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::standard()
    }
}

fn expect_entity<T: Tagged>(value: Value) -> Result<T> {
    let found = value.type_label();
    let record = value.into_record().ok_or_else(|| CodecError::UnexpectedType {
        expected: T::KIND.name().to_string(),
        found: found.to_string(),
    })?;
    T::try_from(record).map_err(|other| CodecError::UnexpectedType {
        expected: T::KIND.name().to_string(),
        found: other.kind().name().to_string(),
    })
}
