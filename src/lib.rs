//! # Academia
//!
//! Validated academic records and their tagged JSON encoding.
//!
//! This crate re-exports the workspace members under one roof:
//!
//! - [`core`]: Validation errors and ISO-8601 helpers
//! - [`config`]: Codec and store configuration
//! - [`models`]: Students, teachers, courses and their value objects
//! - [`codec`]: Type registry and tagged JSON encoder/decoder
//! - [`store`]: Keyed archive of serialized records
//! - [`observability`]: Logging setup
//!
//! # Example
//!
//! ```ignore
//! use academia::{Codec, models::Student};
//!
//! let codec = Codec::standard();
//! let text = codec.serialize(&student)?;
//! let back: Student = codec.deserialize(&text)?;
//! assert_eq!(back, student);
//! ```

pub use academia_codec as codec;
pub use academia_config as config;
pub use academia_core as core;
pub use academia_models as models;
pub use academia_observability as observability;
pub use academia_store as store;

pub use academia_codec::{Codec, CodecError, TypeRegistry, Value};
pub use academia_config::{CodecConfig, EnumMatching, StoreConfig};
pub use academia_core::ValidationError;
pub use academia_store::{MemoryStore, RecordArchive, StoreError};
