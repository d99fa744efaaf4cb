//! # Academia Codec
//!
//! Polymorphic tagged JSON encoding for academic records.
//!
//! Every registered entity is written as a JSON object carrying its wire
//! fields plus a `"__type__"` discriminator naming its canonical type. On
//! the way back in, only types present in the [`TypeRegistry`] can be
//! reconstructed, and every constructor invariant is re-checked.
//!
//! # Modules
//!
//! - [`value`]: Dynamic value model and the closed set of entity kinds
//! - [`schema`]: Field kinds and the [`Tagged`] trait
//! - [`registry`]: Type registry and its builder
//! - [`encode`], [`decode`]: Tree traversals
//! - [`codec`]: Text and byte boundary operations
//!
//! # Example
//!
//! ```ignore
//! use academia_codec::Codec;
//!
//! let codec = Codec::standard();
//! let text = codec.serialize(&student)?;
//! let back: Student = codec.deserialize(&text)?;
//! assert_eq!(back, student);
//! ```

pub mod codec;
pub mod decode;
pub mod encode;
pub mod entities;
pub mod error;
pub mod fields;
pub mod registry;
pub mod schema;
pub mod value;

pub use codec::Codec;
pub use decode::Decoder;
pub use encode::Encoder;
pub use error::{CodecError, Result};
pub use fields::{FieldSet, FromValue, ToValue};
pub use registry::{RegistryError, TYPE_FIELD, TypeDescriptor, TypeRegistry, TypeRegistryBuilder};
pub use schema::{FieldKind, FieldSchema, Primitive, Tagged, ValueObjectKind};
pub use value::{EntityKind, EnumKind, EnumValue, Record, Value};
