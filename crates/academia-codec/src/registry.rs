//! Registry of types the decoder is allowed to reconstruct.
//!
//! The registry maps each canonical type name to a [`TypeDescriptor`]. Only
//! registered types can be encoded with a discriminator or rebuilt from
//! one, so the registry doubles as the allow-list for untrusted input.
//!
//! # Example
//!
//! ```ignore
//! use academia_codec::{EntityKind, TypeRegistry};
//!
//! // Everything
//! let registry = TypeRegistry::standard();
//!
//! // Leaf types only
//! let registry = TypeRegistry::builder()
//!     .register(EntityKind::Address)
//!     .register(EntityKind::TimeSlot)
//!     .build()?;
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;

use academia_models::{Address, Course, FamilyMember, Grade, Student, Teacher, TimeSlot};
use tracing::debug;

use crate::error::Result;
use crate::fields::FieldSet;
use crate::schema::{FieldSchema, Tagged};
use crate::value::{EntityKind, Record};

/// Reserved object key carrying the canonical type name.
pub const TYPE_FIELD: &str = "__type__";

/// Everything the codec knows about one registered type.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    pub kind: EntityKind,
    pub fields: &'static [FieldSchema],
    construct: fn(&mut FieldSet) -> Result<Record>,
}

impl TypeDescriptor {
    pub fn of<T: Tagged>() -> Self {
        Self {
            kind: T::KIND,
            fields: T::FIELDS,
            construct: |fields| T::from_fields(fields).map(Into::into),
        }
    }

    /// The descriptor for `kind`. Exhaustive over [`EntityKind`].
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Address => Self::of::<Address>(),
            EntityKind::FamilyMember => Self::of::<FamilyMember>(),
            EntityKind::TimeSlot => Self::of::<TimeSlot>(),
            EntityKind::Teacher => Self::of::<Teacher>(),
            EntityKind::Course => Self::of::<Course>(),
            EntityKind::Grade => Self::of::<Grade>(),
            EntityKind::Student => Self::of::<Student>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Runs the type's constructor over decoded fields.
    pub fn construct(&self, fields: &mut FieldSet) -> Result<Record> {
        (self.construct)(fields)
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("kind", &self.kind)
            .field("fields", &self.fields.len())
            .finish()
    }
}

/// Errors raised while building a registry.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Type '{0}' is registered twice")]
    Duplicate(&'static str),

    #[error("Field '{field}' of {owner} references unregistered type {target}")]
    UnresolvedNested {
        owner: &'static str,
        field: &'static str,
        target: &'static str,
    },

    #[error("Type '{owner}' declares field '{field}' more than once")]
    DuplicateField {
        owner: &'static str,
        field: &'static str,
    },

    #[error("Type '{0}' declares the reserved field '__type__'")]
    ReservedField(&'static str),
}

/// Read-only lookup from canonical type name to descriptor.
///
/// Built once, then shared (typically behind an `Arc`) by any number of
/// encoders and decoders.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<&'static str, TypeDescriptor>,
}

impl TypeRegistry {
    /// Registry containing every entity kind.
    pub fn standard() -> Self {
        let types = EntityKind::ALL
            .into_iter()
            .map(|kind| (kind.name(), TypeDescriptor::for_kind(kind)))
            .collect();
        Self { types }
    }

    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::default()
    }

    pub fn lookup(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    pub fn contains(&self, kind: EntityKind) -> bool {
        self.types.contains_key(kind.name())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.types.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builds a [`TypeRegistry`] from an explicit list of kinds.
#[derive(Debug, Default)]
pub struct TypeRegistryBuilder {
    kinds: Vec<EntityKind>,
}

impl TypeRegistryBuilder {
    pub fn register(mut self, kind: EntityKind) -> Self {
        self.kinds.push(kind);
        self
    }

    pub fn register_all(mut self, kinds: impl IntoIterator<Item = EntityKind>) -> Self {
        self.kinds.extend(kinds);
        self
    }

    /// Validates the selection and builds the registry.
    ///
    /// Every nested kind referenced by a registered schema must itself be
    /// registered, so a decoder can never reach a type it cannot build.
    pub fn build(self) -> std::result::Result<TypeRegistry, RegistryError> {
        let mut types = HashMap::with_capacity(self.kinds.len());

        for kind in &self.kinds {
            let descriptor = TypeDescriptor::for_kind(*kind);
            validate_fields(&descriptor)?;
            if types.insert(kind.name(), descriptor).is_some() {
                return Err(RegistryError::Duplicate(kind.name()));
            }
            debug!(type_name = kind.name(), fields = descriptor.fields.len(), "Registered type");
        }

        for descriptor in types.values() {
            for schema in descriptor.fields {
                if let Some(target) = schema
                    .kind
                    .nested_kinds()
                    .into_iter()
                    .find(|target| !types.contains_key(target.name()))
                {
                    return Err(RegistryError::UnresolvedNested {
                        owner: descriptor.name(),
                        field: schema.name,
                        target: target.name(),
                    });
                }
            }
        }

        Ok(TypeRegistry { types })
    }
}

fn validate_fields(descriptor: &TypeDescriptor) -> std::result::Result<(), RegistryError> {
    let mut seen = HashSet::new();
    for schema in descriptor.fields {
        if schema.name == TYPE_FIELD {
            return Err(RegistryError::ReservedField(descriptor.name()));
        }
        if !seen.insert(schema.name) {
            return Err(RegistryError::DuplicateField {
                owner: descriptor.name(),
                field: schema.name,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registers_everything() {
        let registry = TypeRegistry::standard();
        assert_eq!(registry.len(), EntityKind::ALL.len());
        for kind in EntityKind::ALL {
            assert!(registry.contains(kind));
            assert_eq!(registry.lookup(kind.name()).unwrap().kind, kind);
        }
        assert!(registry.lookup("NotARealType").is_none());
    }

    #[test]
    fn test_standard_schemas_are_well_formed() {
        let registry = TypeRegistry::builder()
            .register_all(EntityKind::ALL)
            .build()
            .unwrap();
        assert_eq!(registry.names(), TypeRegistry::standard().names());
    }

    #[test]
    fn test_leaf_registry_builds() {
        let registry = TypeRegistry::builder()
            .register(EntityKind::Address)
            .register(EntityKind::TimeSlot)
            .build()
            .unwrap();
        assert_eq!(registry.names(), vec!["Address", "TimeSlot"]);
        assert!(!registry.contains(EntityKind::Student));
    }

    #[test]
    fn test_unresolved_nested_is_rejected() {
        let err = TypeRegistry::builder()
            .register(EntityKind::Course)
            .register(EntityKind::Teacher)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnresolvedNested {
                owner: "Course",
                field: "time_slots",
                target: "TimeSlot",
            }
        );
    }

    #[test]
    fn test_duplicate_is_rejected() {
        let err = TypeRegistry::builder()
            .register(EntityKind::Address)
            .register(EntityKind::Address)
            .build()
            .unwrap_err();
        assert_eq!(err, RegistryError::Duplicate("Address"));
    }

    #[test]
    fn test_builder_is_empty_by_default() {
        let registry = TypeRegistry::builder().build().unwrap();
        assert!(registry.is_empty());
    }
}
