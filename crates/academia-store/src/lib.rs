//! # Academia Store
//!
//! Keyed storage for serialized academic records.
//!
//! This crate provides:
//! - A byte-level [`RecordStore`] trait and an in-memory implementation
//! - Record key generation (`academia:student:{id}` and friends)
//! - [`RecordArchive`], which stores entities as tagged JSON
//!
//! # Example
//!
//! ```ignore
//! use academia_store::{MemoryStore, RecordArchive};
//!
//! let archive = RecordArchive::new(MemoryStore::new(), Codec::standard(), &StoreConfig::from_env());
//! archive.save(&student)?;
//! let loaded = archive.load_student(student.student_id())?;
//! ```

pub mod archive;
pub mod error;
pub mod keys;
pub mod memory;

pub use archive::{Archived, RecordArchive};
pub use error::StoreError;
pub use memory::{MemoryStore, RecordStore};
