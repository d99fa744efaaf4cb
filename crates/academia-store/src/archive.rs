//! Tagged-JSON archive of aggregate records.
//!
//! Students, teachers and courses are serialized through the [`Codec`] and
//! stored as bytes under their record key. Loading runs the full decoder,
//! so every invariant is re-checked on the way out.

use academia_codec::{Codec, Tagged};
use academia_config::StoreConfig;
use academia_models::{Course, CourseId, Student, StudentId, Teacher, TeacherId};
use tracing::{debug, instrument};

use crate::error::StoreError;
use crate::keys;
use crate::memory::RecordStore;

/// An entity stored under its own key.
pub trait Archived: Tagged {
    fn record_key(&self, prefix: &str) -> String;
}

impl Archived for Student {
    fn record_key(&self, prefix: &str) -> String {
        keys::students::by_id(prefix, self.student_id())
    }
}

impl Archived for Teacher {
    fn record_key(&self, prefix: &str) -> String {
        keys::teachers::by_id(prefix, self.teacher_id())
    }
}

impl Archived for Course {
    fn record_key(&self, prefix: &str) -> String {
        keys::courses::by_id(prefix, self.course_id())
    }
}

/// Archive over any [`RecordStore`].
#[derive(Debug)]
pub struct RecordArchive<S> {
    store: S,
    codec: Codec,
    prefix: String,
}

impl<S: RecordStore> RecordArchive<S> {
    pub fn new(store: S, codec: Codec, config: &StoreConfig) -> Self {
        Self {
            store,
            codec,
            prefix: config.key_prefix.clone(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Serializes and stores `entity`, returning its key.
    #[instrument(skip(self, entity), fields(record.kind = T::KIND.name()))]
    pub fn save<T: Archived>(&self, entity: &T) -> Result<String, StoreError> {
        let key = entity.record_key(&self.prefix);
        let bytes = self.codec.serialize_bytes(entity)?;
        self.store.put(&key, bytes)?;
        debug!(record.key = %key, "Record archived");
        Ok(key)
    }

    /// Loads and decodes the record at `key`, if any.
    #[instrument(skip(self), fields(record.kind = T::KIND.name()))]
    pub fn load<T: Tagged>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(bytes) = self.store.get(key)? else {
            return Ok(None);
        };
        let entity = self.codec.deserialize_bytes(&bytes)?;
        debug!(record.key = %key, "Record loaded");
        Ok(Some(entity))
    }

    /// Like [`load`](Self::load), but a missing record is an error.
    pub fn require<T: Tagged>(&self, key: &str) -> Result<T, StoreError> {
        self.load(key)?
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    pub fn delete(&self, key: &str) -> Result<bool, StoreError> {
        self.store.delete(key)
    }

    pub fn load_student(&self, student_id: StudentId) -> Result<Option<Student>, StoreError> {
        self.load(&keys::students::by_id(&self.prefix, student_id))
    }

    pub fn load_teacher(&self, teacher_id: TeacherId) -> Result<Option<Teacher>, StoreError> {
        self.load(&keys::teachers::by_id(&self.prefix, teacher_id))
    }

    pub fn load_course(&self, course_id: CourseId) -> Result<Option<Course>, StoreError> {
        self.load(&keys::courses::by_id(&self.prefix, course_id))
    }

    /// Every archived student, in key order.
    pub fn students(&self) -> Result<Vec<Student>, StoreError> {
        self.load_all(&keys::students::all(&self.prefix))
    }

    pub fn teachers(&self) -> Result<Vec<Teacher>, StoreError> {
        self.load_all(&keys::teachers::all(&self.prefix))
    }

    pub fn courses(&self) -> Result<Vec<Course>, StoreError> {
        self.load_all(&keys::courses::all(&self.prefix))
    }

    fn load_all<T: Tagged>(&self, prefix: &str) -> Result<Vec<T>, StoreError> {
        self.store
            .keys(prefix)?
            .iter()
            .map(|key| self.require(key))
            .collect()
    }
}
