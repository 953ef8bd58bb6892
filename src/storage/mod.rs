pub mod json_backend;
pub mod memory;

use std::sync::Arc;

use crate::{domain::Student, errors::Result};

/// Key under which the collection is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "studentlist";

/// Abstraction over persistence backends able to hold the student collection.
///
/// `load` returns an empty collection when nothing has been stored yet. `save`
/// replaces the stored collection wholesale in a single write.
pub trait StudentRepository: Send + Sync {
    fn load(&self) -> Result<Vec<Student>>;
    fn save(&self, students: &[Student]) -> Result<()>;
}

impl<T: StudentRepository + ?Sized> StudentRepository for Arc<T> {
    fn load(&self) -> Result<Vec<Student>> {
        (**self).load()
    }

    fn save(&self, students: &[Student]) -> Result<()> {
        (**self).save(students)
    }
}

pub use json_backend::JsonStorage;
pub use memory::InMemoryRepository;
