use crate::{domain::Student, errors::Result, storage::StudentRepository};

/// Owns the student collection and mirrors every change to the repository.
pub struct ListStore {
    students: Vec<Student>,
    storage: Box<dyn StudentRepository>,
}

impl ListStore {
    /// Reads the persisted collection once. Absent data yields an empty store;
    /// unreadable data is an error.
    pub fn load(storage: Box<dyn StudentRepository>) -> Result<Self> {
        let students = storage.load()?;
        tracing::debug!(count = students.len(), "loaded student collection");
        Ok(Self { students, storage })
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn get(&self, position: usize) -> Option<&Student> {
        self.students.get(position)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Writes `students` to storage in a single call.
    pub fn persist(&self, students: &[Student]) -> Result<()> {
        self.storage.save(students)?;
        tracing::debug!(count = students.len(), "persisted student collection");
        Ok(())
    }

    /// Persists `students` and, once the write succeeded, adopts them as the
    /// in-memory collection. A failed write leaves both copies untouched.
    pub fn replace_all(&mut self, students: Vec<Student>) -> Result<()> {
        self.persist(&students)?;
        self.students = students;
        Ok(())
    }
}
