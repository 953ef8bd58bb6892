use std::sync::Mutex;

use crate::{
    domain::Student,
    errors::{RegistryError, Result},
};

use super::StudentRepository;

/// Repository that keeps the serialized collection in memory.
///
/// Values pass through the same JSON encoding as [`JsonStorage`](super::JsonStorage),
/// so a reload observes exactly what a file-backed store would.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    stored: Mutex<Option<String>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository with raw stored text, as if written by another tool.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            stored: Mutex::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.stored.lock().ok().and_then(|guard| guard.clone())
    }
}

impl StudentRepository for InMemoryRepository {
    fn load(&self) -> Result<Vec<Student>> {
        let guard = self
            .stored
            .lock()
            .map_err(|_| RegistryError::Storage("in-memory store lock poisoned".into()))?;
        match guard.as_deref() {
            Some(raw) => {
                let students: Option<Vec<Student>> = serde_json::from_str(raw)?;
                Ok(students.unwrap_or_default())
            }
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, students: &[Student]) -> Result<()> {
        let json = serde_json::to_string(students)?;
        let mut guard = self
            .stored
            .lock()
            .map_err(|_| RegistryError::Storage("in-memory store lock poisoned".into()))?;
        *guard = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Hobby;

    #[test]
    fn empty_repository_loads_nothing() {
        assert!(InMemoryRepository::new().load().unwrap().is_empty());
    }

    #[test]
    fn save_replaces_previous_contents() {
        let repo = InMemoryRepository::new();
        repo.save(&[Student::new("1", "Ann", "a@x.com", [Hobby::Read])])
            .unwrap();
        repo.save(&[Student::new("2", "Bob", "b@x.com", [Hobby::Yoga])])
            .unwrap();
        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "2");
    }

    #[test]
    fn seeded_records_without_hobby_are_tolerated() {
        let repo = InMemoryRepository::with_raw(r#"[{"id":"9","name":"Zed","email":"z@z.z"}]"#);
        let loaded = repo.load().unwrap();
        assert!(loaded[0].hobby.is_empty());
    }

    #[test]
    fn seeded_records_with_null_hobby_are_tolerated() {
        let repo = InMemoryRepository::with_raw(
            r#"[{"id":"1","name":"Ann","email":"a@x.com","hobby":null}]"#,
        );
        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].hobby.to_string(), "No Hobby");
    }
}
