use std::path::Path;

use student_registry::{
    core::RegistrationForm,
    domain::{Field, Hobby, Student},
    storage::JsonStorage,
};
use tempfile::TempDir;

/// Opens a registry backed by JSON storage inside `dir`.
pub fn open_registry(dir: &Path) -> RegistrationForm {
    let storage =
        JsonStorage::new(Some(dir.to_path_buf()), None).expect("create json storage backend");
    RegistrationForm::new(Box::new(storage), 3).expect("open registry")
}

/// Creates an isolated data directory plus a registry over it.
pub fn setup_registry() -> (RegistrationForm, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let registry = open_registry(temp.path());
    (registry, temp)
}

/// Fills the form with `student` and submits it, panicking on rejection.
pub fn submit_student(registry: &mut RegistrationForm, student: &Student) {
    registry.set_field(Field::Id, student.id.clone()).unwrap();
    registry.set_field(Field::Name, student.name.clone()).unwrap();
    registry.set_field(Field::Email, student.email.clone()).unwrap();
    for hobby in Hobby::ALL {
        registry.toggle_hobby(hobby, student.hobby.contains(hobby));
    }
    let outcome = registry.submit().expect("submit");
    assert!(
        !matches!(outcome, student_registry::core::SubmitOutcome::Rejected(_)),
        "submission rejected: {outcome:?}"
    );
}

pub fn student(id: &str, name: &str, email: &str, hobby: Hobby) -> Student {
    Student::new(id, name, email, [hobby])
}
