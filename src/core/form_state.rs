use crate::domain::{validate_student, Field, Hobby, Student, ValidationErrors};
use crate::errors::RegistryError;

/// Whether the form creates a new student or edits an existing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Idle,
    Editing(usize),
}

/// In-progress record bound to the form inputs, plus the errors from the last
/// submit attempt and the edit cursor.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    working: Student,
    errors: ValidationErrors,
    edit_cursor: Option<usize>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn working(&self) -> &Student {
        &self.working
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn edit_cursor(&self) -> Option<usize> {
        self.edit_cursor
    }

    pub fn mode(&self) -> FormMode {
        match self.edit_cursor {
            Some(position) => FormMode::Editing(position),
            None => FormMode::Idle,
        }
    }

    /// Label of the submit control for the current mode.
    pub fn submit_label(&self) -> &'static str {
        match self.mode() {
            FormMode::Idle => "Add Data",
            FormMode::Editing(_) => "Edit Data",
        }
    }

    /// Updates one of the scalar inputs. Hobbies go through [`toggle_hobby`].
    ///
    /// [`toggle_hobby`]: FormState::toggle_hobby
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), RegistryError> {
        let value = value.into();
        match field {
            Field::Id => self.working.id = value,
            Field::Name => self.working.name = value,
            Field::Email => self.working.email = value,
            Field::Hobby => {
                return Err(RegistryError::InvalidInput(
                    "hobby is a multi-select; toggle individual hobbies instead".into(),
                ))
            }
        }
        Ok(())
    }

    pub fn toggle_hobby(&mut self, hobby: Hobby, checked: bool) {
        if checked {
            self.working.hobby.insert(hobby);
        } else {
            self.working.hobby.remove(hobby);
        }
    }

    /// Checked state of a hobby checkbox.
    pub fn is_checked(&self, hobby: Hobby) -> bool {
        self.working.hobby.contains(hobby)
    }

    /// Recomputes and stores the validation errors for the working record.
    pub fn validate(&mut self) -> &ValidationErrors {
        self.errors = validate_student(&self.working);
        &self.errors
    }

    pub(crate) fn load_for_edit(&mut self, position: usize, student: Student) {
        self.working = student;
        self.edit_cursor = Some(position);
    }

    pub fn reset(&mut self) {
        self.working = Student::default();
        self.errors.clear();
        self.edit_cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_updates_scalars() {
        let mut form = FormState::new();
        form.set_field(Field::Id, "42").unwrap();
        form.set_field(Field::Name, "Ann").unwrap();
        form.set_field(Field::Email, "a@x.com").unwrap();
        assert_eq!(form.working().id, "42");
        assert_eq!(form.working().name, "Ann");
        assert_eq!(form.working().email, "a@x.com");
    }

    #[test]
    fn hobby_is_not_a_scalar_field() {
        let mut form = FormState::new();
        let err = form.set_field(Field::Hobby, "Read").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidInput(_)));
    }

    #[test]
    fn unchecking_an_unselected_hobby_is_a_no_op() {
        let mut form = FormState::new();
        form.toggle_hobby(Hobby::Read, true);
        form.toggle_hobby(Hobby::Write, true);
        form.toggle_hobby(Hobby::Yoga, false);
        assert!(form.is_checked(Hobby::Read));
        assert!(form.is_checked(Hobby::Write));
        assert_eq!(form.working().hobby.len(), 2);

        form.toggle_hobby(Hobby::Read, false);
        assert!(!form.is_checked(Hobby::Read));
    }

    #[test]
    fn submit_label_follows_mode() {
        let mut form = FormState::new();
        assert_eq!(form.submit_label(), "Add Data");
        form.load_for_edit(2, Student::new("1", "Ann", "a@x.com", [Hobby::Read]));
        assert_eq!(form.mode(), FormMode::Editing(2));
        assert_eq!(form.submit_label(), "Edit Data");
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = FormState::new();
        form.load_for_edit(0, Student::new("1", "Ann", "a", [Hobby::Read]));
        assert!(!form.validate().is_empty());
        form.reset();
        assert_eq!(form.mode(), FormMode::Idle);
        assert!(form.errors().is_empty());
        assert_eq!(form.working(), &Student::default());
    }
}
