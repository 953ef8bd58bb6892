use crate::{
    domain::{Field, Hobby, Student, ValidationErrors},
    errors::{RegistryError, Result},
    storage::StudentRepository,
};

use super::{
    form_state::{FormMode, FormState},
    list_store::ListStore,
    view_controller::{PageControls, SortField, ViewController, VisibleRow},
};

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added { position: usize },
    Updated { position: usize },
    /// Validation failed; nothing was stored and the form keeps its input.
    Rejected(ValidationErrors),
}

/// The registration component: form state, the persisted student list and
/// the table view, driven one user action at a time.
pub struct RegistrationForm {
    form: FormState,
    store: ListStore,
    view: ViewController,
}

impl RegistrationForm {
    pub fn new(storage: Box<dyn StudentRepository>, page_size: usize) -> Result<Self> {
        Ok(Self {
            form: FormState::new(),
            store: ListStore::load(storage)?,
            view: ViewController::new(page_size),
        })
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn view(&self) -> &ViewController {
        &self.view
    }

    pub fn students(&self) -> &[Student] {
        self.store.students()
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        self.form.set_field(field, value)
    }

    pub fn toggle_hobby(&mut self, hobby: Hobby, checked: bool) {
        self.form.toggle_hobby(hobby, checked);
    }

    /// Validates the working record and, when it passes, appends it or
    /// replaces the record under the edit cursor, persists, and resets the form.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let errors = self.form.validate().clone();
        if !errors.is_empty() {
            tracing::debug!(failures = errors.len(), "submit rejected by validation");
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let student = self.form.working().clone();
        let mut students = self.store.students().to_vec();
        let outcome = match self.form.mode() {
            FormMode::Idle => {
                students.push(student);
                SubmitOutcome::Added {
                    position: students.len() - 1,
                }
            }
            FormMode::Editing(position) => {
                let len = students.len();
                let slot = students
                    .get_mut(position)
                    .ok_or(RegistryError::InvalidPosition { position, len })?;
                *slot = student;
                SubmitOutcome::Updated { position }
            }
        };

        self.store.replace_all(students)?;
        self.form.reset();
        tracing::info!(?outcome, "student saved");
        Ok(outcome)
    }

    /// Copies the student at `position` of the full collection into the form.
    pub fn begin_edit(&mut self, position: usize) -> Result<()> {
        let student = self
            .store
            .get(position)
            .cloned()
            .ok_or(RegistryError::InvalidPosition {
                position,
                len: self.store.len(),
            })?;
        self.form.load_for_edit(position, student);
        Ok(())
    }

    /// Removes the student at `position` and persists. The edit cursor is left
    /// as it is, so an edit in progress may now point at a different record.
    pub fn delete_at(&mut self, position: usize) -> Result<Student> {
        let mut students = self.store.students().to_vec();
        if position >= students.len() {
            return Err(RegistryError::InvalidPosition {
                position,
                len: students.len(),
            });
        }
        let removed = students.remove(position);
        self.store.replace_all(students)?;
        tracing::info!(position, id = %removed.id, "student deleted");
        Ok(removed)
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.view.set_search(query);
    }

    /// Re-sorts and persists the whole collection. The page is not reset.
    pub fn sort_by(&mut self, field: SortField) -> Result<()> {
        let sorted = self.view.sort(self.store.students(), field);
        self.store.replace_all(sorted)?;
        tracing::debug!(?field, direction = ?self.view.direction(), "collection sorted");
        Ok(())
    }

    /// Jumps to a numbered page; only pages that have a button are reachable.
    pub fn go_to_page(&mut self, page: usize) -> Result<()> {
        let total = self.total_pages();
        if page == 0 || page > total {
            return Err(RegistryError::InvalidInput(format!(
                "page {} does not exist ({} page{})",
                page,
                total,
                if total == 1 { "" } else { "s" }
            )));
        }
        self.view.set_page(page);
        Ok(())
    }

    pub fn next_page(&mut self) -> Result<()> {
        if !self.controls().show_next {
            return Err(RegistryError::InvalidInput("already on the last page".into()));
        }
        self.view.set_page(self.view.current_page() + 1);
        Ok(())
    }

    pub fn prev_page(&mut self) -> Result<()> {
        if !self.controls().show_prev {
            return Err(RegistryError::InvalidInput("already on the first page".into()));
        }
        self.view.set_page(self.view.current_page() - 1);
        Ok(())
    }

    pub fn visible_rows(&self) -> Vec<VisibleRow<'_>> {
        self.view.visible(self.store.students())
    }

    pub fn controls(&self) -> PageControls {
        self.view.controls(self.store.len())
    }

    pub fn total_pages(&self) -> usize {
        self.view.total_pages(self.store.len())
    }
}
