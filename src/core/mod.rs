pub mod form_state;
pub mod list_store;
pub mod registration_form;
pub mod view_controller;

pub use form_state::{FormMode, FormState};
pub use list_store::ListStore;
pub use registration_form::{RegistrationForm, SubmitOutcome};
pub use view_controller::{PageControls, SortDirection, SortField, ViewController, VisibleRow};
