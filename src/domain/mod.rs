pub mod student;
pub mod validation;

pub use student::{Hobby, HobbySet, Student};
pub use validation::{validate_student, Field, ValidationErrors};
