use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::student::Student;

/// Coarse `<non-space>@<non-space>.<non-space>` check, not RFC validation.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Fields exposed by the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Id,
    Name,
    Email,
    Hobby,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Id, Field::Name, Field::Email, Field::Hobby];

    pub fn key(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Email => "email",
            Field::Hobby => "hobby",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Id => "Id",
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Hobby => "Hobby",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let needle = input.trim();
        Field::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("unknown field `{}`", input))
    }
}

/// Field name → message for every rule the working record breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Checks every rule independently so all failures surface at once.
pub fn validate_student(student: &Student) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if student.id.is_empty() {
        errors.insert(Field::Id, "Id is required.");
    }
    if student.name.is_empty() {
        errors.insert(Field::Name, "Name is required.");
    }
    if student.email.is_empty() {
        errors.insert(Field::Email, "Email is required.");
    } else if !EMAIL_PATTERN.is_match(&student.email) {
        errors.insert(Field::Email, "Invalid Email.");
    }
    if student.hobby.is_empty() {
        errors.insert(Field::Hobby, "Hobby is required.");
    }
    errors
}
