use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// The fixed list of hobbies a student can select.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Hobby {
    Dance,
    Read,
    Write,
    Yoga,
}

impl Hobby {
    /// All hobbies in the order the form presents them.
    pub const ALL: [Hobby; 4] = [Hobby::Dance, Hobby::Read, Hobby::Write, Hobby::Yoga];

    pub fn label(self) -> &'static str {
        match self {
            Hobby::Dance => "Dance",
            Hobby::Read => "Read",
            Hobby::Write => "Write",
            Hobby::Yoga => "Yoga",
        }
    }
}

impl fmt::Display for Hobby {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Hobby {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let needle = input.trim();
        Hobby::ALL
            .into_iter()
            .find(|hobby| hobby.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                let options: Vec<&str> = Hobby::ALL.iter().map(|h| h.label()).collect();
                format!(
                    "unknown hobby `{}` (expected one of: {})",
                    input,
                    options.join(", ")
                )
            })
    }
}

/// Selected hobbies, kept in the order they were checked and free of
/// duplicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct HobbySet(Vec<Hobby>);

impl HobbySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, hobby: Hobby) -> bool {
        self.0.contains(&hobby)
    }

    /// Returns `false` when the hobby was already selected.
    pub fn insert(&mut self, hobby: Hobby) -> bool {
        if self.contains(hobby) {
            return false;
        }
        self.0.push(hobby);
        true
    }

    /// Returns `false` when the hobby was not selected.
    pub fn remove(&mut self, hobby: Hobby) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| *existing != hobby);
        self.0.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Hobby> + '_ {
        self.0.iter().copied()
    }
}

/// Reads a stored hobby list, treating `null` like an absent list.
fn hobby_or_empty<'de, D>(deserializer: D) -> Result<HobbySet, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<HobbySet>::deserialize(deserializer)?.unwrap_or_default())
}

impl FromIterator<Hobby> for HobbySet {
    fn from_iter<I: IntoIterator<Item = Hobby>>(iter: I) -> Self {
        let mut set = HobbySet::new();
        for hobby in iter {
            set.insert(hobby);
        }
        set
    }
}

impl fmt::Display for HobbySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("No Hobby");
        }
        let labels: Vec<&str> = self.iter().map(Hobby::label).collect();
        f.write_str(&labels.join(", "))
    }
}

/// One registered student.
///
/// Every field defaults when absent so records edited outside the registry
/// still load; a missing or `null` hobby list renders as "No Hobby".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "hobby_or_empty")]
    pub hobby: HobbySet,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        hobby: impl IntoIterator<Item = Hobby>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            hobby: hobby.into_iter().collect(),
        }
    }

    /// Case-insensitive substring match against name or email. An empty query
    /// matches every student.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.email.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hobby_parses_case_insensitively() {
        assert_eq!("yoga".parse::<Hobby>(), Ok(Hobby::Yoga));
        assert_eq!(" READ ".parse::<Hobby>(), Ok(Hobby::Read));
        assert!("Chess".parse::<Hobby>().is_err());
    }

    #[test]
    fn hobby_set_keeps_selection_order_without_duplicates() {
        let mut set = HobbySet::new();
        assert!(set.insert(Hobby::Yoga));
        assert!(set.insert(Hobby::Dance));
        assert!(!set.insert(Hobby::Yoga));
        assert_eq!(set.to_string(), "Yoga, Dance");

        assert!(!set.remove(Hobby::Read));
        assert!(set.remove(Hobby::Yoga));
        assert_eq!(set.to_string(), "Dance");
    }

    #[test]
    fn empty_hobby_set_displays_placeholder() {
        assert_eq!(HobbySet::new().to_string(), "No Hobby");
    }

    #[test]
    fn student_loads_without_hobby_field() {
        let student: Student =
            serde_json::from_str(r#"{"id":"7","name":"Eve","email":"e@x.io"}"#).unwrap();
        assert!(student.hobby.is_empty());
        assert_eq!(student.name, "Eve");
    }

    #[test]
    fn student_loads_with_null_hobby() {
        let student: Student = serde_json::from_str(
            r#"{"id":"1","name":"Ann","email":"a@x.com","hobby":null}"#,
        )
        .unwrap();
        assert!(student.hobby.is_empty());
        assert_eq!(student.hobby.to_string(), "No Hobby");
    }

    #[test]
    fn student_serializes_hobbies_as_labels() {
        let student = Student::new("1", "Ann", "a@x.com", [Hobby::Read, Hobby::Write]);
        let json = serde_json::to_string(&student).unwrap();
        assert_eq!(
            json,
            r#"{"id":"1","name":"Ann","email":"a@x.com","hobby":["Read","Write"]}"#
        );
    }

    #[test]
    fn matches_name_or_email_ignoring_case() {
        let student = Student::new("1", "Ann", "contact@Example.com", [Hobby::Read]);
        assert!(student.matches("an"));
        assert!(student.matches("EXAMPLE"));
        assert!(student.matches(""));
        assert!(!student.matches("bob"));
    }
}
