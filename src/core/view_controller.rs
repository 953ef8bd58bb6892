//! Derives the visible rows from the collection: page slice first, then the
//! search filter over that slice. Sorting reorders the whole collection.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::domain::Student;

/// Columns the table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Email,
}

impl SortField {
    fn key(self, student: &Student) -> &str {
        match self {
            SortField::Name => &student.name,
            SortField::Email => &student.email,
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "email" => Ok(SortField::Email),
            other => Err(format!(
                "cannot sort by `{}` (expected `name` or `email`)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("ascending"),
            SortDirection::Descending => f.write_str("descending"),
        }
    }
}

/// A row selected for display, carrying its position in the full collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    pub position: usize,
    pub student: &'a Student,
}

/// Which pagination controls are shown for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub current: usize,
    pub total_pages: usize,
    pub show_prev: bool,
    pub show_next: bool,
}

impl PageControls {
    /// Page numbers paired with whether each one is the active page.
    pub fn pages(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (1..=self.total_pages).map(move |page| (page, page == self.current))
    }
}

/// Page, search and sort state for the student table.
#[derive(Debug, Clone)]
pub struct ViewController {
    page_size: usize,
    current_page: usize,
    search: String,
    direction: Option<SortDirection>,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewController {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            search: String::new(),
            direction: None,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Direction applied by the most recent sort, `None` before the first.
    pub fn direction(&self) -> Option<SortDirection> {
        self.direction
    }

    /// Glyph shown beside sortable headers.
    pub fn direction_glyph(&self) -> &'static str {
        self.direction.map(SortDirection::glyph).unwrap_or("")
    }

    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Moves to `page` without range checks; out-of-range pages show nothing.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Rows of the current page that match the search, in collection order.
    pub fn visible<'a>(&self, students: &'a [Student]) -> Vec<VisibleRow<'a>> {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.page_size);
        students
            .iter()
            .enumerate()
            .skip(start)
            .take(self.page_size)
            .filter(|(_, student)| student.matches(&self.search))
            .map(|(position, student)| VisibleRow { position, student })
            .collect()
    }

    pub fn controls(&self, len: usize) -> PageControls {
        let total_pages = self.total_pages(len);
        PageControls {
            current: self.current_page,
            total_pages,
            show_prev: self.current_page > 1,
            show_next: self.current_page < total_pages,
        }
    }

    /// Picks the next direction and returns `students` reordered by `field`.
    ///
    /// The first sort is descending; each later sort flips the direction. The
    /// comparison is case-sensitive and stable. The current page is kept.
    pub fn sort(&mut self, students: &[Student], field: SortField) -> Vec<Student> {
        let direction = match self.direction {
            None => SortDirection::Descending,
            Some(previous) => previous.toggled(),
        };
        self.direction = Some(direction);

        let mut sorted = students.to_vec();
        sorted.sort_by(|a, b| {
            let ordering: Ordering = field.key(a).cmp(field.key(b));
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Hobby;

    fn named(names: &[&str]) -> Vec<Student> {
        names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                Student::new(
                    idx.to_string(),
                    *name,
                    format!("{}@x.com", name.to_lowercase()),
                    [Hobby::Read],
                )
            })
            .collect()
    }

    fn names(rows: &[VisibleRow<'_>]) -> Vec<String> {
        rows.iter().map(|row| row.student.name.clone()).collect()
    }

    #[test]
    fn seven_records_span_three_pages() {
        let students = named(&["a", "b", "c", "d", "e", "f", "g"]);
        let mut view = ViewController::default();
        assert_eq!(view.total_pages(students.len()), 3);

        let first = view.controls(students.len());
        assert!(!first.show_prev);
        assert!(first.show_next);

        view.set_page(3);
        let rows = view.visible(&students);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].position, 6);
        let last = view.controls(students.len());
        assert!(last.show_prev);
        assert!(!last.show_next);
        assert_eq!(
            last.pages().collect::<Vec<_>>(),
            vec![(1, false), (2, false), (3, true)]
        );
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let view = ViewController::default();
        let controls = view.controls(0);
        assert_eq!(controls.total_pages, 0);
        assert!(!controls.show_prev);
        assert!(!controls.show_next);
        assert!(view.visible(&[]).is_empty());
    }

    #[test]
    fn search_only_filters_the_current_page() {
        let students = named(&["Ann", "Bob", "Cid", "Dana"]);
        let mut view = ViewController::default();
        view.set_search("an");
        assert_eq!(names(&view.visible(&students)), vec!["Ann"]);

        view.set_page(2);
        let rows = view.visible(&students);
        assert_eq!(names(&rows), vec!["Dana"]);
        assert_eq!(rows[0].position, 3);
    }

    #[test]
    fn search_matches_email_too() {
        let students = vec![
            Student::new("1", "Ann", "ann@school.org", [Hobby::Read]),
            Student::new("2", "Bob", "bob@home.net", [Hobby::Yoga]),
        ];
        let mut view = ViewController::default();
        view.set_search("SCHOOL");
        assert_eq!(names(&view.visible(&students)), vec!["Ann"]);
    }

    #[test]
    fn out_of_range_page_shows_nothing() {
        let students = named(&["a", "b"]);
        let mut view = ViewController::default();
        view.set_page(4);
        assert!(view.visible(&students).is_empty());
        view.set_page(0);
        assert_eq!(view.visible(&students).len(), 2);
    }

    #[test]
    fn first_sort_is_descending_and_case_sensitive() {
        let students = named(&["Bob", "ann", "Cid"]);
        let mut view = ViewController::default();
        assert_eq!(view.direction_glyph(), "");

        let sorted = view.sort(&students, SortField::Name);
        let order: Vec<&str> = sorted.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(order, vec!["ann", "Cid", "Bob"]);
        assert_eq!(view.direction(), Some(SortDirection::Descending));
        assert_eq!(view.direction_glyph(), "▼");
    }

    #[test]
    fn repeated_sorts_alternate_direction() {
        let students = named(&["Bob", "Ann", "Cid"]);
        let mut view = ViewController::default();
        let first = view.sort(&students, SortField::Name);
        let second = view.sort(&first, SortField::Name);
        let order: Vec<&str> = second.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(order, vec!["Ann", "Bob", "Cid"]);
        assert_eq!(view.direction(), Some(SortDirection::Ascending));

        view.sort(&second, SortField::Email);
        assert_eq!(view.direction(), Some(SortDirection::Descending));
    }

    #[test]
    fn sort_keeps_current_page() {
        let students = named(&["a", "b", "c", "d"]);
        let mut view = ViewController::default();
        view.set_page(2);
        view.sort(&students, SortField::Email);
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn sort_field_parses() {
        assert_eq!("Name".parse::<SortField>(), Ok(SortField::Name));
        assert_eq!("email".parse::<SortField>(), Ok(SortField::Email));
        assert!("id".parse::<SortField>().is_err());
    }
}
