//! Text renderings of the registration form, the student table and the
//! pagination bar.

use crate::core::{FormMode, FormState, PageControls, RegistrationForm};
use crate::domain::{Field, Hobby};

use super::table::{Table, TableColumn};

const LABEL_WIDTH: usize = 6;
const CELL_MAX_WIDTH: usize = 32;

pub fn render_form(form: &FormState) -> String {
    let working = form.working();
    let mut lines = vec!["Student Registration".to_string()];

    for (field, value) in [
        (Field::Id, working.id.as_str()),
        (Field::Name, working.name.as_str()),
        (Field::Email, working.email.as_str()),
    ] {
        lines.push(format!("  {:<LABEL_WIDTH$} {}", format!("{}:", field.label()), value));
        push_error(&mut lines, form, field);
    }

    let boxes: Vec<String> = Hobby::ALL
        .iter()
        .map(|hobby| {
            let mark = if form.is_checked(*hobby) { 'x' } else { ' ' };
            format!("[{}] {}", mark, hobby)
        })
        .collect();
    lines.push(format!("  {:<LABEL_WIDTH$} {}", "Hobby:", boxes.join("  ")));
    push_error(&mut lines, form, Field::Hobby);

    let action = match form.mode() {
        FormMode::Idle => form.submit_label().to_string(),
        FormMode::Editing(position) => {
            format!("{} (row #{})", form.submit_label(), position + 1)
        }
    };
    lines.push(format!("  <{}>", action));
    lines.join("\n")
}

fn push_error(lines: &mut Vec<String>, form: &FormState, field: Field) {
    if let Some(message) = form.errors().get(field) {
        lines.push(format!("  {:<LABEL_WIDTH$} ! {}", "", message));
    }
}

/// The visible rows of the current page. Row numbers are positions in the
/// full collection, counted from 1, and are what `edit`/`delete` expect.
pub fn render_students(registry: &RegistrationForm) -> String {
    let glyph = registry.view().direction_glyph();
    let sortable = |title: &str| {
        if glyph.is_empty() {
            title.to_string()
        } else {
            format!("{} {}", title, glyph)
        }
    };

    let mut table = Table::new(vec![
        TableColumn::new("#").right_aligned(),
        TableColumn::new("Id").with_max_width(CELL_MAX_WIDTH),
        TableColumn::new(sortable("Name")).with_max_width(CELL_MAX_WIDTH),
        TableColumn::new(sortable("Email")).with_max_width(CELL_MAX_WIDTH),
        TableColumn::new("Hobby").with_max_width(CELL_MAX_WIDTH),
    ]);

    for row in registry.visible_rows() {
        table.push_row(vec![
            (row.position + 1).to_string(),
            row.student.id.clone(),
            row.student.name.clone(),
            row.student.email.clone(),
            row.student.hobby.to_string(),
        ]);
    }

    let mut out = table.render();
    if table.rows.is_empty() {
        out.push_str("\n(no students to show)");
    }
    let pagination = render_pagination(&registry.controls());
    if !pagination.is_empty() {
        out.push('\n');
        out.push_str(&pagination);
    }
    if !registry.view().search().is_empty() {
        out.push_str(&format!("\nsearch: \"{}\"", registry.view().search()));
    }
    out
}

/// `Prev 1 [2] 3 Next`, with Prev/Next only where they apply.
pub fn render_pagination(controls: &PageControls) -> String {
    let mut parts = Vec::new();
    if controls.show_prev {
        parts.push("Prev".to_string());
    }
    for (page, active) in controls.pages() {
        if active {
            parts.push(format!("[{}]", page));
        } else {
            parts.push(page.to_string());
        }
    }
    if controls.show_next {
        parts.push("Next".to_string());
    }
    parts.join(" ")
}
