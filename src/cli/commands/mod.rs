pub mod form;
pub mod system;
pub mod view;

use crate::cli::core::{CommandError, ShellContext};
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::ui::views;

const ROOT_COMMAND_ORDER: &[&str] = &[
    "show", "form", "set", "hobby", "submit", "reset", "edit", "delete", "search", "sort",
    "page", "next", "prev", "help", "version", "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(form::definitions());
    commands.extend(view::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut entries = all_entries();
    entries.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| entry.name.eq_ignore_ascii_case(name))
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    for entry in entries {
        registry.register(entry);
    }
}

fn require_arg<'a>(args: &[&'a str], idx: usize, usage: &str) -> Result<&'a str, CommandError> {
    args.get(idx)
        .copied()
        .ok_or_else(|| CommandError::InvalidArguments(format!("usage: {}", usage)))
}

/// Converts a 1-based row number into a collection position.
fn parse_row(raw: &str) -> Result<usize, CommandError> {
    match raw.trim_start_matches('#').parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row - 1),
        _ => Err(CommandError::InvalidArguments(format!(
            "invalid row `{}` (use the # column of the table)",
            raw
        ))),
    }
}

fn show_students(context: &ShellContext) {
    output::block(&views::render_students(&context.form));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_has_a_slot_in_the_order() {
        for entry in all_entries() {
            assert!(
                ROOT_COMMAND_ORDER.contains(&entry.name),
                "`{}` missing from ROOT_COMMAND_ORDER",
                entry.name
            );
        }
    }

    #[test]
    fn rows_are_one_based() {
        assert_eq!(parse_row("1").unwrap(), 0);
        assert_eq!(parse_row("#3").unwrap(), 2);
        assert!(parse_row("0").is_err());
        assert!(parse_row("x").is_err());
    }
}
