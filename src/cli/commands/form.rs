use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::views;
use crate::core::SubmitOutcome;
use crate::domain::{Field, Hobby};

use super::{parse_row, require_arg, show_students};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "set",
            "Fill in a form field",
            "set <id|name|email> <value...>",
            cmd_set,
        ),
        CommandEntry::new(
            "hobby",
            "Check or uncheck a hobby",
            "hobby <Dance|Read|Write|Yoga> [on|off]",
            cmd_hobby,
        ),
        CommandEntry::new(
            "submit",
            "Validate the form and add or update the student",
            "submit",
            cmd_submit,
        ),
        CommandEntry::new("reset", "Clear the form", "reset", cmd_reset),
        CommandEntry::new(
            "edit",
            "Load a row into the form for editing",
            "edit <#>",
            cmd_edit,
        ),
        CommandEntry::new("delete", "Delete a row", "delete <#>", cmd_delete),
        CommandEntry::new("form", "Show the form", "form", cmd_form),
    ]
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let field: Field = require_arg(args, 0, "set <id|name|email> <value...>")?
        .parse()
        .map_err(CommandError::InvalidArguments)?;
    if field == Field::Hobby {
        return Err(CommandError::InvalidArguments(
            "use `hobby <name> [on|off]` to change hobbies".into(),
        ));
    }
    let value = args[1..].join(" ");
    context.form.set_field(field, value)?;
    Ok(())
}

fn cmd_hobby(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let usage = "hobby <Dance|Read|Write|Yoga> [on|off]";
    let hobby: Hobby = require_arg(args, 0, usage)?
        .parse()
        .map_err(CommandError::InvalidArguments)?;
    let checked = match args.get(1).map(|value| value.to_ascii_lowercase()) {
        None => !context.form.form().is_checked(hobby),
        Some(value) if matches!(value.as_str(), "on" | "yes" | "true") => true,
        Some(value) if matches!(value.as_str(), "off" | "no" | "false") => false,
        Some(value) => {
            return Err(CommandError::InvalidArguments(format!(
                "expected `on` or `off`, got `{}`",
                value
            )))
        }
    };
    context.form.toggle_hobby(hobby, checked);
    output::info(format!(
        "{} {}",
        hobby,
        if checked { "checked" } else { "unchecked" }
    ));
    Ok(())
}

fn cmd_submit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.form.submit()? {
        SubmitOutcome::Added { position } => {
            output::success(format!("Student added as row #{}.", position + 1));
            show_students(context);
        }
        SubmitOutcome::Updated { position } => {
            output::success(format!("Row #{} updated.", position + 1));
            show_students(context);
        }
        SubmitOutcome::Rejected(errors) => {
            for (field, message) in errors.iter() {
                output::error(format!("{}: {}", field.label(), message));
            }
        }
    }
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.form.reset_form();
    output::info("Form cleared.");
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let position = parse_row(require_arg(args, 0, "edit <#>")?)?;
    context.form.begin_edit(position)?;
    output::block(&views::render_form(context.form.form()));
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let position = parse_row(require_arg(args, 0, "delete <#>")?)?;
    let removed = context.form.delete_at(position)?;
    output::success(format!("Deleted {} ({}).", removed.name, removed.id));
    show_students(context);
    Ok(())
}

fn cmd_form(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::block(&views::render_form(context.form.form()));
    Ok(())
}
