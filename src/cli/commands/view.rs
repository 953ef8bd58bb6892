use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::views;
use crate::core::SortField;

use super::{require_arg, show_students};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("show", "Show the form and the student table", "show", cmd_show),
        CommandEntry::new(
            "search",
            "Filter the current page by name or email",
            "search [text...]",
            cmd_search,
        ),
        CommandEntry::new(
            "sort",
            "Sort all students by a column",
            "sort <name|email>",
            cmd_sort,
        ),
        CommandEntry::new("page", "Jump to a page", "page <n>", cmd_page),
        CommandEntry::new("next", "Go to the next page", "next", cmd_next),
        CommandEntry::new("prev", "Go to the previous page", "prev", cmd_prev),
    ]
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::block(&views::render_form(context.form.form()));
    output::block("");
    show_students(context);
    Ok(())
}

fn cmd_search(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.form.set_search(args.join(" "));
    show_students(context);
    Ok(())
}

fn cmd_sort(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let field: SortField = require_arg(args, 0, "sort <name|email>")?
        .parse()
        .map_err(CommandError::InvalidArguments)?;
    context.form.sort_by(field)?;
    if let Some(direction) = context.form.view().direction() {
        output::info(format!("Sorted {}.", direction));
    }
    show_students(context);
    Ok(())
}

fn cmd_page(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = require_arg(args, 0, "page <n>")?;
    let page: usize = raw
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid page `{}`", raw)))?;
    context.form.go_to_page(page)?;
    show_students(context);
    Ok(())
}

fn cmd_next(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.form.next_page()?;
    show_students(context);
    Ok(())
}

fn cmd_prev(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.form.prev_page()?;
    show_students(context);
    Ok(())
}
