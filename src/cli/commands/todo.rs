use crate::cli::commands::signed_in;
use crate::cli::parser::{Commands, TodoAction};
use crate::config::Config;
use crate::core::confirm::{DeleteOutcome, TerminalConfirm};
use crate::core::pagination::paginate;
use crate::core::todo::TodoManager;
use crate::errors::AppResult;
use crate::models::TodoEntry;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::color_for_status;
use crate::utils::date::{parse_date, parse_time, todo_date};
use crate::utils::formatting::page_footer;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Todo { action } = cmd else {
        return Ok(());
    };

    let (store, identity) = signed_in(cfg)?;
    let mut todos = TodoManager::open(&store, &identity);

    let result = run(&mut todos, action);
    todos.close();
    result
}

fn run(todos: &mut TodoManager<'_>, action: &TodoAction) -> AppResult<()> {
    match action {
        TodoAction::Add { date, time, reason } => {
            let d = parse_date(date)?;
            let t = parse_time(time)?;
            let entry = todos.create(d, t, reason)?;
            success(format!(
                "Todo for {} at {} saved (id {}).",
                todo_date(entry.date),
                entry.time_str(),
                entry.short_id()
            ));
        }

        TodoAction::Edit {
            id,
            date,
            time,
            reason,
        } => {
            let id = todos.resolve_id(id)?;
            let d = parse_date(date)?;
            let t = parse_time(time)?;
            todos.update(&id, d, t, reason)?;
            success("Todo updated.");
        }

        TodoAction::Toggle { id } => {
            let id = todos.resolve_id(id)?;
            if todos.toggle(&id)? {
                success("Todo marked as completed.");
            } else {
                success("Todo marked as pending.");
            }
        }

        TodoAction::Del { id } => {
            let id = todos.resolve_id(id)?;
            match todos.delete(&id, &mut TerminalConfirm)? {
                DeleteOutcome::Deleted => success("Todo deleted."),
                DeleteOutcome::Cancelled => info("Deletion cancelled."),
            }
        }

        TodoAction::List { page } => {
            if let Some(notice) = todos.notice() {
                warning(notice);
            }

            header(format!("Todos ({} pending)", todos.pending_count()));

            if todos.entries().is_empty() {
                info("No todos yet.");
                return Ok(());
            }

            let page = paginate(todos.entries(), *page);
            print_todos(page.items);
            println!("\n{}", page_footer(&page));
        }
    }

    Ok(())
}

pub(crate) fn print_todos<'a>(items: impl IntoIterator<Item = &'a TodoEntry>) {
    let mut table = todo_table();
    for t in items {
        add_todo_row(&mut table, t);
    }
    print!("{}", table.render());
}

fn todo_table() -> Table {
    Table::new(vec![
        Column::new("ID", 8),
        Column::new("Date", 10),
        Column::new("Time", 5),
        Column::new("Status", 9),
        Column::new("Reason", 60),
    ])
}

fn add_todo_row(table: &mut Table, t: &TodoEntry) {
    let row = vec![
        t.short_id().to_string(),
        todo_date(t.date),
        t.time_str(),
        t.status_label().to_string(),
        t.reason.clone(),
    ];
    table.add_colored_row(row, color_for_status(t.completed));
}
