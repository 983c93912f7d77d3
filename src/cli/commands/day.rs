use crate::cli::commands::signed_in;
use crate::cli::commands::todo::print_todos;
use crate::cli::commands::work::print_works;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, warning};
use crate::utils::date::{parse_date, today};

/// Calendar view of one day: its work entry and its todos.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Day { date } = cmd else {
        return Ok(());
    };

    let selected = match date {
        Some(s) => parse_date(s)?,
        None => today(),
    };

    let (store, identity) = signed_in(cfg)?;
    let dashboard = Dashboard::open(&store, identity);

    for notice in dashboard.notices() {
        warning(notice);
    }

    {
        let day = dashboard.day_view(selected);
        header(day.title());

        if day.works.is_empty() {
            info("No work logged for this day.");
        } else {
            print_works(day.works.iter().copied());
        }

        println!("\n{}", day.heading());
        if day.todos.is_empty() {
            info("No tasks for this day.");
        } else {
            print_todos(day.todos.iter().copied());
        }
    }

    dashboard.close();
    Ok(())
}
