use crate::cli::commands::signed_in;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{CYAN, colorize};
use crate::utils::date::today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if !matches!(cmd, Commands::Overview) {
        return Ok(());
    }

    let (store, identity) = signed_in(cfg)?;
    let dashboard = Dashboard::open(&store, identity);

    for notice in dashboard.notices() {
        warning(notice);
    }

    let stats = dashboard.overview(today());

    header(format!("Hello, {}", dashboard.identity.display_name()));
    println!("Works this month : {}", colorize(&stats.this_month_works.to_string(), CYAN));
    println!("Pending todos    : {}", colorize(&stats.pending_todos.to_string(), CYAN));
    println!("Total works      : {}", stats.total_works);
    println!("Total todos      : {}", stats.total_todos);

    dashboard.close();
    Ok(())
}
