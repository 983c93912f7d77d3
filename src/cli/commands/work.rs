use crate::cli::commands::{resolve_range, signed_in};
use crate::cli::parser::{Commands, WorkAction};
use crate::config::Config;
use crate::core::confirm::{DeleteOutcome, TerminalConfirm};
use crate::core::pagination::paginate;
use crate::core::work::WorkManager;
use crate::errors::AppResult;
use crate::models::WorkEntry;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::date::{display_date, parse_date, today};
use crate::utils::formatting::page_footer;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Work { action } = cmd else {
        return Ok(());
    };

    let (store, identity) = signed_in(cfg)?;
    let mut works = WorkManager::open(&store, &identity);

    let result = run(&mut works, action);
    works.close();
    result
}

fn run(works: &mut WorkManager<'_>, action: &WorkAction) -> AppResult<()> {
    match action {
        WorkAction::Add { date, description } => {
            let d = parse_date(date)?;
            let entry = works.create(d, description)?;
            success(format!(
                "Work for {} saved (id {}).",
                display_date(entry.date),
                entry.short_id()
            ));
        }

        WorkAction::Edit {
            id,
            date,
            description,
        } => {
            let id = works.resolve_id(id)?;
            let d = parse_date(date)?;
            if works.date_taken_by_other(&id, d) {
                warning(format!(
                    "Another work entry already exists for {}.",
                    display_date(d)
                ));
            }
            works.update(&id, d, description)?;
            success("Work entry updated.");
        }

        WorkAction::Del { id } => {
            let id = works.resolve_id(id)?;
            match works.delete(&id, &mut TerminalConfirm)? {
                DeleteOutcome::Deleted => success("Work entry deleted."),
                DeleteOutcome::Cancelled => info("Deletion cancelled."),
            }
        }

        WorkAction::List { range, page } => {
            let today = today();
            let range = resolve_range(range, today)?;
            let filtered = works.filter(&range);

            if let Some(notice) = works.notice() {
                warning(notice);
            }

            header(format!("Work History ({})", range.label()));

            if filtered.is_empty() {
                info("No work entries in this period.");
                return Ok(());
            }

            let page = paginate(&filtered, *page);
            print_works(page.items.iter().copied());
            println!("\n{}", page_footer(&page));
        }
    }

    Ok(())
}

pub(crate) fn print_works<'a>(items: impl IntoIterator<Item = &'a WorkEntry>) {
    let mut table = Table::new(vec![
        Column::new("ID", 8),
        Column::new("Date", 10),
        Column::new("Description", 70),
    ]);

    for w in items {
        table.add_row(vec![
            w.short_id().to_string(),
            display_date(w.date),
            w.description.clone(),
        ]);
    }

    print!("{}", table.render());
}
