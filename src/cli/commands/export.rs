use crate::cli::commands::{resolve_range, signed_in};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::confirm::TerminalConfirm;
use crate::core::work::WorkManager;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportOutcome};
use crate::utils::date::today;

/// Export the filtered work history (never just the visible page).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Export {
        format,
        range,
        dir,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let today = today();
    let range = resolve_range(range, today)?;
    let dir = dir.as_deref().unwrap_or(&cfg.export_dir);

    let (store, identity) = signed_in(cfg)?;
    let works = WorkManager::open(&store, &identity);

    let outcome = ExportLogic::export(
        &works.filter(&range),
        &range,
        *format,
        dir,
        today,
        *force,
        &mut TerminalConfirm,
    );
    works.close();

    if let ExportOutcome::Written(path) = outcome? {
        let _ = store.log(
            "export",
            format.as_str(),
            &format!("{} ({})", path.display(), range.label()),
        );
    }

    Ok(())
}
