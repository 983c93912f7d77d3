use crate::core::confirm::Confirmer;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Whether `path` may be (over)written.
///
/// - missing file → ok
/// - existing file with `force` → ok
/// - existing file otherwise → the confirmer decides
pub(crate) fn ensure_writable(
    path: &Path,
    force: bool,
    confirmer: &mut dyn Confirmer,
) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    let message = format!("The file '{}' already exists. Overwrite?", path.display());
    if confirmer.confirm("Overwrite Report", &message) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "Export cancelled: existing file not overwritten".into(),
        ))
    }
}

pub(crate) fn ensure_dir(dir: &Path) -> AppResult<()> {
    if !dir.as_os_str().is_empty() && !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
