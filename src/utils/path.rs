//! Path utilities: expand ~ and build export file locations.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Join a file name onto a (possibly `~`-prefixed) directory.
pub fn in_dir(dir: &str, file_name: &str) -> PathBuf {
    let base = expand_tilde(dir);
    if base.as_os_str().is_empty() {
        return Path::new(file_name).to_path_buf();
    }
    base.join(file_name)
}
