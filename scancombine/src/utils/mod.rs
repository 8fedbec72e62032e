//! Path helpers for the command-line surface.
//!
//! Scanned-PDF paths are typed by hand often enough that the CLI accepts a
//! leading `~` and prints paths back in `~` form.

use std::path::{Path, PathBuf};

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// Paths without a tilde, `~user` forms, and paths on systems where the
/// home directory cannot be determined are returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Abbreviate a path under the home directory back to `~` form for display.
pub fn abbreviate_with_tilde(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(rest) = path.strip_prefix(&home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }
    path.display().to_string()
}
