//! Path utilities: expand ~, make input paths absolute, check they exist.

use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Resolve a user supplied input path to an absolute one.
/// Fails with `AppError::Path` when nothing exists there.
pub fn resolve_input(raw: &str) -> AppResult<PathBuf> {
    let mut path = expand_tilde(raw);

    if !path.is_absolute() {
        path = std::env::current_dir()?.join(path);
    }

    if !path.exists() {
        return Err(AppError::Path(path.display().to_string()));
    }

    Ok(path)
}

pub fn resolve_inputs(raws: &[String]) -> AppResult<Vec<PathBuf>> {
    raws.iter().map(|r| resolve_input(r)).collect()
}
