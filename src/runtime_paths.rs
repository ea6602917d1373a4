use std::{env, path::PathBuf};

use crate::{APP_ROOT_ENV, SHELL_ROOT_DIR_NAME, SHELL_ROOT_ENV};

fn non_empty_env_path(key: &str) -> Option<PathBuf> {
    let value = env::var(key).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

/// Directory that holds shell-owned data such as logs.
pub fn default_shell_root_dir() -> Option<PathBuf> {
    non_empty_env_path(SHELL_ROOT_ENV)
        .or_else(|| home::home_dir().map(|home| home.join(SHELL_ROOT_DIR_NAME)))
}

/// Directory that holds the entry resource and the compiled front-end.
///
/// Debug builds run straight from the source checkout, so the manifest
/// directory is used; packaged builds resolve next to the executable.
pub fn default_app_root_dir() -> Result<PathBuf, String> {
    if let Some(path) = non_empty_env_path(APP_ROOT_ENV) {
        return Ok(path);
    }

    if cfg!(debug_assertions) {
        return Ok(manifest_root_dir());
    }

    let exe = env::current_exe()
        .map_err(|error| format!("Failed to resolve current executable: {error}"))?;
    exe.parent()
        .map(|dir| dir.to_path_buf())
        .ok_or_else(|| format!("Executable path has no parent: {}", exe.display()))
}

fn manifest_root_dir() -> PathBuf {
    let candidate = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    candidate.canonicalize().unwrap_or(candidate)
}
