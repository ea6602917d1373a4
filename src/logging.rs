use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::{runtime_paths, DESKTOP_LOG_FILE};

pub fn resolve_desktop_log_path(shell_root_dir: Option<PathBuf>, log_file_name: &str) -> PathBuf {
    shell_root_dir
        .unwrap_or_else(std::env::temp_dir)
        .join("logs")
        .join(log_file_name)
}

fn format_log_line(scope: &str, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        scope,
        message
    )
}

pub(crate) fn append_log_to(path: &Path, scope: &str, message: &str) {
    let line = format_log_line(scope, message);

    if cfg!(debug_assertions) {
        eprint!("{line}");
    }

    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = file.write_all(line.as_bytes());
    }
}

pub fn append_log(scope: &str, message: &str) {
    let path = resolve_desktop_log_path(runtime_paths::default_shell_root_dir(), DESKTOP_LOG_FILE);
    append_log_to(&path, scope, message);
}

pub fn append_desktop_log(message: &str) {
    append_log("desktop", message);
}

pub fn append_startup_log(message: &str) {
    append_log("startup", message);
}

pub fn append_watch_log(message: &str) {
    append_log("watch", message);
}

pub fn append_input_log(message: &str) {
    append_log("input", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_desktop_log_path_places_file_under_logs_dir() {
        let path = resolve_desktop_log_path(Some(PathBuf::from("/tmp/shell-root")), "desktop.log");
        assert_eq!(path, PathBuf::from("/tmp/shell-root/logs/desktop.log"));
    }

    #[test]
    fn append_log_to_creates_parent_dirs_and_appends_lines() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("logs").join("desktop.log");

        append_log_to(&path, "startup", "first");
        append_log_to(&path, "watch", "second");

        let contents = fs::read_to_string(&path).expect("read log file");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[startup] first"));
        assert!(lines[1].ends_with("[watch] second"));
    }
}
