pub const MAIN_WINDOW_LABEL: &str = "main";
pub const MAIN_WINDOW_TITLE: &str = "Elm Desktop Shell";
pub const MAIN_WINDOW_WIDTH: f64 = 1024.0;
pub const MAIN_WINDOW_HEIGHT: f64 = 728.0;

pub const ENTRY_RESOURCE_FILE: &str = "index.html";
pub const WATCH_PATTERNS: [&str; 2] = ["index.html", "build/*"];

pub const KEYS_EVENT: &str = "keys";
pub const KEY_BRIDGE_GLOBAL: &str = "__ELM_SHELL_KEYS__";

pub const DESKTOP_LOG_FILE: &str = "desktop.log";
pub const SHELL_ROOT_DIR_NAME: &str = ".elm-desktop-shell";

pub const APP_ROOT_ENV: &str = "ELM_SHELL_APP_ROOT";
pub const DEVTOOLS_ENV: &str = "ELM_SHELL_DEVTOOLS";
pub const SHELL_ROOT_ENV: &str = "ELM_SHELL_ROOT";
