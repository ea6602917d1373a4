use std::{env, path::PathBuf};

use crate::{runtime_paths, DEVTOOLS_ENV};

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub app_root: PathBuf,
    pub devtools_enabled: bool,
}

impl ShellConfig {
    pub fn from_env() -> Result<Self, String> {
        let app_root = runtime_paths::default_app_root_dir()?;
        let devtools_enabled = parse_toggle(env::var(DEVTOOLS_ENV).ok().as_deref(), true);
        Ok(Self {
            app_root,
            devtools_enabled,
        })
    }
}

pub(crate) fn parse_toggle(raw: Option<&str>, default_value: bool) -> bool {
    let Some(raw) = raw else {
        return default_value;
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => true,
        "0" | "false" | "off" | "no" => false,
        _ => default_value,
    }
}
