#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod exit_events;
mod file_watcher;
mod key_bridge;
mod key_bridge_commands;
mod key_forwarder;
mod logging;
mod main_window;
mod runtime_paths;
mod shell_config;
mod ui_dispatch;
mod window_actions;
mod window_controller;

pub(crate) use app_constants::*;
pub(crate) use app_types::FileWatcherState;
pub(crate) use key_forwarder::{KeyDisposition, KeyEvent, KeyForwarder, KeyPayload};
pub(crate) use logging::{
    append_desktop_log, append_input_log, append_startup_log, append_watch_log,
};

fn main() {
    app_runtime::run();
}
