use std::path::Path;

use tauri::{webview::PageLoadEvent, AppHandle, Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_input_log, append_startup_log, append_watch_log, exit_events,
    file_watcher::{FileWatcher, WatchSet},
    key_bridge,
    main_window::{self, MainWindowState, TauriWindowHost},
    shell_config::ShellConfig,
    window_actions, FileWatcherState, KeyForwarder, DESKTOP_LOG_FILE, MAIN_WINDOW_LABEL,
    WATCH_PATTERNS,
};

fn start_file_watcher(app_handle: &AppHandle, app_root: &Path) {
    let watch_set = match WatchSet::from_patterns(app_root, &WATCH_PATTERNS) {
        Ok(watch_set) => watch_set,
        Err(error) => {
            append_watch_log(&format!("invalid watch patterns, reload disabled: {error}"));
            return;
        }
    };

    let reload_handle = app_handle.clone();
    match FileWatcher::start(
        watch_set,
        move |_| window_actions::schedule_main_window_reload(&reload_handle, append_desktop_log),
        append_watch_log,
    ) {
        Ok(watcher) => {
            if watcher.attached_roots().is_empty() {
                append_watch_log("no watch roots exist yet; reload on change is inactive");
            }
            if !app_handle.manage(FileWatcherState::new(watcher)) {
                append_watch_log("file watcher state already exists, skipping manage");
            }
        }
        Err(error) => append_watch_log(&format!("file watcher unavailable: {error}")),
    }
}

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        crate::logging::resolve_desktop_log_path(
            crate::runtime_paths::default_shell_root_dir(),
            DESKTOP_LOG_FILE,
        )
        .display()
    ));

    tauri::Builder::default()
        .manage(KeyForwarder::default())
        .invoke_handler(tauri::generate_handler![
            crate::key_bridge_commands::key_forwarder_key_down,
            crate::key_bridge_commands::key_forwarder_set_editing,
        ])
        .on_page_load(|webview, payload| match payload.event() {
            PageLoadEvent::Started => {
                append_desktop_log(&format!("page-load started: {}", payload.url()));
            }
            PageLoadEvent::Finished => {
                append_desktop_log(&format!("page-load finished: {}", payload.url()));
                if webview.label() == MAIN_WINDOW_LABEL {
                    key_bridge::sync_editing_into_webview(webview, append_input_log);
                }
            }
        })
        .setup(|app| {
            let app_handle = app.handle().clone();
            let config = ShellConfig::from_env().inspect_err(|error| {
                append_startup_log(&format!("failed to resolve shell config: {error}"));
            })?;
            append_startup_log(&format!(
                "app root: {} (devtools {})",
                config.app_root.display(),
                if config.devtools_enabled { "on" } else { "off" }
            ));

            let entry_url = main_window::entry_resource_url(&config.app_root)?;
            append_startup_log(&format!("entry resource: {entry_url}"));
            app.manage(MainWindowState::new(TauriWindowHost::new(
                app_handle.clone(),
                entry_url,
                config.devtools_enabled,
            )));

            start_file_watcher(&app_handle, &config.app_root);
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::Ready => {
                window_actions::open_main_window(app_handle, append_desktop_log);
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                window_actions::open_main_window(app_handle, append_desktop_log);
            }
            RunEvent::WindowEvent {
                label,
                event: WindowEvent::Destroyed,
                ..
            } => {
                window_actions::handle_window_destroyed(app_handle, &label, append_desktop_log);
            }
            RunEvent::ExitRequested { code, api, .. } => {
                exit_events::handle_exit_requested(code, &api, append_desktop_log);
            }
            _ => {}
        });
}
