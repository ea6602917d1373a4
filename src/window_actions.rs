use tauri::AppHandle;

use crate::{main_window, ui_dispatch, MAIN_WINDOW_LABEL};

pub fn open_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    main_window::ensure_main_window(app_handle, log);
}

pub fn handle_window_destroyed<F>(app_handle: &AppHandle, label: &str, log: F)
where
    F: Fn(&str),
{
    if label != MAIN_WINDOW_LABEL {
        return;
    }
    main_window::forget_main_window(app_handle, log);
}

/// Reload requests arrive on the watcher thread; the window is only touched
/// from the main thread.
pub fn schedule_main_window_reload<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str) + Copy + Send + 'static,
{
    if let Err(error) =
        ui_dispatch::run_on_main_thread_dispatch(app_handle, "reload main window", move |main_app| {
            main_window::reload_main_window(main_app, log);
        })
    {
        log(&error);
    }
}
