use std::{path::Path, sync::Mutex};

use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use url::Url;

use crate::{
    key_bridge,
    window_controller::{WindowController, WindowHost},
    KeyForwarder, ENTRY_RESOURCE_FILE, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL, MAIN_WINDOW_TITLE,
    MAIN_WINDOW_WIDTH,
};

pub fn entry_resource_url(app_root: &Path) -> Result<Url, String> {
    let entry_path = app_root.join(ENTRY_RESOURCE_FILE);
    Url::from_file_path(&entry_path)
        .map_err(|_| format!("Entry resource path is not absolute: {}", entry_path.display()))
}

pub struct TauriWindowHost {
    app_handle: AppHandle,
    entry_url: Url,
    devtools_enabled: bool,
}

impl TauriWindowHost {
    pub fn new(app_handle: AppHandle, entry_url: Url, devtools_enabled: bool) -> Self {
        Self {
            app_handle,
            entry_url,
            devtools_enabled,
        }
    }
}

impl WindowHost for TauriWindowHost {
    type Window = WebviewWindow;

    fn create_window(&self) -> Result<WebviewWindow, String> {
        let editing = self.app_handle.state::<KeyForwarder>().is_editing();
        let key_bridge_script = key_bridge::render_key_bridge_script(editing)?;

        let window = WebviewWindowBuilder::new(
            &self.app_handle,
            MAIN_WINDOW_LABEL,
            WebviewUrl::External(self.entry_url.clone()),
        )
        .title(MAIN_WINDOW_TITLE)
        .inner_size(MAIN_WINDOW_WIDTH, MAIN_WINDOW_HEIGHT)
        .initialization_script(&key_bridge_script)
        .build()
        .map_err(|error| format!("Failed to create main window: {error}"))?;

        if self.devtools_enabled {
            window.open_devtools();
        }

        Ok(window)
    }

    fn reload_window(&self, window: &WebviewWindow) -> Result<(), String> {
        window
            .reload()
            .map_err(|error| format!("Failed to reload main window: {error}"))
    }
}

pub struct MainWindowState {
    pub(crate) controller: Mutex<WindowController<TauriWindowHost>>,
}

impl MainWindowState {
    pub fn new(host: TauriWindowHost) -> Self {
        Self {
            controller: Mutex::new(WindowController::new(host)),
        }
    }
}

pub fn ensure_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(state) = app_handle.try_state::<MainWindowState>() else {
        log("ensure_main_window skipped: window state not initialized");
        return;
    };
    let Ok(mut controller) = state.controller.lock() else {
        log("ensure_main_window skipped: window controller lock poisoned");
        return;
    };

    match controller.ensure_window() {
        Ok(true) => log("main window created"),
        Ok(false) => {}
        Err(error) => log(&error),
    }
}

pub fn forget_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(state) = app_handle.try_state::<MainWindowState>() else {
        return;
    };
    match state.controller.lock() {
        Ok(mut controller) => {
            if controller.has_window() {
                log("main window closed");
            }
            controller.on_window_closed();
        }
        Err(_) => log("forget_main_window skipped: window controller lock poisoned"),
    };
}

pub fn reload_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(state) = app_handle.try_state::<MainWindowState>() else {
        return;
    };
    let Ok(controller) = state.controller.lock() else {
        log("reload_main_window skipped: window controller lock poisoned");
        return;
    };

    match controller.on_reload_requested() {
        Ok(true) => log("main window reloaded"),
        Ok(false) => log("reload_main_window skipped: main window not open"),
        Err(error) => log(&error),
    }
}
