use tauri::{AppHandle, Emitter, Manager};

use crate::{
    append_input_log, key_bridge, KeyDisposition, KeyEvent, KeyForwarder, KeyPayload, KEYS_EVENT,
    MAIN_WINDOW_LABEL,
};

fn emit_key_payload<F>(app_handle: &AppHandle, payload: KeyPayload, log: F)
where
    F: Fn(&str),
{
    if let Err(error) = app_handle.emit_to(MAIN_WINDOW_LABEL, KEYS_EVENT, payload) {
        log(&format!("failed to forward key to front-end: {error}"));
    }
}

/// Runs one keydown through the forwarder and emits the `keys` payload.
///
/// The webview has already applied `preventDefault()` by the time this runs,
/// so the returned disposition is informational and the bridge ignores it.
#[tauri::command]
pub(crate) fn key_forwarder_key_down(
    app_handle: AppHandle,
    key: String,
    shift_held: bool,
) -> KeyDisposition {
    let state = app_handle.state::<KeyForwarder>();
    let disposition = state.dispatch(&KeyEvent::new(key, shift_held));
    if let Some(payload) = disposition.forward.clone() {
        emit_key_payload(&app_handle, payload, append_input_log);
    }
    disposition
}

#[tauri::command]
pub(crate) fn key_forwarder_set_editing(app_handle: AppHandle, editing: bool) -> bool {
    let state = app_handle.state::<KeyForwarder>();
    state.set_editing(editing);
    append_input_log(&format!("editing mode set to {editing}"));
    key_bridge::sync_editing_into_main_window(&app_handle, editing, append_input_log);
    editing
}
