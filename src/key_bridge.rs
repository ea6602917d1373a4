use serde::Serialize;
use tauri::{AppHandle, Manager, Webview};

use crate::{key_forwarder, KeyForwarder, KEY_BRIDGE_GLOBAL, MAIN_WINDOW_LABEL};

pub const KEY_DOWN_COMMAND: &str = "key_forwarder_key_down";

const KEY_BRIDGE_TEMPLATE: &str = r#"(function () {
  if (window.__GLOBAL__) {
    return;
  }
  var policy = __POLICY__;
  var forwarded = new Set(policy.forwardedKeys);
  var passthrough = new Set(policy.editingPassthroughKeys);
  var editing = policy.editing;
  window.__GLOBAL__ = {
    setEditing: function (value) {
      editing = value === true;
    }
  };
  window.addEventListener(
    'keydown',
    function (event) {
      if (!forwarded.has(event.key)) {
        return;
      }
      if (!(editing && passthrough.has(event.key))) {
        event.preventDefault();
      }
      var internals = window.__TAURI_INTERNALS__;
      if (internals && typeof internals.invoke === 'function') {
        internals
          .invoke(policy.command, { key: event.key, shiftHeld: event.shiftKey })
          .catch(function (error) {
            console.warn('key forwarding failed', error);
          });
      }
    },
    true
  );
})();
"#;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct KeyBridgePolicy<'a> {
    forwarded_keys: &'a [&'static str],
    editing_passthrough_keys: &'a [&'static str],
    editing: bool,
    command: &'static str,
}

/// Initialization script that captures `keydown` in the webview.
///
/// Suppression has to be decided synchronously inside the DOM handler, so the
/// script carries the same key lists the forwarder uses; forwarding itself goes
/// back through [`KEY_DOWN_COMMAND`].
pub fn render_key_bridge_script(editing: bool) -> Result<String, String> {
    let policy = KeyBridgePolicy {
        forwarded_keys: &key_forwarder::FORWARDED_KEYS,
        editing_passthrough_keys: &key_forwarder::EDITING_PASSTHROUGH_KEYS,
        editing,
        command: KEY_DOWN_COMMAND,
    };
    let policy_json = serde_json::to_string(&policy)
        .map_err(|error| format!("Failed to serialize key bridge policy: {error}"))?;

    Ok(KEY_BRIDGE_TEMPLATE
        .replace("__GLOBAL__", KEY_BRIDGE_GLOBAL)
        .replace("__POLICY__", &policy_json))
}

pub fn render_set_editing_script(editing: bool) -> String {
    format!(
        "window.{global} && window.{global}.setEditing({editing});",
        global = KEY_BRIDGE_GLOBAL
    )
}

pub fn sync_editing_into_webview<F>(webview: &Webview, log: F)
where
    F: Fn(&str),
{
    let editing = webview.app_handle().state::<KeyForwarder>().is_editing();
    if let Err(error) = webview.eval(&render_set_editing_script(editing)) {
        log(&format!("failed to sync editing mode into webview: {error}"));
    }
}

pub fn sync_editing_into_main_window<F>(app_handle: &AppHandle, editing: bool, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        return;
    };
    if let Err(error) = window.eval(&render_set_editing_script(editing)) {
        log(&format!("failed to sync editing mode into main window: {error}"));
    }
}
