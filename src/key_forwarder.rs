use std::sync::Mutex;

use serde::{Deserialize, Serialize};

pub const FORWARDED_KEYS: [&str; 7] = [
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowUp",
    "Tab",
    "Enter",
    "Escape",
];

/// Keys that keep their default behaviour while the front-end is editing text,
/// so the caret can still move.
pub const EDITING_PASSTHROUGH_KEYS: [&str; 2] = ["ArrowLeft", "ArrowRight"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEvent {
    pub key: String,
    pub shift_held: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, shift_held: bool) -> Self {
        Self {
            key: key.into(),
            shift_held,
        }
    }
}

/// Payload of the `keys` channel, serialized as `[key, shiftHeld]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyPayload(pub String, pub bool);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyDisposition {
    pub suppress_default: bool,
    pub forward: Option<KeyPayload>,
}

impl KeyDisposition {
    fn ignored() -> Self {
        Self {
            suppress_default: false,
            forward: None,
        }
    }
}

pub fn is_forwarded_key(key: &str) -> bool {
    FORWARDED_KEYS.contains(&key)
}

pub fn dispose_key(event: &KeyEvent, editing: bool) -> KeyDisposition {
    if !is_forwarded_key(&event.key) {
        return KeyDisposition::ignored();
    }

    let passthrough = editing && EDITING_PASSTHROUGH_KEYS.contains(&event.key.as_str());
    KeyDisposition {
        suppress_default: !passthrough,
        forward: Some(KeyPayload(event.key.clone(), event.shift_held)),
    }
}

#[derive(Debug, Default)]
pub struct KeyForwarder {
    editing: Mutex<bool>,
}

impl KeyForwarder {
    pub fn is_editing(&self) -> bool {
        self.editing.lock().map(|guard| *guard).unwrap_or(false)
    }

    pub fn set_editing(&self, editing: bool) {
        match self.editing.lock() {
            Ok(mut guard) => *guard = editing,
            Err(poisoned) => *poisoned.into_inner() = editing,
        }
    }

    pub fn dispatch(&self, event: &KeyEvent) -> KeyDisposition {
        dispose_key(event, self.is_editing())
    }
}
