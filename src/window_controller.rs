/// Platform conventions that decide what happens once the last window closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePlatform {
    /// Applications stay alive with no windows (macOS).
    BackgroundCapable,
    Standard,
}

impl LifecyclePlatform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::BackgroundCapable
        } else {
            Self::Standard
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleDecision {
    Quit,
    KeepRunning,
}

pub fn decide_all_windows_closed(platform: LifecyclePlatform) -> LifecycleDecision {
    match platform {
        LifecyclePlatform::BackgroundCapable => LifecycleDecision::KeepRunning,
        LifecyclePlatform::Standard => LifecycleDecision::Quit,
    }
}

pub trait WindowHost {
    type Window;

    fn create_window(&self) -> Result<Self::Window, String>;
    fn reload_window(&self, window: &Self::Window) -> Result<(), String>;
}

/// Owns the single top-level window. Creation and close are the only
/// mutators of the handle.
pub struct WindowController<H: WindowHost> {
    host: H,
    window: Option<H::Window>,
}

impl<H: WindowHost> WindowController<H> {
    pub fn new(host: H) -> Self {
        Self { host, window: None }
    }

    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }

    /// Handles both startup and activation. Returns `Ok(true)` when a window
    /// was created, `Ok(false)` when one already existed.
    pub fn ensure_window(&mut self) -> Result<bool, String> {
        if self.window.is_some() {
            return Ok(false);
        }

        let window = self.host.create_window()?;
        self.window = Some(window);
        Ok(true)
    }

    pub fn on_window_closed(&mut self) {
        self.window = None;
    }

    /// Returns `Ok(false)` when there is no window to reload.
    pub fn on_reload_requested(&self) -> Result<bool, String> {
        let Some(window) = self.window.as_ref() else {
            return Ok(false);
        };
        self.host.reload_window(window)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct RecordingHost {
        created: Cell<u32>,
        reloaded: RefCell<Vec<u32>>,
        fail_create: Cell<bool>,
    }

    impl WindowHost for &RecordingHost {
        type Window = u32;

        fn create_window(&self) -> Result<u32, String> {
            if self.fail_create.get() {
                return Err("webview unavailable".to_string());
            }
            let id = self.created.get() + 1;
            self.created.set(id);
            Ok(id)
        }

        fn reload_window(&self, window: &u32) -> Result<(), String> {
            self.reloaded.borrow_mut().push(*window);
            Ok(())
        }
    }

    #[test]
    fn ensure_window_twice_creates_exactly_one_window() {
        let host = RecordingHost::default();
        let mut controller = WindowController::new(&host);

        assert_eq!(controller.ensure_window(), Ok(true));
        assert_eq!(controller.ensure_window(), Ok(false));
        assert_eq!(host.created.get(), 1);
        assert!(controller.has_window());
    }

    #[test]
    fn activation_after_close_creates_a_fresh_window() {
        let host = RecordingHost::default();
        let mut controller = WindowController::new(&host);

        controller.ensure_window().expect("create on ready");
        controller.on_window_closed();
        assert!(!controller.has_window());

        assert_eq!(controller.ensure_window(), Ok(true));
        assert_eq!(host.created.get(), 2);
        assert_eq!(controller.on_reload_requested(), Ok(true));
        assert_eq!(*host.reloaded.borrow(), vec![2]);
    }

    #[test]
    fn failed_creation_leaves_handle_absent() {
        let host = RecordingHost::default();
        host.fail_create.set(true);
        let mut controller = WindowController::new(&host);

        assert!(controller.ensure_window().is_err());
        assert!(!controller.has_window());

        host.fail_create.set(false);
        assert_eq!(controller.ensure_window(), Ok(true));
    }

    #[test]
    fn reload_targets_current_window_and_skips_when_absent() {
        let host = RecordingHost::default();
        let mut controller = WindowController::new(&host);

        assert_eq!(controller.on_reload_requested(), Ok(false));
        assert!(host.reloaded.borrow().is_empty());

        controller.ensure_window().expect("create window");
        assert_eq!(controller.on_reload_requested(), Ok(true));
        assert_eq!(controller.on_reload_requested(), Ok(true));
        assert_eq!(*host.reloaded.borrow(), vec![1, 1]);
        assert_eq!(host.created.get(), 1);

        controller.on_window_closed();
        assert_eq!(controller.on_reload_requested(), Ok(false));
        assert_eq!(host.reloaded.borrow().len(), 2);
    }

    #[test]
    fn closing_last_window_quits_except_on_background_capable_platform() {
        assert_eq!(
            decide_all_windows_closed(LifecyclePlatform::Standard),
            LifecycleDecision::Quit
        );
        assert_eq!(
            decide_all_windows_closed(LifecyclePlatform::BackgroundCapable),
            LifecycleDecision::KeepRunning
        );
    }

    #[test]
    fn current_platform_matches_build_target() {
        let expected = if cfg!(target_os = "macos") {
            LifecyclePlatform::BackgroundCapable
        } else {
            LifecyclePlatform::Standard
        };
        assert_eq!(LifecyclePlatform::current(), expected);
    }
}
