use tauri::ExitRequestApi;

use crate::window_controller::{decide_all_windows_closed, LifecycleDecision, LifecyclePlatform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExitRequestOutcome {
    /// Exit carries an explicit code from `AppHandle::exit`.
    ExplicitExit(i32),
    /// Last window closed and the platform convention is to quit.
    Quit,
    /// Last window closed but the process stays alive.
    KeepRunning,
}

/// Tauri raises an exit request without a code once the last window is gone;
/// explicit `exit(code)` calls carry one and are never intercepted.
pub(crate) fn decide_exit_request(
    code: Option<i32>,
    platform: LifecyclePlatform,
) -> ExitRequestOutcome {
    if let Some(code) = code {
        return ExitRequestOutcome::ExplicitExit(code);
    }

    match decide_all_windows_closed(platform) {
        LifecycleDecision::Quit => ExitRequestOutcome::Quit,
        LifecycleDecision::KeepRunning => ExitRequestOutcome::KeepRunning,
    }
}

pub fn handle_exit_requested<F>(code: Option<i32>, api: &ExitRequestApi, log: F)
where
    F: Fn(&str),
{
    match decide_exit_request(code, LifecyclePlatform::current()) {
        ExitRequestOutcome::ExplicitExit(code) => {
            log(&format!("exit requested with code {code}"));
        }
        ExitRequestOutcome::Quit => log("all windows closed; exiting"),
        ExitRequestOutcome::KeepRunning => {
            api.prevent_exit();
            log("all windows closed; staying alive in background");
        }
    }
}
