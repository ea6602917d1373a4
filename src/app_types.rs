use std::sync::Mutex;

use crate::file_watcher::FileWatcher;

/// Keeps the watcher alive for the life of the process.
#[derive(Debug)]
pub(crate) struct FileWatcherState {
    _watcher: Mutex<FileWatcher>,
}

impl FileWatcherState {
    pub(crate) fn new(watcher: FileWatcher) -> Self {
        Self {
            _watcher: Mutex::new(watcher),
        }
    }
}
