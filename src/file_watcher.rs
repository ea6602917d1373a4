//! Development reload watcher.
//!
//! Watches the entry resource and the compiled front-end output and reports
//! every relevant filesystem event. No debouncing: one event, one reload.

use std::path::{Path, PathBuf};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchPattern {
    /// A single file, matched by exact path.
    File(PathBuf),
    /// Direct children of `dir` whose file name matches `pattern`.
    DirectoryGlob { dir: PathBuf, pattern: String },
}

fn has_wildcard(segment: &str) -> bool {
    segment.contains('*') || segment.contains('?')
}

fn canonical_or_original(path: PathBuf) -> PathBuf {
    path.canonicalize().unwrap_or(path)
}

impl WatchPattern {
    pub fn parse(root: &Path, raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err("Watch pattern is empty.".to_string());
        }

        let relative = Path::new(trimmed);
        let file_name = relative
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| format!("Watch pattern has no file name: {trimmed}"))?;
        let parent = relative.parent().unwrap_or_else(|| Path::new(""));
        if parent.to_str().is_some_and(has_wildcard) {
            return Err(format!(
                "Wildcards are only supported in the last segment: {trimmed}"
            ));
        }
        let dir = canonical_or_original(root.join(parent));

        if has_wildcard(file_name) {
            Ok(Self::DirectoryGlob {
                dir,
                pattern: file_name.to_string(),
            })
        } else {
            Ok(Self::File(dir.join(file_name)))
        }
    }

    /// Directory handed to the OS watcher. Files are watched through their
    /// parent so that editors replacing the file atomically are still seen.
    pub fn watch_root(&self) -> Option<&Path> {
        match self {
            Self::File(path) => path.parent(),
            Self::DirectoryGlob { dir, .. } => Some(dir),
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        match self {
            Self::File(file) => path == file,
            Self::DirectoryGlob { dir, pattern } => {
                if path.parent() != Some(dir.as_path()) {
                    return false;
                }
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| wildcard_match(pattern, name))
            }
        }
    }
}

/// `*` matches any run of characters and `?` exactly one, within a single
/// file name.
pub(crate) fn wildcard_match(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();
    let (mut p, mut n) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while n < name.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == name[n]) {
            p += 1;
            n += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            backtrack = Some((p, n));
            p += 1;
        } else if let Some((star_p, star_n)) = backtrack {
            p = star_p + 1;
            n = star_n + 1;
            backtrack = Some((star_p, star_n + 1));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|c| *c == '*')
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchSet {
    patterns: Vec<WatchPattern>,
}

impl WatchSet {
    pub fn from_patterns(root: &Path, patterns: &[&str]) -> Result<Self, String> {
        let patterns = patterns
            .iter()
            .map(|raw| WatchPattern::parse(root, raw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn matches(&self, path: &Path) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(path))
    }

    /// Distinct watch roots in pattern order.
    pub fn watch_roots(&self) -> Vec<PathBuf> {
        let mut roots: Vec<PathBuf> = Vec::new();
        for root in self.patterns.iter().filter_map(WatchPattern::watch_root) {
            if !roots.iter().any(|existing| existing == root) {
                roots.push(root.to_path_buf());
            }
        }
        roots
    }

    /// First watched path touched by `event`, if the event should reload the
    /// window.
    pub fn reload_trigger<'a>(&self, event: &'a Event) -> Option<&'a Path> {
        if !is_reload_kind(&event.kind) {
            return None;
        }
        event
            .paths
            .iter()
            .map(PathBuf::as_path)
            .find(|path| self.matches(path))
    }
}

fn is_reload_kind(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}

pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    attached_roots: Vec<PathBuf>,
}

impl std::fmt::Debug for FileWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWatcher")
            .field("attached_roots", &self.attached_roots)
            .finish_non_exhaustive()
    }
}

impl FileWatcher {
    /// Starts watching and calls `on_change` once per matching event.
    ///
    /// Roots that do not exist are logged and skipped; they never fail
    /// startup and produce no events.
    pub fn start<C, F>(watch_set: WatchSet, on_change: C, log: F) -> Result<Self, String>
    where
        C: Fn(&Path) + Send + 'static,
        F: Fn(&str) + Copy + Send + 'static,
    {
        let roots = watch_set.watch_roots();
        let mut watcher =
            notify::recommended_watcher(move |result: notify::Result<Event>| match result {
                Ok(event) => {
                    if let Some(path) = watch_set.reload_trigger(&event) {
                        log(&format!("change detected: {}", path.display()));
                        on_change(path);
                    }
                }
                Err(error) => log(&format!("file watcher error: {error}")),
            })
            .map_err(|error| format!("Failed to create file watcher: {error}"))?;

        let mut attached_roots = Vec::new();
        for root in roots {
            if !root.is_dir() {
                log(&format!("watch root missing, skipping: {}", root.display()));
                continue;
            }
            match watcher.watch(&root, RecursiveMode::NonRecursive) {
                Ok(()) => {
                    log(&format!("watching {}", root.display()));
                    attached_roots.push(root);
                }
                Err(error) => log(&format!(
                    "failed to watch {}, skipping: {error}",
                    root.display()
                )),
            }
        }

        Ok(Self {
            _watcher: watcher,
            attached_roots,
        })
    }

    pub fn attached_roots(&self) -> &[PathBuf] {
        &self.attached_roots
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, sync::mpsc, time::Duration};

    use notify::event::{AccessKind, CreateKind, ModifyKind, RemoveKind};

    use super::*;
    use crate::WATCH_PATTERNS;

    fn event(kind: EventKind, paths: &[PathBuf]) -> Event {
        paths
            .iter()
            .fold(Event::new(kind), |event, path| event.add_path(path.clone()))
    }

    fn app_root() -> tempfile::TempDir {
        let temp = tempfile::tempdir().expect("create temp dir");
        fs::create_dir_all(temp.path().join("build")).expect("create build dir");
        temp
    }

    fn no_log(_: &str) {}

    #[test]
    fn wildcard_match_handles_star_and_question_mark() {
        assert!(wildcard_match("*", "elm.js"));
        assert!(wildcard_match("*", ""));
        assert!(wildcard_match("*.js", "elm.js"));
        assert!(!wildcard_match("*.js", "elm.css"));
        assert!(wildcard_match("elm.?s", "elm.js"));
        assert!(!wildcard_match("elm.?s", "elm.s"));
        assert!(wildcard_match("a*b*c", "axxbyyc"));
        assert!(!wildcard_match("a*b*c", "axxbyy"));
    }

    #[test]
    fn parse_splits_literal_files_and_directory_globs() {
        let temp = app_root();
        let root = temp.path().canonicalize().expect("canonical root");
        let set = WatchSet::from_patterns(&root, &WATCH_PATTERNS).expect("build watch set");

        assert_eq!(
            set.patterns,
            vec![
                WatchPattern::File(root.join("index.html")),
                WatchPattern::DirectoryGlob {
                    dir: root.join("build"),
                    pattern: "*".to_string(),
                },
            ]
        );
        assert_eq!(set.watch_roots(), vec![root.clone(), root.join("build")]);
    }

    #[test]
    fn parse_rejects_empty_and_nested_wildcards() {
        let root = Path::new("/app");
        assert!(WatchPattern::parse(root, "  ").is_err());
        assert!(WatchPattern::parse(root, "build/*/elm.js").is_err());
    }

    #[test]
    fn matches_only_watched_file_and_direct_build_children() {
        let temp = app_root();
        let root = temp.path().canonicalize().expect("canonical root");
        let set = WatchSet::from_patterns(&root, &WATCH_PATTERNS).expect("build watch set");

        assert!(set.matches(&root.join("index.html")));
        assert!(set.matches(&root.join("build").join("elm.js")));
        assert!(!set.matches(&root.join("main.js")));
        assert!(!set.matches(&root.join("build")));
        assert!(!set.matches(&root.join("build").join("nested").join("elm.js")));
        assert!(!set.matches(&root.join("src").join("Main.elm")));
    }

    #[test]
    fn create_modify_and_remove_under_watched_paths_trigger_reload() {
        let temp = app_root();
        let root = temp.path().canonicalize().expect("canonical root");
        let set = WatchSet::from_patterns(&root, &WATCH_PATTERNS).expect("build watch set");
        let elm_js = root.join("build").join("elm.js");

        for kind in [
            EventKind::Create(CreateKind::File),
            EventKind::Modify(ModifyKind::Any),
            EventKind::Remove(RemoveKind::File),
        ] {
            let change = event(kind, &[elm_js.clone()]);
            assert!(set.reload_trigger(&change).is_some(), "{:?}", change.kind);
        }
        let access = event(EventKind::Access(AccessKind::Any), &[elm_js.clone()]);
        assert_eq!(set.reload_trigger(&access), None);
    }

    #[test]
    fn unwatched_paths_never_trigger_reload() {
        let temp = app_root();
        let root = temp.path().canonicalize().expect("canonical root");
        let set = WatchSet::from_patterns(&root, &WATCH_PATTERNS).expect("build watch set");

        let unrelated = event(
            EventKind::Modify(ModifyKind::Any),
            &[root.join("README.md"), root.join("src").join("Main.elm")],
        );
        assert_eq!(set.reload_trigger(&unrelated), None);
    }

    #[test]
    fn multi_path_event_yields_a_single_trigger() {
        let temp = app_root();
        let root = temp.path().canonicalize().expect("canonical root");
        let set = WatchSet::from_patterns(&root, &WATCH_PATTERNS).expect("build watch set");

        let rename = event(
            EventKind::Modify(ModifyKind::Any),
            &[root.join("build").join("elm.js.tmp"), root.join("index.html")],
        );
        assert_eq!(
            set.reload_trigger(&rename),
            Some(root.join("build").join("elm.js.tmp").as_path())
        );
    }

    #[test]
    fn start_skips_missing_roots_without_failing() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let root = temp.path().canonicalize().expect("canonical root");
        let set = WatchSet::from_patterns(&root, &WATCH_PATTERNS).expect("build watch set");

        let watcher = FileWatcher::start(set, |_| {}, no_log).expect("start watcher");
        assert_eq!(watcher.attached_roots(), &[root]);
    }

    #[test]
    fn start_reports_changes_under_watched_directory() {
        let temp = app_root();
        let root = temp.path().canonicalize().expect("canonical root");
        let set = WatchSet::from_patterns(&root, &WATCH_PATTERNS).expect("build watch set");
        let (tx, rx) = mpsc::channel();

        let _watcher = FileWatcher::start(
            set,
            move |path| {
                let _ = tx.send(path.to_path_buf());
            },
            no_log,
        )
        .expect("start watcher");

        let elm_js = root.join("build").join("elm.js");
        fs::write(&elm_js, "var Elm = {};").expect("write build output");

        let changed = rx
            .recv_timeout(Duration::from_secs(10))
            .expect("watcher should report the change");
        assert_eq!(changed, elm_js);
    }
}
