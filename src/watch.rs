//! Re-lint files as they change on disk.
//!
//! Uses the `notify` crate through `notify-debouncer-mini`, so a burst of
//! writes to the same file (an editor save, a formatter run) produces one
//! pass.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │   notify    │────>│  debouncer  │────>│ lint + publish   │
//! │   watcher   │     │  (150ms)    │     │ (DiagnosticStore)│
//! └─────────────┘     └─────────────┘     └──────────────────┘
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebouncedEventKind};

use crate::config::LintConfig;
use crate::error::{Result, SemicolonError};
use crate::store::DiagnosticStore;
use crate::workspace::{in_skipped_dir, is_lintable, lint_file, FileReport};

/// Configuration for the file watcher
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Debounce duration (default: 150ms)
    pub debounce_duration: Duration,
    /// How often the loop checks the stop flag
    pub poll_interval: Duration,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_duration: Duration::from_millis(150),
            poll_interval: Duration::from_millis(100),
        }
    }
}

/// Something the watcher did in response to a change
#[derive(Debug, Clone)]
pub enum WatchEvent {
    /// File was re-linted
    Linted(FileReport),
    /// File disappeared; its diagnostics were dropped
    Removed(PathBuf),
}

/// Watches a workspace and lints files as they change
pub struct LintWatcher {
    root: PathBuf,
    lint_config: LintConfig,
    config: WatchConfig,
    store: Arc<DiagnosticStore>,
    running: Arc<AtomicBool>,
}

impl LintWatcher {
    pub fn new(root: PathBuf, lint_config: LintConfig, store: Arc<DiagnosticStore>) -> Self {
        Self::with_config(root, lint_config, store, WatchConfig::default())
    }

    pub fn with_config(
        root: PathBuf,
        lint_config: LintConfig,
        store: Arc<DiagnosticStore>,
        config: WatchConfig,
    ) -> Self {
        Self {
            root,
            lint_config,
            config,
            store,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that stops [`LintWatcher::run`] when cleared
    pub fn running_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Whether a changed path should be re-linted
    pub fn should_watch_path(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        !in_skipped_dir(relative) && is_lintable(path, &self.lint_config)
    }

    /// Block and handle change events until the running flag is cleared or
    /// the watcher shuts down
    pub fn run<F>(&self, mut on_event: F) -> Result<()>
    where
        F: FnMut(WatchEvent),
    {
        let (tx, rx) = std::sync::mpsc::channel();

        let mut debouncer =
            new_debouncer(self.config.debounce_duration, tx).map_err(|e| {
                SemicolonError::WatchError {
                    message: format!("failed to create watcher: {}", e),
                }
            })?;
        debouncer
            .watcher()
            .watch(&self.root, RecursiveMode::Recursive)
            .map_err(|e| SemicolonError::WatchError {
                message: format!("failed to watch {}: {}", self.root.display(), e),
            })?;

        self.running.store(true, Ordering::SeqCst);
        tracing::info!("watching {}", self.root.display());

        while self.running.load(Ordering::SeqCst) {
            match rx.recv_timeout(self.config.poll_interval) {
                Ok(Ok(events)) => {
                    let changed: BTreeSet<PathBuf> = events
                        .into_iter()
                        .filter(|event| matches!(event.kind, DebouncedEventKind::Any))
                        .map(|event| event.path)
                        .filter(|path| self.should_watch_path(path))
                        .collect();

                    for path in changed {
                        if let Some(event) = self.handle_change(&path) {
                            on_event(event);
                        }
                    }
                }
                Ok(Err(e)) => {
                    tracing::warn!("watch error: {:?}", e);
                }
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => {
                    tracing::debug!("watch channel closed");
                    break;
                }
            }
        }

        self.running.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn handle_change(&self, path: &Path) -> Option<WatchEvent> {
        if !path.exists() {
            return self
                .store
                .remove(path)
                .then(|| WatchEvent::Removed(path.to_path_buf()));
        }

        match lint_file(path, None, &self.lint_config, &self.store) {
            Ok(report) => Some(WatchEvent::Linted(report)),
            Err(e) => {
                tracing::warn!("failed to lint {}: {}", path.display(), e);
                None
            }
        }
    }
}
