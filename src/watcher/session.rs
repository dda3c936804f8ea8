//! Watch session
//!
//! Runs a development build, then feeds debounced source changes through
//! `build_update` one at a time. Failures are reported and the session keeps
//! watching until `running` is cleared.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::application::{build, build_update, copy_update, Toolchain};
use crate::config::ConfigInputs;
use crate::domain::ports::{BuildEvent, BuildEventSink};
use crate::domain::value_objects::{BuildContext, BuildOptions, ChangeEvent, ContextSpec};
use crate::error::{BuildError, BuildResult};

use super::event::{classify, Debouncer};

const POLL: Duration = Duration::from_millis(50);

pub struct WatchSession {
    context: BuildContext,
    options: BuildOptions,
    toolchain: Toolchain,
    inputs: ConfigInputs,
    sink: Arc<dyn BuildEventSink>,
}

impl WatchSession {
    pub fn new(
        context: BuildContext,
        options: BuildOptions,
        toolchain: Toolchain,
        inputs: ConfigInputs,
        sink: Arc<dyn BuildEventSink>,
    ) -> Self {
        let options = BuildOptions {
            is_watch: true,
            ..options
        };
        Self {
            context,
            options,
            toolchain,
            inputs,
            sink,
        }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build, then watch `src_dir` until `running` is cleared.
    pub async fn run(&self, running: Arc<AtomicBool>) -> BuildResult<()> {
        // A failed initial build is already reported; keep watching so the
        // next edit can fix it.
        let _ = build(
            ContextSpec::from(self.context.clone()),
            self.options.into(),
            &self.toolchain,
            Arc::clone(&self.sink),
        )
        .await;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                if let Ok(event) = res {
                    for path in event.paths {
                        if let Some(change) = classify(&event.kind, path.exists(), path.is_dir()) {
                            let _ = tx.send((path, change));
                        }
                    }
                }
            },
            Config::default(),
        )
        .map_err(watch_error)?;
        watcher
            .watch(&self.context.src_dir, RecursiveMode::Recursive)
            .map_err(watch_error)?;

        self.sink.on_event(BuildEvent::WatchStarted {
            source: self.context.src_dir.clone(),
        });

        let mut debouncer = Debouncer::default();
        while running.load(Ordering::SeqCst) {
            if let Ok(Some((path, change))) = tokio::time::timeout(POLL, rx.recv()).await {
                debouncer.add(path, change);
            }

            if debouncer.is_ready() {
                for (path, change) in debouncer.take() {
                    self.apply(change, &path).await;
                }
            }
        }

        self.sink.on_event(BuildEvent::Shutdown);
        Ok(())
    }

    /// Process one change: bundle and style, then any copy entry containing it.
    pub async fn apply(&self, change: ChangeEvent, path: &Path) {
        self.sink.on_event(BuildEvent::FileChanged {
            change,
            path: path.to_path_buf(),
        });

        // Reported through the buildUpdate logger
        let _ = build_update(
            change,
            path,
            &self.context,
            &self.options,
            &self.toolchain,
            Arc::clone(&self.sink),
        )
        .await;

        if let Err(e) = copy_update(change, path, &self.context, &self.options, &self.inputs).await
        {
            self.sink.on_event(BuildEvent::Warning {
                message: format!("copy after {change} failed: {e}"),
            });
        }
    }
}

fn watch_error(err: notify::Error) -> BuildError {
    BuildError::Io(std::io::Error::other(err.to_string()))
}
