// crates/infra/src/watch.rs
use std::{path::Path, time::Duration};

#[cfg(not(feature = "watch"))]
use text_count_shared_kernel::InfrastructureError;
use text_count_shared_kernel::Result;

#[cfg(feature = "watch")]
use {
    crate::debounce::Coalescer,
    notify::{RecommendedWatcher, RecursiveMode, Watcher, event::EventKind},
    std::{ffi::OsString, thread::JoinHandle},
    text_count_shared_kernel::InfrastructureError,
    tracing::{debug, warn},
};

/// Recount trigger for a single file.
///
/// The parent directory is watched so editors that save by rename are still
/// seen. Bursts of events are coalesced: `on_change` runs once per quiet
/// period of `delay`.
#[cfg(feature = "watch")]
pub struct FileWatch {
    watcher: RecommendedWatcher,
    forwarder: JoinHandle<()>,
}

#[cfg(feature = "watch")]
impl FileWatch {
    /// # Errors
    ///
    /// Returns [`InfrastructureError::Watch`] if the path has no file name or
    /// the platform watcher cannot be created.
    pub fn start<F>(path: &Path, delay: Duration, on_change: F) -> Result<Self>
    where
        F: FnMut() + Send + 'static,
    {
        let name = path
            .file_name()
            .map(OsString::from)
            .ok_or_else(|| watch_error(format!("{} does not name a file", path.display())))?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => std::path::PathBuf::from("."),
        };

        let mut on_change = on_change;
        let coalescer = Coalescer::new(delay, move |()| on_change())?;

        let (tx, rx) = crossbeam_channel::unbounded();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })
        .map_err(|err| watch_error(err.to_string()))?;
        watcher.watch(&dir, RecursiveMode::NonRecursive).map_err(|err| watch_error(err.to_string()))?;

        let forwarder = std::thread::Builder::new()
            .name("text-count-watch".into())
            .spawn(move || {
                for res in rx {
                    match res {
                        Ok(event) if is_relevant(event.kind) => {
                            if event.paths.iter().any(|p| p.file_name() == Some(name.as_os_str())) {
                                debug!(kind = ?event.kind, "watched file changed");
                                coalescer.call(());
                            }
                        }
                        Ok(_) => {}
                        Err(err) => warn!(error = %err, "watcher error"),
                    }
                }
            })
            .map_err(|err| InfrastructureError::Scheduler { details: err.to_string() })?;

        Ok(Self { watcher, forwarder })
    }

    /// Block the calling thread for as long as the watcher delivers events.
    pub fn wait(self) {
        let Self { watcher, forwarder } = self;
        let _keep = watcher;
        let _ = forwarder.join();
    }
}

#[cfg(feature = "watch")]
const fn is_relevant(kind: EventKind) -> bool {
    matches!(kind, EventKind::Any | EventKind::Create(_) | EventKind::Modify(_) | EventKind::Other)
}

#[cfg(feature = "watch")]
fn watch_error(details: String) -> InfrastructureError {
    InfrastructureError::Watch { details }
}

#[cfg(not(feature = "watch"))]
pub struct FileWatch;

#[cfg(not(feature = "watch"))]
impl FileWatch {
    pub fn start<F>(_path: &Path, _delay: Duration, _on_change: F) -> Result<Self>
    where
        F: FnMut() + Send + 'static,
    {
        Err(InfrastructureError::Watch { details: "watch feature disabled at compile time".to_string() }.into())
    }

    pub fn wait(self) {}
}
