// src/config.rs
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use text_count_domain::AppSettings;
use text_count_infra::{JsonFileStore, MemoryStore};
use text_count_ports::storage::KeyValueStore;
use text_count_shared_kernel::Result;

use crate::args::{Args, CountArgs, OutputFormat};

/// Directory under the platform data dir used by a bare `--state-dir`.
pub const STATE_DIR_NAME: &str = "text_count";

/// Where settings and the last text live for this run.
pub fn open_store(state_dir: Option<&Path>) -> Arc<dyn KeyValueStore> {
    match state_dir {
        Some(dir) => Arc::new(JsonFileStore::in_dir(dir)),
        None => Arc::new(MemoryStore::new()),
    }
}

/// `--state-dir DIR` as given, or the platform default for a bare flag.
pub fn resolve_state_dir(flag: Option<&Option<PathBuf>>) -> Option<PathBuf> {
    match flag? {
        Some(dir) => Some(dir.clone()),
        None => dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .map(|base| base.join(STATE_DIR_NAME)),
    }
}

/// Flags given on the command line override the loaded settings.
///
/// # Errors
///
/// Returns an error if `--debounce-ms` is out of range.
pub fn apply_overrides(mut settings: AppSettings, args: &Args) -> Result<AppSettings> {
    let CountArgs { no_newlines, exclude_spaces, flat_pages, normalize } = &args.count;
    if *no_newlines {
        settings.count.include_newlines = false;
    }
    if *exclude_spaces {
        settings.count.exclude_spaces = true;
    }
    if *flat_pages {
        settings.count.use_manuscript_rules = false;
    }
    if let Some(form) = normalize {
        settings.count.normalization = *form;
    }
    if let Some(ms) = args.behavior.debounce_ms {
        settings.set_debounce_delay(ms)?;
    }
    Ok(settings)
}

/// Resolved runtime configuration shared by one-shot and watch runs.
#[derive(Clone)]
pub struct Config {
    pub settings: AppSettings,
    pub format: OutputFormat,
    pub top: Option<usize>,
    pub output: Option<PathBuf>,
    pub store: Arc<dyn KeyValueStore>,
}

impl Config {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.settings.debounce_delay)
    }
}
