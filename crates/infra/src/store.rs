// crates/infra/src/store.rs
use std::{
    collections::HashMap,
    fs,
    io,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use fs2::FileExt;
use serde_json::{Map, Value};
use text_count_ports::storage::KeyValueStore;
use text_count_shared_kernel::{InfrastructureError, Result, TextCountError};
use tracing::warn;

use crate::persistence::FileWriter;

/// File name used by [`JsonFileStore::in_dir`].
pub const STATE_FILE_NAME: &str = "state.json";

/// Key-value store persisted as one JSON object of string values.
///
/// Writes hold an exclusive `fs2` lock on a sibling `.lock` file and replace
/// the document atomically, so concurrent processes never see a torn file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(STATE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Map<String, Value>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => return Err(InfrastructureError::FileRead { path: self.path.clone(), source }.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(self.corrupt("document is not a JSON object")),
            Err(err) => Err(self.corrupt(&err.to_string())),
        }
    }

    fn corrupt(&self, reason: &str) -> TextCountError {
        InfrastructureError::SerializationError {
            format: "JSON".to_string(),
            details: format!("{}: {reason}", self.path.display()),
        }
        .into()
    }

    /// Read-modify-write of the document under the exclusive lock.
    fn update<F>(&self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Map<String, Value>),
    {
        if let Some(parent) = self.path.parent()
            && let Err(source) = fs::create_dir_all(parent)
        {
            return Err(InfrastructureError::FileWrite { path: parent.to_path_buf(), source }.into());
        }

        let lock_path = self.path.with_extension("lock");
        let lock_file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|source| InfrastructureError::FileWrite { path: lock_path.clone(), source })?;
        lock_file
            .lock_exclusive()
            .map_err(|source| InfrastructureError::FileWrite { path: lock_path.clone(), source })?;

        let outcome = self.update_locked(edit);
        let _ = lock_file.unlock();
        outcome
    }

    fn update_locked<F>(&self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Map<String, Value>),
    {
        let mut document = self.read_document().unwrap_or_else(|err| {
            warn!(error = %err, "state file unreadable; starting a fresh document");
            Map::new()
        });
        edit(&mut document);
        let data = serde_json::to_vec_pretty(&Value::Object(document))?;
        FileWriter::atomic_write(&self.path, &data)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let document = self.read_document()?;
        Ok(document.get(key).and_then(Value::as_str).map(str::to_owned))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|document| {
            document.insert(key.to_owned(), Value::String(value.to_owned()));
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|document| {
            document.remove(key);
        })
    }
}

/// Process-local store, useful for ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
        Ok(())
    }
}
