// crates/ports/src/storage.rs
use text_count_shared_kernel::Result;

/// Port for a string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
