//! # Infrastructure
//!
//! Adapters behind the ports plus the runtime helpers the CLI needs.
//!
//! - [`debounce`]: Trailing-edge invocation coalescer on a worker thread
//! - [`persistence`]: Size-limited reads and atomic file writes
//! - [`store`]: [`KeyValueStore`](text_count_ports::storage::KeyValueStore) adapters
//! - [`watch`]: Recount trigger on file changes (`watch` feature)

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod debounce;
pub mod persistence;
pub mod store;
pub mod watch;

pub use debounce::Coalescer;
pub use persistence::{FileReader, FileWriter, MAX_INPUT_BYTES};
pub use store::{JsonFileStore, MemoryStore};
