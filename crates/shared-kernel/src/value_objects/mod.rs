// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;

pub use counts::{ByteCount, CharCount, LineCount};
