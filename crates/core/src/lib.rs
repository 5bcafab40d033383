// crates/core/src/lib.rs
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod counter;
pub mod encoding;
pub mod frequency;
pub mod manuscript;
pub mod normalizer;

pub use counter::{TextCounter, count};
pub use encoding::{LegacyEncoder, LegacyEncoding, WhatwgEncoder, byte_sizes};
pub use frequency::{frequency, top_n};
pub use manuscript::manuscript_pages;
pub use normalizer::normalize;
