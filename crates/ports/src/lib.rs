//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`storage`]: Key-value persistence for settings and the last text
//! - [`clock`]: Wall-clock time for report and bundle timestamps
//!
//! These ports keep the use cases independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod clock;
pub mod storage;
