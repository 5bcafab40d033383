//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates the counting engine and the ports
//! to implement specific use cases:
//!
//! - [`analyze`]: Count a text with the current settings, optionally autosaving it
//! - [`report`]: Human-readable report rendering and number formatting
//! - [`settings`]: Settings/text persistence with fallback to defaults
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on the engine and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod analyze;
pub mod dto;
pub mod report;
pub mod settings;

pub use analyze::AnalyzeText;
pub use dto::AnalysisOutput;
pub use report::{format_number, render_report};
pub use settings::{SettingsBundle, SettingsRepository};
