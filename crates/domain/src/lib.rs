#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod options;
pub mod settings;

pub use model::{ByteSizes, CharacterFrequency, ManuscriptPages, TextCountResult};
pub use options::{CountOptions, Normalization};
pub use settings::{AppSettings, DisplayFormat};
