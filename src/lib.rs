// 依存関係の推移的依存により複数のバージョンが混在するための抑制
// windows-sys: notify vs clap
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod logging;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
