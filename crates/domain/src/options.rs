// crates/domain/src/options.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use text_count_shared_kernel::DomainError;

/// Unicode normalization form applied before counting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Normalization {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "NFC", alias = "nfc")]
    Nfc,
    #[serde(rename = "NFKC", alias = "nfkc")]
    Nfkc,
}

impl Normalization {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Nfc => "NFC",
            Self::Nfkc => "NFKC",
        }
    }
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Normalization {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "nfc" => Ok(Self::Nfc),
            "nfkc" => Ok(Self::Nfkc),
            _ => Err(DomainError::InvalidNormalization { value: s.to_string() }),
        }
    }
}

/// Per-call counting options.
///
/// The engine never fills in missing values on its own; callers pass a fully
/// specified value. `Default` is the configuration layer's baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CountOptions {
    /// Whether `\r` / `\n` count toward `total_characters`.
    pub include_newlines: bool,
    /// Whether space, tab and U+3000 are removed for `characters_excluding_spaces`.
    pub exclude_spaces: bool,
    /// Weighted 原稿用紙 table instead of a flat 400 characters per page.
    pub use_manuscript_rules: bool,
    pub normalization: Normalization,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            include_newlines: true,
            exclude_spaces: false,
            use_manuscript_rules: true,
            normalization: Normalization::None,
        }
    }
}
