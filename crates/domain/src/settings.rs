// crates/domain/src/settings.rs
use serde::{Deserialize, Serialize};
use text_count_shared_kernel::{DomainError, DomainResult};

use crate::options::CountOptions;

/// Display preferences used by presenters; never consulted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayFormat {
    pub use_thousands_separator: bool,
    pub show_units: bool,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self { use_thousands_separator: true, show_units: true }
    }
}

/// Persisted application settings: counting options plus front-end preferences.
///
/// Partial records deserialize over the defaults, so a settings file written
/// by an older version keeps working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    #[serde(flatten)]
    pub count: CountOptions,
    pub realtime_mode: bool,
    pub auto_save: bool,
    pub show_character_frequency: bool,
    /// Quiet period before a realtime recount, in milliseconds.
    pub debounce_delay: u64,
    pub display_format: DisplayFormat,
}

impl AppSettings {
    pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 300;
    pub const MAX_DEBOUNCE_DELAY_MS: u64 = 10_000;

    /// # Errors
    ///
    /// Returns [`DomainError::RangeValidation`] above [`Self::MAX_DEBOUNCE_DELAY_MS`].
    pub fn set_debounce_delay(&mut self, ms: u64) -> DomainResult<()> {
        if ms > Self::MAX_DEBOUNCE_DELAY_MS {
            return Err(DomainError::RangeValidation {
                field: "debounceDelay".to_string(),
                min: "0".to_string(),
                max: Self::MAX_DEBOUNCE_DELAY_MS.to_string(),
            });
        }
        self.debounce_delay = ms;
        Ok(())
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            count: CountOptions::default(),
            realtime_mode: true,
            auto_save: true,
            show_character_frequency: false,
            debounce_delay: Self::DEFAULT_DEBOUNCE_DELAY_MS,
            display_format: DisplayFormat::default(),
        }
    }
}
