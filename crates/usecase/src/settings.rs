// crates/usecase/src/settings.rs
use serde::{Deserialize, Serialize};
use text_count_domain::AppSettings;
use text_count_ports::{clock::Clock, storage::KeyValueStore};
use text_count_shared_kernel::{ApplicationError, ErrorContext, Result};
use tracing::warn;

pub const SETTINGS_KEY: &str = "text-count-tool-settings";
pub const TEXT_KEY: &str = "text-count-tool-text";
pub const BUNDLE_VERSION: &str = "1.0.0";

/// Export/import document holding settings and the last text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsBundle {
    #[serde(default)]
    pub settings: Option<AppSettings>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub export_date: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Loads and stores settings and the last text under two independent keys.
///
/// Reads never fail: missing or unreadable entries fall back to defaults.
pub struct SettingsRepository<'a> {
    store: &'a dyn KeyValueStore,
    clock: &'a dyn Clock,
}

impl<'a> SettingsRepository<'a> {
    pub fn new(store: &'a dyn KeyValueStore, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    pub fn load_settings(&self) -> AppSettings {
        let raw = match self.store.get(SETTINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return AppSettings::default(),
            Err(err) => {
                warn!(error = %err, "failed to load settings; using defaults");
                return AppSettings::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(error = %err, "stored settings are corrupt; using defaults");
            AppSettings::default()
        })
    }

    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn save_settings(&self, settings: &AppSettings) -> Result<()> {
        let json = serde_json::to_string(settings)?;
        self.store.set(SETTINGS_KEY, &json).context("saving settings")
    }

    pub fn load_text(&self) -> String {
        match self.store.get(TEXT_KEY) {
            Ok(text) => text.unwrap_or_default(),
            Err(err) => {
                warn!(error = %err, "failed to load text; using empty text");
                String::new()
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn save_text(&self, text: &str) -> Result<()> {
        self.store.set(TEXT_KEY, text).context("saving text")
    }

    /// # Errors
    ///
    /// Returns an error if either key cannot be removed.
    pub fn clear_all(&self) -> Result<()> {
        self.store.remove(SETTINGS_KEY).context("clearing settings")?;
        self.store.remove(TEXT_KEY).context("clearing text")
    }

    /// Pretty-printed bundle of the current settings and text.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_bundle(&self) -> Result<String> {
        let bundle = SettingsBundle {
            settings: Some(self.load_settings()),
            text: Some(self.load_text()),
            export_date: Some(self.clock.now().to_rfc3339()),
            version: Some(BUNDLE_VERSION.to_string()),
        };
        Ok(serde_json::to_string_pretty(&bundle)?)
    }

    /// Applies a bundle produced by [`Self::export_bundle`].
    ///
    /// Settings are stored when present; the text only when non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::ImportFailed`] on malformed JSON, or a
    /// store error if a write fails.
    pub fn import_bundle(&self, json: &str) -> Result<()> {
        let bundle: SettingsBundle =
            serde_json::from_str(json).map_err(|err| ApplicationError::ImportFailed { reason: err.to_string() })?;

        if let Some(settings) = &bundle.settings {
            self.save_settings(settings)?;
        }
        if let Some(text) = bundle.text.as_deref().filter(|t| !t.is_empty()) {
            self.save_text(text)?;
        }
        Ok(())
    }
}
