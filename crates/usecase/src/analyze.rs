// crates/usecase/src/analyze.rs
use text_count_core::{LegacyEncoder, TextCounter, WhatwgEncoder, top_n};
use text_count_domain::AppSettings;
use tracing::warn;

use crate::{
    dto::{AnalysisOutput, TopCharacter},
    settings::SettingsRepository,
};

/// Number of characters listed when the frequency table is shown.
pub const DEFAULT_TOP_N: usize = 10;

/// Counts a text with the given settings and autosaves it when enabled.
pub struct AnalyzeText<'a, E = WhatwgEncoder> {
    counter: TextCounter<E>,
    settings: &'a AppSettings,
    repository: Option<&'a SettingsRepository<'a>>,
}

impl<'a> AnalyzeText<'a> {
    pub fn new(settings: &'a AppSettings) -> Self {
        Self { counter: TextCounter::new(), settings, repository: None }
    }
}

impl<'a, E: LegacyEncoder> AnalyzeText<'a, E> {
    pub fn with_counter(counter: TextCounter<E>, settings: &'a AppSettings) -> Self {
        Self { counter, settings, repository: None }
    }

    /// Persist the analyzed text through `repository` when `auto_save` is on.
    #[must_use]
    pub fn autosave_to(mut self, repository: &'a SettingsRepository<'a>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// `top` overrides the settings' frequency display; `None` defers to
    /// `show_character_frequency`.
    pub fn run(&self, text: &str, top: Option<usize>) -> AnalysisOutput {
        let result = self.counter.count(text, &self.settings.count);

        let top = top.or_else(|| self.settings.show_character_frequency.then_some(DEFAULT_TOP_N));
        let top_characters = top.map(|n| {
            top_n(&result.character_frequency, n)
                .into_iter()
                .map(|(ch, count)| TopCharacter { ch, count })
                .collect()
        });

        if self.settings.auto_save
            && let Some(repository) = self.repository
            && let Err(err) = repository.save_text(text)
        {
            warn!(error = %err, "failed to autosave text");
        }

        AnalysisOutput { result, top_characters }
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Mutex};

    use chrono::{DateTime, Local};
    use text_count_ports::{clock::Clock, storage::KeyValueStore};
    use text_count_shared_kernel::Result;

    use super::*;
    use crate::settings::TEXT_KEY;

    #[derive(Default)]
    struct StubStore {
        entries: Mutex<HashMap<String, String>>,
    }

    impl KeyValueStore for StubStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.entries.lock().unwrap().insert(key.into(), value.into());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }
    }

    struct NowClock;

    impl Clock for NowClock {
        fn now(&self) -> DateTime<Local> {
            Local::now()
        }
    }

    #[test]
    fn run_counts_with_settings_options() {
        let mut settings = AppSettings::default();
        settings.count.include_newlines = false;
        let output = AnalyzeText::new(&settings).run("a\nb", None);
        assert_eq!(output.result.total_characters, 2usize);
        assert!(output.top_characters.is_none());
    }

    #[test]
    fn frequency_display_uses_default_top_n() {
        let settings = AppSettings { show_character_frequency: true, ..AppSettings::default() };
        let text: String = ('a'..='z').collect();
        let output = AnalyzeText::new(&settings).run(&text, None);
        let top = output.top_characters.expect("frequency requested");
        assert_eq!(top.len(), DEFAULT_TOP_N);
        assert_eq!(top[0], TopCharacter { ch: 'a', count: 1 });
    }

    #[test]
    fn explicit_top_overrides_settings() {
        let settings = AppSettings::default();
        let output = AnalyzeText::new(&settings).run("ねねこ", Some(1));
        assert_eq!(output.top_characters, Some(vec![TopCharacter { ch: 'ね', count: 2 }]));
    }

    #[test]
    fn autosave_follows_setting() {
        let store = StubStore::default();
        let repository = SettingsRepository::new(&store, &NowClock);

        let settings = AppSettings::default();
        AnalyzeText::new(&settings).autosave_to(&repository).run("保存する", None);
        assert_eq!(store.get(TEXT_KEY).unwrap().as_deref(), Some("保存する"));

        let settings = AppSettings { auto_save: false, ..AppSettings::default() };
        AnalyzeText::new(&settings).autosave_to(&repository).run("保存しない", None);
        assert_eq!(store.get(TEXT_KEY).unwrap().as_deref(), Some("保存する"));
    }
}
