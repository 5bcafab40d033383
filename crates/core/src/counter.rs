// crates/core/src/counter.rs
use text_count_domain::{CountOptions, TextCountResult};
use text_count_shared_kernel::{CharCount, LineCount};
use tracing::debug;

use crate::{
    encoding::{LegacyEncoder, WhatwgEncoder, byte_sizes_with},
    frequency::frequency,
    manuscript::manuscript_pages,
    normalizer::{CharTally, is_blank_text, normalize},
};

/// Count every statistic of `text` with the default encoding backend.
///
/// This is the core entry point for the library.
#[must_use]
pub fn count(text: &str, options: &CountOptions) -> TextCountResult {
    TextCounter::new().count(text, options)
}

/// Counting engine parameterized by its legacy encoding backend.
///
/// Holds no state between calls; one instance may be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct TextCounter<E = WhatwgEncoder> {
    encoder: E,
}

impl TextCounter {
    pub const fn new() -> Self {
        Self { encoder: WhatwgEncoder }
    }
}

impl<E: LegacyEncoder> TextCounter<E> {
    pub const fn with_encoder(encoder: E) -> Self {
        Self { encoder }
    }

    #[must_use]
    pub fn count(&self, text: &str, options: &CountOptions) -> TextCountResult {
        if is_blank_text(text) {
            return TextCountResult::empty();
        }

        let text = normalize(text, options.normalization);
        let tally = CharTally::of(&text);

        let result = TextCountResult {
            total_characters: CharCount::new(tally.total(options.include_newlines)),
            total_characters_no_newlines: CharCount::new(tally.chars_without_newlines()),
            characters_excluding_spaces: CharCount::new(
                tally.excluding_spaces(options.include_newlines, options.exclude_spaces),
            ),
            lines: LineCount::new(tally.lines),
            bytes: byte_sizes_with(&text, &self.encoder),
            manuscript_pages: manuscript_pages(&text, options.use_manuscript_rules),
            character_frequency: frequency(&text),
        };

        debug!(
            chars = tally.chars,
            lines = tally.lines,
            normalization = %options.normalization,
            "text counted"
        );
        result
    }
}
