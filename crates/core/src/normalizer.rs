// crates/core/src/normalizer.rs
//! Unicode normalization and the per-character tallies that every other
//! counter builds on.

use std::borrow::Cow;

use text_count_domain::Normalization;
use unicode_normalization::{UnicodeNormalization, is_nfc, is_nfkc};

/// Applies `form` to `text`. Already-normalized input is returned borrowed.
pub fn normalize(text: &str, form: Normalization) -> Cow<'_, str> {
    match form {
        Normalization::None => Cow::Borrowed(text),
        Normalization::Nfc if is_nfc(text) => Cow::Borrowed(text),
        Normalization::Nfc => Cow::Owned(text.nfc().collect()),
        Normalization::Nfkc if is_nfkc(text) => Cow::Borrowed(text),
        Normalization::Nfkc => Cow::Owned(text.nfkc().collect()),
    }
}

#[inline]
pub const fn is_newline(ch: char) -> bool {
    matches!(ch, '\r' | '\n')
}

/// Characters that make an input blank.
///
/// Unicode `White_Space` without NEL (U+0085), plus the BOM (U+FEFF): the
/// ECMAScript whitespace and line-terminator sets.
pub fn is_blank(ch: char) -> bool {
    ch == '\u{feff}' || (ch.is_whitespace() && ch != '\u{85}')
}

/// True when `text` holds nothing but [`is_blank`] characters.
pub fn is_blank_text(text: &str) -> bool {
    text.chars().all(is_blank)
}

/// Space characters removed by the "excluding spaces" metric.
#[inline]
pub const fn is_countable_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\u{3000}')
}

/// Raw tallies gathered in a single pass over the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharTally {
    /// Unicode scalar values.
    pub chars: usize,
    /// `\r` and `\n` scalars.
    pub newlines: usize,
    /// Space, tab and U+3000 scalars.
    pub spaces: usize,
    /// Non-empty segments between `\r\n` / `\r` / `\n` delimiters.
    pub lines: usize,
}

impl CharTally {
    pub fn of(text: &str) -> Self {
        let mut tally = Self::default();
        let mut segment_len = 0usize;

        for ch in text.chars() {
            tally.chars += 1;
            if is_newline(ch) {
                tally.newlines += 1;
                // "\r\n" leaves an empty segment between its halves, which is dropped anyway.
                if segment_len > 0 {
                    tally.lines += 1;
                }
                segment_len = 0;
                continue;
            }
            if is_countable_space(ch) {
                tally.spaces += 1;
            }
            segment_len += 1;
        }
        if segment_len > 0 {
            tally.lines += 1;
        }

        tally
    }

    #[inline]
    pub const fn chars_without_newlines(&self) -> usize {
        self.chars - self.newlines
    }

    /// `total_characters` under the given newline policy.
    #[inline]
    pub const fn total(&self, include_newlines: bool) -> usize {
        if include_newlines { self.chars } else { self.chars_without_newlines() }
    }

    /// Characters counted by [`Self::total`] minus spaces, when `exclude_spaces` is set.
    #[inline]
    pub const fn excluding_spaces(&self, include_newlines: bool, exclude_spaces: bool) -> usize {
        let total = self.total(include_newlines);
        if exclude_spaces { total - self.spaces } else { total }
    }
}

/// Number of non-empty line segments.
pub fn count_lines(text: &str) -> usize {
    CharTally::of(text).lines
}
