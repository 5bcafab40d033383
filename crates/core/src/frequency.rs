// crates/core/src/frequency.rs
use text_count_domain::CharacterFrequency;

use crate::normalizer::is_newline;

/// Occurrences of every character in `text`, newlines excluded.
pub fn frequency(text: &str) -> CharacterFrequency {
    text.chars().filter(|ch| !is_newline(*ch)).collect()
}

/// The `n` most frequent characters, highest count first.
///
/// Equal counts keep first-occurrence order.
pub fn top_n(frequency: &CharacterFrequency, n: usize) -> Vec<(char, usize)> {
    let mut entries: Vec<_> = frequency.iter().collect();
    // stable: ties stay in first-occurrence order
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
}
