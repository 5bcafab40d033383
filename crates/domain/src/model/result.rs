// crates/domain/src/model/result.rs
use serde::{Deserialize, Serialize};
use text_count_shared_kernel::{ByteCount, CharCount, LineCount};

use super::{CharacterFrequency, ManuscriptPages};

/// Encoded size of the text under each supported encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByteSizes {
    pub utf8: ByteCount,
    pub utf16le: ByteCount,
    pub utf16be: ByteCount,
    pub shift_jis: ByteCount,
    pub euc_jp: ByteCount,
    pub iso2022_jp: ByteCount,
}

impl ByteSizes {
    /// `(label, size)` pairs in report order.
    pub fn labeled(&self) -> [(&'static str, ByteCount); 6] {
        [
            ("UTF-8", self.utf8),
            ("UTF-16LE", self.utf16le),
            ("UTF-16BE", self.utf16be),
            ("Shift_JIS", self.shift_jis),
            ("EUC-JP", self.euc_jp),
            ("ISO-2022-JP", self.iso2022_jp),
        ]
    }
}

/// Result of one counting call. Every field is computed independently from
/// the same normalized text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextCountResult {
    /// Code points, with the newline policy of the call applied.
    pub total_characters: CharCount,
    /// Code points other than `\r` / `\n`, regardless of options.
    pub total_characters_no_newlines: CharCount,
    pub characters_excluding_spaces: CharCount,
    pub lines: LineCount,
    pub bytes: ByteSizes,
    pub manuscript_pages: ManuscriptPages,
    pub character_frequency: CharacterFrequency,
}

impl TextCountResult {
    /// All-zero result returned for blank input.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.total_characters.is_zero() && self.lines.is_zero() && self.character_frequency.is_empty()
    }
}
