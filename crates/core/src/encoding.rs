// crates/core/src/encoding.rs
pub mod legacy;

use text_count_domain::ByteSizes;
use text_count_shared_kernel::{ByteCount, DomainResult};
use tracing::warn;

/// Legacy Japanese encodings whose sizes are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyEncoding {
    ShiftJis,
    EucJp,
    Iso2022Jp,
}

impl LegacyEncoding {
    pub const ALL: [Self; 3] = [Self::ShiftJis, Self::EucJp, Self::Iso2022Jp];

    pub const fn label(self) -> &'static str {
        match self {
            Self::ShiftJis => "Shift_JIS",
            Self::EucJp => "EUC-JP",
            Self::Iso2022Jp => "ISO-2022-JP",
        }
    }

    /// Whether the encoding switches character sets with escape sequences.
    pub const fn is_stateful(self) -> bool {
        matches!(self, Self::Iso2022Jp)
    }
}

/// Backend computing legacy encoded sizes.
pub trait LegacyEncoder: Send + Sync {
    /// Encoded length of `text`, unmappable characters counting zero bytes.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend itself cannot encode.
    fn encoded_len(&self, text: &str, encoding: LegacyEncoding) -> DomainResult<usize>;
}

/// Default backend using the WHATWG tables of `encoding_rs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatwgEncoder;

impl LegacyEncoder for WhatwgEncoder {
    fn encoded_len(&self, text: &str, encoding: LegacyEncoding) -> DomainResult<usize> {
        Ok(legacy::encoded_len(text, encoding))
    }
}

/// UTF-8 length of `text`.
pub fn utf8_len(text: &str) -> usize {
    text.chars().map(char::len_utf8).sum()
}

/// UTF-16 length of `text` in bytes; identical for both byte orders.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum::<usize>() * 2
}

/// Sizes of `text` under all six encodings, using [`WhatwgEncoder`].
pub fn byte_sizes(text: &str) -> ByteSizes {
    byte_sizes_with(text, &WhatwgEncoder)
}

/// Sizes of `text` under all six encodings.
///
/// If `encoder` fails for any legacy encoding, all three legacy sizes are
/// zero for this call; the Unicode sizes are unaffected.
pub fn byte_sizes_with(text: &str, encoder: &dyn LegacyEncoder) -> ByteSizes {
    let utf16 = ByteCount::new(utf16_len(text));
    let [shift_jis, euc_jp, iso2022_jp] = legacy_sizes(text, encoder).unwrap_or_else(|err| {
        warn!(error = %err, "legacy encoding sizes unavailable; reporting 0");
        [ByteCount::ZERO; 3]
    });

    ByteSizes {
        utf8: ByteCount::new(utf8_len(text)),
        utf16le: utf16,
        utf16be: utf16,
        shift_jis,
        euc_jp,
        iso2022_jp,
    }
}

fn legacy_sizes(text: &str, encoder: &dyn LegacyEncoder) -> DomainResult<[ByteCount; 3]> {
    let mut sizes = [ByteCount::ZERO; 3];
    for (slot, encoding) in sizes.iter_mut().zip(LegacyEncoding::ALL) {
        *slot = ByteCount::new(encoder.encoded_len(text, encoding)?);
    }
    Ok(sizes)
}
