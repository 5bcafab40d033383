// crates/core/src/encoding/legacy.rs
//! Shift_JIS / EUC-JP / ISO-2022-JP byte sequences.
//!
//! The JIS X 0201 / JIS X 0208 code-page tables are the WHATWG indexes
//! embedded in `encoding_rs`. Characters without a mapping are dropped from
//! the output instead of being replaced, so they contribute zero bytes.

use std::collections::BTreeSet;

use encoding_rs::{EUC_JP, Encoding, EncoderResult, ISO_2022_JP, SHIFT_JIS};
use tracing::trace;

use super::LegacyEncoding;

const CHUNK: usize = 1024;

impl LegacyEncoding {
    fn whatwg(self) -> &'static Encoding {
        match self {
            Self::ShiftJis => SHIFT_JIS,
            Self::EucJp => EUC_JP,
            Self::Iso2022Jp => ISO_2022_JP,
        }
    }
}

trait ByteSink {
    fn write(&mut self, bytes: &[u8]);
    fn reset(&mut self);
}

impl ByteSink for Vec<u8> {
    fn write(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }

    fn reset(&mut self) {
        self.clear();
    }
}

struct Counter(usize);

impl ByteSink for Counter {
    fn write(&mut self, bytes: &[u8]) {
        self.0 += bytes.len();
    }

    fn reset(&mut self) {
        self.0 = 0;
    }
}

/// Encodes `text`, returning the characters that had no mapping.
fn drive<S: ByteSink>(text: &str, encoding: LegacyEncoding, sink: &mut S) -> Vec<char> {
    let mut encoder = encoding.whatwg().new_encoder();
    let mut buf = [0u8; CHUNK];
    let mut rest = text;
    let mut skipped = Vec::new();

    loop {
        let (result, read, written) = encoder.encode_from_utf8_without_replacement(rest, &mut buf, true);
        sink.write(&buf[..written]);
        rest = &rest[read..];
        match result {
            EncoderResult::InputEmpty => return skipped,
            EncoderResult::OutputFull => {}
            EncoderResult::Unmappable(ch) => {
                trace!(encoding = encoding.label(), ?ch, "unmappable character skipped");
                skipped.push(ch);
            }
        }
    }
}

fn encode_mappable<S: ByteSink>(text: &str, encoding: LegacyEncoding, sink: &mut S) {
    let skipped = drive(text, encoding, sink);
    if skipped.is_empty() || !encoding.is_stateful() {
        return;
    }

    // The ISO-2022-JP encoder returns to ASCII before reporting an unmappable
    // character; re-encode without those characters so they cost no escape bytes.
    let skipped: BTreeSet<char> = skipped.into_iter().collect();
    let mappable: String = text.chars().filter(|ch| !skipped.contains(ch)).collect();
    sink.reset();
    drive(&mappable, encoding, sink);
}

/// Byte sequence of `text` in `encoding`, unmappable characters omitted.
pub fn encode(text: &str, encoding: LegacyEncoding) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    encode_mappable(text, encoding, &mut out);
    out
}

/// Length of [`encode`]'s output without materializing it.
pub fn encoded_len(text: &str, encoding: LegacyEncoding) -> usize {
    let mut counter = Counter(0);
    encode_mappable(text, encoding, &mut counter);
    counter.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ESC_JIS0208: [u8; 3] = [0x1B, 0x24, 0x42];
    const ESC_ASCII: [u8; 3] = [0x1B, 0x28, 0x42];

    fn jis(payload: &[u8]) -> Vec<u8> {
        [&ESC_JIS0208[..], payload, &ESC_ASCII[..]].concat()
    }

    #[test]
    fn ascii_is_single_byte_everywhere() {
        for encoding in LegacyEncoding::ALL {
            assert_eq!(encode("Az09~", encoding), b"Az09~", "{}", encoding.label());
        }
    }

    #[test]
    fn hiragana_reference_bytes() {
        assert_eq!(encode("あ", LegacyEncoding::ShiftJis), [0x82, 0xA0]);
        assert_eq!(encode("あ", LegacyEncoding::EucJp), [0xA4, 0xA2]);
        assert_eq!(encode("あ", LegacyEncoding::Iso2022Jp), jis(&[0x24, 0x22]));
    }

    #[test]
    fn katakana_reference_bytes() {
        assert_eq!(encode("ア", LegacyEncoding::ShiftJis), [0x83, 0x41]);
        assert_eq!(encode("ア", LegacyEncoding::EucJp), [0xA5, 0xA2]);
        assert_eq!(encode("ア", LegacyEncoding::Iso2022Jp), jis(&[0x25, 0x22]));
    }

    #[test]
    fn kanji_reference_bytes() {
        assert_eq!(encode("漢", LegacyEncoding::ShiftJis), [0x8A, 0xBF]);
        assert_eq!(encode("漢", LegacyEncoding::EucJp), [0xB4, 0xC1]);
        assert_eq!(encode("漢", LegacyEncoding::Iso2022Jp), jis(&[0x34, 0x41]));
    }

    #[test]
    fn half_width_katakana() {
        assert_eq!(encode("ｱ", LegacyEncoding::ShiftJis), [0xB1]);
        assert_eq!(encode("ｱ", LegacyEncoding::EucJp), [0x8E, 0xB1]);
        // ISO-2022-JP has no JIS X 0201 katakana set; the full-width form is used.
        assert_eq!(encode("ｱ", LegacyEncoding::Iso2022Jp), jis(&[0x25, 0x22]));
    }

    #[test]
    fn yen_sign_uses_roman_byte() {
        assert_eq!(encode("¥", LegacyEncoding::ShiftJis), [0x5C]);
        assert_eq!(encode("¥", LegacyEncoding::EucJp), [0x5C]);
    }

    #[test]
    fn unmappable_contributes_nothing() {
        for encoding in LegacyEncoding::ALL {
            assert!(encode("😀", encoding).is_empty(), "{}", encoding.label());
            assert_eq!(encoded_len("a😀b", encoding), 2, "{}", encoding.label());
        }
    }

    #[test]
    fn unmappable_inside_jis_run_costs_no_escapes() {
        let bytes = encode("あ😀い", LegacyEncoding::Iso2022Jp);
        assert_eq!(bytes, jis(&[0x24, 0x22, 0x24, 0x24]));
        assert_eq!(encoded_len("あ😀い", LegacyEncoding::ShiftJis), 4);
    }

    #[test]
    fn iso2022jp_counts_each_transition() {
        // a ESC$B あ ESC(B b
        assert_eq!(encoded_len("aあb", LegacyEncoding::Iso2022Jp), 10);
        // one run of two characters shares its escapes
        assert_eq!(encoded_len("あい", LegacyEncoding::Iso2022Jp), 10);
        // ESC$B あ ESC(B a ESC$B い ESC(B
        assert_eq!(encoded_len("あaい", LegacyEncoding::Iso2022Jp), 17);
    }

    #[test]
    fn long_input_spans_several_chunks() {
        let text = "漢字".repeat(CHUNK);
        assert_eq!(encoded_len(&text, LegacyEncoding::ShiftJis), CHUNK * 4);
        assert_eq!(encoded_len(&text, LegacyEncoding::Iso2022Jp), CHUNK * 4 + 6);
        assert_eq!(encode(&text, LegacyEncoding::EucJp).len(), CHUNK * 4);
    }
}
