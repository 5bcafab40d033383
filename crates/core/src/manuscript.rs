// crates/core/src/manuscript.rs
//! 原稿用紙換算 (400字詰め) estimation.

use text_count_domain::ManuscriptPages;

use crate::normalizer::is_newline;

/// Box-drawing horizontal line; two in a row form the 2-cell dash "──".
const DASH_HALF: char = '\u{2500}';

/// Cells occupied by `ch` under the manuscript rules.
///
/// Punctuation, brackets and small kana each take a full cell of their own
/// (weight 1, same as ordinary characters); ellipsis and dash marks span two.
pub const fn weight(ch: char) -> u64 {
    match ch {
        // 句読点
        '、' | '。' | '，' | '．' => 1,
        // 括弧
        '「' | '」' | '『' | '』' | '〈' | '〉' | '（' | '）' | '【' | '】' | '［' | '］' | '｛' | '｝'
        | '＜' | '＞' => 1,
        // 三点リーダー・ダッシュ
        '…' | '―' | '‥' => 2,
        // 小書き仮名
        'っ' | 'ゃ' | 'ゅ' | 'ょ' | 'ァ' | 'ィ' | 'ゥ' | 'ェ' | 'ォ' | 'ャ' | 'ュ' | 'ョ' => 1,
        // half-width and full-width alike
        _ => 1,
    }
}

/// Filled cells for `text`; newlines occupy none.
pub fn manuscript_cells(text: &str, use_rules: bool) -> u64 {
    if !use_rules {
        return text.chars().filter(|ch| !is_newline(*ch)).count() as u64;
    }

    let mut cells = 0u64;
    let mut chars = text.chars().filter(|ch| !is_newline(*ch)).peekable();
    while let Some(ch) = chars.next() {
        if ch == DASH_HALF && chars.peek() == Some(&DASH_HALF) {
            chars.next();
            cells += 2;
            continue;
        }
        cells += weight(ch);
    }
    cells
}

/// Pages for `text`, rounded half-up to two decimals.
pub fn manuscript_pages(text: &str, use_rules: bool) -> ManuscriptPages {
    ManuscriptPages::from_cells(manuscript_cells(text, use_rules))
}
