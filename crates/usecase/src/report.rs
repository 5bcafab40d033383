// crates/usecase/src/report.rs
use std::fmt::Write;

use chrono::{DateTime, Local};
use text_count_domain::TextCountResult;

/// Formats `n` with a `,` every three digits (ja-JP grouping).
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Timestamp in the `ja-JP` locale style, e.g. `2024/4/1 9:30:00`.
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format("%Y/%-m/%-d %-H:%M:%S").to_string()
}

/// Plain-text report with a fixed label order, ending in the measurement time.
pub fn render_report(result: &TextCountResult, at: &DateTime<Local>) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = writeln!(out, "文字数カウント結果");
    let _ = writeln!(out, "================");
    let _ = writeln!(out);
    let _ = writeln!(out, "総文字数: {}", format_number(result.total_characters.value()));
    let _ = writeln!(out, "改行除く文字数: {}", format_number(result.total_characters_no_newlines.value()));
    let _ = writeln!(out, "空白除く文字数: {}", format_number(result.characters_excluding_spaces.value()));
    let _ = writeln!(out, "行数: {}", format_number(result.lines.value()));
    let _ = writeln!(out, "原稿用紙換算: {} 枚", result.manuscript_pages);
    let _ = writeln!(out);
    let _ = writeln!(out, "バイト数:");
    for (label, size) in result.bytes.labeled() {
        let _ = writeln!(out, "  {label}: {} bytes", format_number(size.value()));
    }
    let _ = writeln!(out);
    let _ = write!(out, "計測日時: {}", format_timestamp(at));
    out
}
