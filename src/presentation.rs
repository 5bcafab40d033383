// src/presentation.rs
use std::fmt::Write;

use chrono::{DateTime, Local};
use text_count_domain::DisplayFormat;
use text_count_usecase::{AnalysisOutput, format_number, render_report};

use crate::args::OutputFormat;

/// Render `output` in the requested format; the result has no trailing newline.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(
    output: &AnalysisOutput,
    format: OutputFormat,
    display: DisplayFormat,
    at: &DateTime<Local>,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(output),
        OutputFormat::Report => Ok(render_report(&output.result, at)),
        OutputFormat::Table => Ok(render_table(output, display)),
    }
}

fn render_table(output: &AnalysisOutput, display: DisplayFormat) -> String {
    let number = |n: usize| {
        if display.use_thousands_separator { format_number(n) } else { n.to_string() }
    };
    let unit = |u: &'static str| if display.show_units { u } else { "" };

    let r = &output.result;
    let mut rows: Vec<(&str, String)> = vec![
        ("総文字数", format!("{}{}", number(r.total_characters.value()), unit(" 文字"))),
        ("改行除く文字数", format!("{}{}", number(r.total_characters_no_newlines.value()), unit(" 文字"))),
        ("空白除く文字数", format!("{}{}", number(r.characters_excluding_spaces.value()), unit(" 文字"))),
        ("行数", format!("{}{}", number(r.lines.value()), unit(" 行"))),
        ("原稿用紙換算", format!("{}{}", r.manuscript_pages, unit(" 枚"))),
    ];
    for (label, size) in r.bytes.labeled() {
        rows.push((label, format!("{}{}", number(size.value()), unit(" bytes"))));
    }

    let mut out = String::new();
    for (label, value) in rows {
        // writing to a String cannot fail
        let _ = writeln!(out, "{label}\t{value}");
    }

    if let Some(top) = &output.top_characters {
        let _ = writeln!(out);
        let _ = writeln!(out, "出現頻度 (上位 {})", top.len());
        for (rank, entry) in top.iter().enumerate() {
            let _ = writeln!(out, "{:>4}. {}\t{}", rank + 1, display_char(entry.ch), number(entry.count));
        }
    }

    out.truncate(out.trim_end().len());
    out
}

/// Makes whitespace visible in the frequency listing.
fn display_char(ch: char) -> String {
    match ch {
        ' ' => "(空白)".to_string(),
        '\t' => "(タブ)".to_string(),
        '\u{3000}' => "(全角空白)".to_string(),
        _ => ch.to_string(),
    }
}
