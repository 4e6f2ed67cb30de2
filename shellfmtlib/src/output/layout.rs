//! Text layout primitives shared by the fixed-width formatters.
//!
//! All widths are measured in characters, not bytes, so escaped text with
//! multi-byte characters never gets split inside a character.

use std::time::Duration;

use crate::value::Value;

/// Gap between the two columns of a key/value row
pub const COLUMN_GAP: usize = 2;

/// Escaped form of `s` without the surrounding quotes.
///
/// Quotes, backslashes and control characters come out as escape
/// sequences (`\"`, `\\`, `\n`, `\u{1b}`); printable text is unchanged.
pub fn dump(s: &str) -> String {
    let quoted = format!("{:?}", s);
    quoted[1..quoted.len() - 1].to_string()
}

/// Text laid out for a wrapped cell.
///
/// Numbers keep their display form; everything else is escaped.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Text(s) => dump(s),
        _ if value.is_numeric() => value.to_string(),
        _ => dump(&value.to_string()),
    }
}

/// Split `s` into consecutive chunks of at most `width` characters.
///
/// An empty string yields a single empty chunk so every value gets a line.
pub fn split(width: usize, s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Left-justify `s` and pad with trailing spaces to `width` characters.
///
/// Longer input is returned whole.
pub fn pad(width: usize, s: &str) -> String {
    format!("{:<width$}", s, width = width)
}

/// Column widths for a key/value row: a quarter of the width for the key,
/// the rest minus the gap for the value.
pub fn pair_widths(max_width: usize) -> (usize, usize) {
    let key = max_width / 4;
    let value = max_width.saturating_sub(key + COLUMN_GAP);
    (key, value)
}

/// Footer line reporting the row count and elapsed time.
pub fn summary(row_count: usize, elapsed: Duration) -> String {
    format!(
        "{} row(s) in {:.4} seconds",
        row_count,
        elapsed.as_secs_f64()
    )
}
