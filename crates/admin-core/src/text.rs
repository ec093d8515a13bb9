//! Text Helpers
//!
//! Word counts and dates as the tables and editor footer display them.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Local, TimeZone, Utc};
use regex::Regex;

static TAG_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

/// Markup with every `<...>` tag removed
pub fn strip_tags(markup: &str) -> String {
    match TAG_PATTERN.get_or_init(|| Regex::new(r"<[^>]+>").ok()) {
        Some(pattern) => pattern.replace_all(markup, "").into_owned(),
        None => markup.to_string(),
    }
}

/// Words in rich-text content, tags excluded
pub fn word_count(markup: &str) -> usize {
    strip_tags(markup).split_whitespace().count()
}

/// `April 19, 2025, 04:21:34` in the viewer's local time zone; empty when
/// the API sent no timestamp
pub fn format_created_at(created_at: Option<&DateTime<Utc>>) -> String {
    format_created_in(created_at, &Local)
}

/// `format_created_at` against an explicit zone
pub fn format_created_in<Tz>(created_at: Option<&DateTime<Utc>>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    created_at
        .map(|dt| dt.with_timezone(zone).format("%B %d, %Y, %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Byte offset of a UTF-16 code-unit offset, as DOM selection APIs report them
pub fn utf16_to_byte(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (byte, ch) in text.char_indices() {
        if units >= utf16_offset {
            return byte;
        }
        units += ch.len_utf16();
    }
    text.len()
}

/// Wrap `[start, end)` (UTF-16 offsets) in `open`/`close`.
///
/// Returns the new text and the UTF-16 range of the wrapped selection.
pub fn wrap_selection(
    text: &str,
    start: usize,
    end: usize,
    open: &str,
    close: &str,
) -> (String, usize, usize) {
    let (start, end) = (start.min(end), start.max(end));
    let from = utf16_to_byte(text, start);
    let to = utf16_to_byte(text, end);

    let mut out = String::with_capacity(text.len() + open.len() + close.len());
    out.push_str(&text[..from]);
    out.push_str(open);
    out.push_str(&text[from..to]);
    out.push_str(close);
    out.push_str(&text[to..]);

    let selected_start = text[..from].encode_utf16().count() + open.encode_utf16().count();
    let selected_end = selected_start + text[from..to].encode_utf16().count();
    (out, selected_start, selected_end)
}
