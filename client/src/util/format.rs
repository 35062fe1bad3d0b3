//! Display formatting for post cards and profile fields.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDateTime};

/// Feed cards show at most this many characters of content.
pub const PREVIEW_CHARS: usize = 100;

/// Cut `content` to `max_chars` characters, appending `...` when shortened.
#[must_use]
pub fn truncate_content(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_owned(),
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// `1 May 2024` style date; unparseable input is shown as-is, empty as `-`.
#[must_use]
pub fn format_long_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%-d %B %Y").to_string(),
        None => fallback(raw),
    }
}

/// `01/05/2024` style date for table cells.
#[must_use]
pub fn format_short_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => fallback(raw),
    }
}

/// `01/05/2024 10:00:00` style timestamp (UTC).
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M:%S").to_string(),
        None => fallback(raw),
    }
}

/// `value` when present and non-blank, otherwise `-`.
#[must_use]
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => "-".to_owned(),
    }
}

fn fallback(raw: &str) -> String {
    or_dash(Some(raw))
}
