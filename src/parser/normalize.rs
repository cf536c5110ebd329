//! Value normalizer: raw strings to typed values.
//!
//! Normalizers return `None` when the raw text cannot be read as the declared
//! type; callers record a warning and store a null.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::model::{collapse_whitespace, Amount, Value};
use crate::schema::ValueType;

/// Glyphs that mark a checked box.
pub const CHECKED_GLYPHS: &[char] = &['☒', '☑', '■', '✓', '✔', '✗', '✘', '√'];

/// Glyphs that mark an empty box.
pub const UNCHECKED_GLYPHS: &[char] = &['☐', '□'];

fn trailing_amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[-(]?\s*\$?\s*[-(]?\d[\d,]*(?:\.\d+)?\)?\s*$").expect("valid regex")
    })
}

fn trailing_integer_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-?\d[\d,]*\s*$").expect("valid regex"))
}

fn date_like_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(?:\d{1,2}[/-]\d{1,2}[/-]\d{2,4}|\d{4}-\d{2}-\d{2}|\d{1,2}/\d{4}|\d{4})\b")
            .expect("valid regex")
    })
}

fn partial_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:\d{1,2}/\d{4}|\d{4})$").expect("valid regex"))
}

fn leader_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.{3,}|_{3,}|…+").expect("valid regex"))
}

/// Normalize raw text to the declared type.
///
/// Blank text is always `Some(Value::Null)`, except for booleans where blank
/// means unchecked.
pub fn normalize(raw: &str, value_type: ValueType) -> Option<Value> {
    match value_type {
        ValueType::Currency => currency(raw).map(|a| a.map_or(Value::Null, Value::Currency)),
        ValueType::Boolean | ValueType::Checkbox => boolean(raw).map(Value::Bool),
        ValueType::Integer => integer(raw),
        ValueType::Date => date(raw),
        ValueType::Account => Some(account(raw)),
        ValueType::Text | ValueType::Choice => Some(text(raw)),
    }
}

/// Parse a dollar amount.
///
/// `$`, commas and spaces are ignored; `(…)` or a leading `-` negates.
/// Blank, `$` and `-` alone yield `Some(None)`.
pub fn currency(raw: &str) -> Option<Option<Amount>> {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '$' && *c != ',')
        .collect();
    if compact.is_empty() || compact == "-" {
        return Some(None);
    }

    let (negative, body) = if let Some(inner) = compact
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
    {
        (true, inner)
    } else if let Some(rest) = compact.strip_prefix('-') {
        (true, rest)
    } else {
        (false, compact.as_str())
    };

    let (whole, fraction) = match body.split_once('.') {
        Some((w, f)) => (w, f),
        None => (body, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
        || fraction.len() > 2
    {
        return None;
    }

    let dollars: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let cents: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };
    let total = dollars.checked_mul(100)?.checked_add(cents)?;
    Some(Some(Amount::from_cents(if negative { -total } else { total })))
}

/// Read a checkbox glyph or yes/no word.
pub fn boolean(raw: &str) -> Option<bool> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(false);
    }
    if let Some(state) = checkbox_state(trimmed) {
        return Some(state);
    }
    match trimmed.to_lowercase().as_str() {
        "yes" | "y" | "x" | "true" => Some(true),
        "no" | "n" | "false" => Some(false),
        _ => None,
    }
}

/// State of a checkbox glyph at the start of the text, if there is one.
pub fn checkbox_state(text: &str) -> Option<bool> {
    let trimmed = text.trim_start();
    let first = trimmed.chars().next()?;
    if CHECKED_GLYPHS.contains(&first) {
        return Some(true);
    }
    if UNCHECKED_GLYPHS.contains(&first) {
        return Some(false);
    }
    let lower = trimmed.to_lowercase();
    if lower.starts_with("[√]") || lower.starts_with("[x]") {
        Some(true)
    } else if lower.starts_with("[]") || lower.starts_with("[ ]") {
        Some(false)
    } else {
        None
    }
}

/// Byte length of the checkbox marker at the start of the text.
pub(crate) fn checkbox_marker_len(text: &str) -> usize {
    let lower = text.to_lowercase();
    for marker in ["[√]", "[x]", "[ ]", "[]"] {
        if lower.starts_with(marker) {
            return marker.len();
        }
    }
    text.chars().next().map_or(0, |c| c.len_utf8())
}

/// NFC-normalize and collapse whitespace, keeping casing.
pub fn text(raw: &str) -> Value {
    let normalized: String = raw.nfc().collect();
    let collapsed = collapse_whitespace(&normalized);
    if collapsed.is_empty() {
        Value::Null
    } else {
        Value::Text(collapsed)
    }
}

/// Account numbers: whitespace removed, casing kept.
pub fn account(raw: &str) -> Value {
    let normalized: String = raw.nfc().filter(|c| !c.is_whitespace()).collect();
    if normalized.is_empty() {
        Value::Null
    } else {
        Value::Text(normalized)
    }
}

/// Whole numbers; thousands separators allowed.
pub fn integer(raw: &str) -> Option<Value> {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if compact.is_empty() {
        return Some(Value::Null);
    }
    compact.parse::<i64>().ok().map(Value::Integer)
}

/// Full dates become [`Value::Date`]; month/year or year alone stay text.
pub fn date(raw: &str) -> Option<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(Value::Null);
    }
    // chrono's %Y accepts short years, so pick the format by the year's width
    let bytes = trimmed.as_bytes();
    let iso = bytes.len() > 4 && bytes[..4].iter().all(u8::is_ascii_digit) && bytes[4] == b'-';
    let short_year = trimmed.rsplit(['/', '-']).next().map(str::len) == Some(2);
    let formats: &[&str] = if iso {
        &["%Y-%m-%d"]
    } else if short_year {
        &["%m/%d/%y", "%m-%d-%y"]
    } else {
        &["%m/%d/%Y", "%m-%d-%Y"]
    };
    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(Value::Date(date));
        }
    }
    if partial_date_re().is_match(trimmed) {
        return Some(Value::Text(trimmed.to_string()));
    }
    None
}

/// Replace dotted or underscored leader runs with a space.
pub(crate) fn strip_leaders(raw: &str) -> String {
    collapse_whitespace(&leader_re().replace_all(raw, " "))
}

/// Narrow the remainder of a label line to the part holding the value.
///
/// Numeric types take the trailing number; dates take the first date-like
/// text. Returns an empty string when nothing of the type is present.
pub fn locate(raw: &str, value_type: ValueType) -> &str {
    let found = match value_type {
        ValueType::Currency => trailing_amount_re().find(raw),
        ValueType::Integer => trailing_integer_re().find(raw),
        ValueType::Date => date_like_re().find(raw),
        _ => return raw.trim(),
    };
    found.map_or("", |m| m.as_str().trim())
}
