//! Checkbox option lists.
//!
//! Option text follows its box: `☒ Single-family home ☐ Duplex`. The text
//! is cut into segments at every box glyph and the checked segments are
//! matched against the declared options.

use super::normalize::{checkbox_marker_len, checkbox_state};
use crate::model::{collapse_whitespace, Value};

/// Text following one checkbox glyph.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Segment<T> {
    pub checked: bool,
    pub text: String,
    /// Where the glyph was found
    pub origin: T,
}

/// Accumulates segments over one or more pieces of text.
#[derive(Debug)]
pub(crate) struct SegmentBuilder<T> {
    segments: Vec<Segment<T>>,
}

impl<T: Copy> SegmentBuilder<T> {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Add text. Leading text without a glyph continues the previous segment.
    pub fn push(&mut self, text: &str, origin: T) {
        let mut rest = text;
        loop {
            let next = marker_position(rest);
            let (before, after) = match next {
                Some(pos) => rest.split_at(pos),
                None => (rest, ""),
            };
            if let Some(last) = self.segments.last_mut() {
                if !before.trim().is_empty() {
                    last.text = collapse_whitespace(&format!("{} {}", last.text, before));
                }
            }
            if after.is_empty() {
                break;
            }

            let checked = checkbox_state(after).unwrap_or(false);
            let marker = checkbox_marker_len(after);
            self.segments.push(Segment {
                checked,
                text: String::new(),
                origin,
            });
            rest = &after[marker..];
        }
    }

    pub fn finish(self) -> Vec<Segment<T>> {
        self.segments
    }
}

fn marker_position(text: &str) -> Option<usize> {
    text.char_indices()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)
        .find(|&i| checkbox_state(&text[i..]).is_some())
}

/// Outcome of matching checked segments against options.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Selection<T> {
    pub value: Value,
    /// Origin of the first selected option
    pub origin: Option<T>,
    /// Checked segments that match no option
    pub unmatched: Vec<String>,
}

/// Select options by their checked boxes.
///
/// A single choice yields the first declared option that is checked; a
/// multiple choice yields every checked option in declaration order, or an
/// empty list when boxes are present but none is checked. No boxes at all
/// yields null.
pub(crate) fn select<T: Copy>(
    options: &[String],
    multiple: bool,
    segments: &[Segment<T>],
) -> Selection<T> {
    let checked: Vec<&Segment<T>> = segments.iter().filter(|s| s.checked).collect();

    let mut chosen = Vec::new();
    let mut origin = None;
    for option in options {
        if let Some(segment) = checked.iter().find(|s| starts_with_word(&s.text, option)) {
            origin.get_or_insert(segment.origin);
            chosen.push(option.clone());
        }
    }

    let unmatched = checked
        .iter()
        .filter(|s| !options.iter().any(|o| starts_with_word(&s.text, o)))
        .map(|s| s.text.clone())
        .collect();

    let value = if segments.is_empty() {
        Value::Null
    } else if multiple {
        Value::List(chosen)
    } else {
        chosen.into_iter().next().map_or(Value::Null, Value::Text)
    };

    Selection {
        value,
        origin,
        unmatched,
    }
}

/// Case-insensitive prefix match ending on a word boundary.
fn starts_with_word(text: &str, option: &str) -> bool {
    let text = text.trim().to_lowercase();
    let option = option.trim().to_lowercase();
    if option.is_empty() || !text.starts_with(&option) {
        return false;
    }
    text[option.len()..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric())
}
