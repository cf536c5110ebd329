//! Token stream adapter.
//!
//! Turns per-page positional tokens from the extraction collaborator into an
//! ordered sequence of [`Line`]s.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::options::ParseOptions;
use crate::error::{Error, Result};
use crate::model::{Line, Token};

/// A positioned piece of text as reported by the extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawToken {
    pub text: String,
    pub x: f32,
    /// Baseline, growing upward
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

impl RawToken {
    /// Create a token without width or font information.
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width: 0.0,
            font: None,
        }
    }

    /// Set the width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Set the font name.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }
}

/// Tokens of one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPage {
    /// 1-based page number
    pub number: u32,
    #[serde(default)]
    pub tokens: Vec<RawToken>,
}

impl RawPage {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            tokens: Vec::new(),
        }
    }
}

/// Ordered pages of positional tokens.
pub trait PageSource {
    /// Number of pages.
    fn page_count(&self) -> usize;

    /// Page at a 0-based index.
    fn page(&self, index: usize) -> Result<RawPage>;
}

impl PageSource for [RawPage] {
    fn page_count(&self) -> usize {
        self.len()
    }

    fn page(&self, index: usize) -> Result<RawPage> {
        self.get(index).cloned().ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("page index {} out of range", index),
            ))
        })
    }
}

impl PageSource for Vec<RawPage> {
    fn page_count(&self) -> usize {
        self.as_slice().page_count()
    }

    fn page(&self, index: usize) -> Result<RawPage> {
        self.as_slice().page(index)
    }
}

/// Serialized extractor output that can be stored and replayed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenDump {
    pub pages: Vec<RawPage>,
}

impl TokenDump {
    /// Create a dump from pages.
    pub fn new(pages: Vec<RawPage>) -> Self {
        Self { pages }
    }

    /// Parse a dump from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a dump from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the dump to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl PageSource for TokenDump {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<RawPage> {
        self.pages.page(index)
    }
}

const CHECKED: &str = "☒";
const UNCHECKED: &str = "☐";

/// Rewrite symbol-font checkbox glyphs to the canonical box characters.
///
/// Private-use and `(cid:N)` codes are unambiguous; plain letters are only
/// glyphs when the token is set in a symbol font.
pub(crate) fn canonical_glyph(text: &str, font: Option<&str>) -> Option<&'static str> {
    match text.trim() {
        "(cid:132)" | "\u{F06E}" | "\u{F0FE}" => return Some(CHECKED),
        "(cid:134)" | "\u{F06F}" | "\u{F0A8}" => return Some(UNCHECKED),
        _ => {}
    }

    let font = font?.to_lowercase();
    if !(font.contains("wingdings") || font.contains("dingbats")) {
        return None;
    }
    match text.trim() {
        "n" | "2" | "x" => Some(CHECKED),
        "o" | "q" => Some(UNCHECKED),
        _ => None,
    }
}

/// Groups page tokens into lines.
#[derive(Debug, Clone)]
pub struct LineBuilder {
    y_tolerance: f32,
    min_text_chars: usize,
}

impl LineBuilder {
    /// Create a line builder from parse options.
    pub fn new(options: &ParseOptions) -> Self {
        Self {
            y_tolerance: options.y_tolerance,
            min_text_chars: options.min_text_chars,
        }
    }

    /// Build the document's lines, sorted by page, then top to bottom, then left to right.
    pub fn build<S: PageSource + ?Sized>(&self, source: &S) -> Result<Vec<Line>> {
        let mut lines = Vec::new();
        for index in 0..source.page_count() {
            let page = source.page(index)?;
            let page_lines = self.page_lines(&page);
            log::debug!(
                "Page {}: {} tokens -> {} lines",
                page.number,
                page.tokens.len(),
                page_lines.len()
            );
            lines.extend(page_lines);
        }
        lines.sort_by(|a, b| a.page.cmp(&b.page));

        let chars: usize = lines
            .iter()
            .map(|l| l.text.chars().filter(|c| !c.is_whitespace()).count())
            .sum();
        if lines.is_empty() || chars < self.min_text_chars {
            log::debug!("Document has {} lines, {} characters", lines.len(), chars);
            return Err(Error::EmptyDocument);
        }

        Ok(lines)
    }

    /// Build the lines of a single page.
    pub fn page_lines(&self, page: &RawPage) -> Vec<Line> {
        let mut tokens: Vec<&RawToken> = page
            .tokens
            .iter()
            .filter(|t| !t.text.trim().is_empty())
            .collect();
        if tokens.is_empty() {
            return Vec::new();
        }

        // Sort by Y (descending for PDF coords) then X
        tokens.sort_by(|a, b| {
            let y_cmp = b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal);
            if y_cmp == Ordering::Equal {
                a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal)
            } else {
                y_cmp
            }
        });

        let mut lines = Vec::new();
        let mut current: Vec<&RawToken> = Vec::new();
        let mut current_y: Option<f32> = None;

        for token in tokens {
            match current_y {
                Some(y) if (token.y - y).abs() <= self.y_tolerance => current.push(token),
                _ => {
                    if !current.is_empty() {
                        lines.push(self.make_line(page.number, std::mem::take(&mut current)));
                    }
                    current_y = Some(token.y);
                    current.push(token);
                }
            }
        }
        if !current.is_empty() {
            lines.push(self.make_line(page.number, current));
        }

        lines.retain(|l| !l.is_blank());
        lines
    }

    fn make_line(&self, page: u32, raw: Vec<&RawToken>) -> Line {
        let avg_y = raw.iter().map(|t| t.y).sum::<f32>() / raw.len() as f32;
        let tokens = raw
            .into_iter()
            .map(|t| {
                let text = canonical_glyph(&t.text, t.font.as_deref())
                    .map(str::to_string)
                    .unwrap_or_else(|| t.text.clone());
                Token::new(text, t.x, t.width)
            })
            .collect();
        Line::from_tokens(page, avg_y, tokens)
    }
}
