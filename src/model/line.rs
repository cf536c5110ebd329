//! Positioned text lines produced by the token stream adapter.

use serde::{Deserialize, Serialize};

/// A word or phrase with its horizontal extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Whitespace-normalized text
    pub text: String,
    /// Left edge
    pub x: f32,
    /// Width in points (0 when the collaborator does not report it)
    pub width: f32,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, x: f32, width: f32) -> Self {
        Self {
            text: text.into(),
            x,
            width,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width.max(0.0)
    }

    /// Position used to place the token into a column: its center when the
    /// width is known, otherwise its left edge.
    pub fn anchor(&self) -> f32 {
        if self.width > 0.0 {
            self.x + self.width / 2.0
        } else {
            self.x
        }
    }
}

/// One visual row of text on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Tokens joined with single spaces
    pub text: String,
    /// 1-based page number
    pub page: u32,
    /// Baseline Y (PDF user space, grows upward)
    pub y_position: f32,
    /// Leftmost X
    pub x_position: f32,
    /// Tokens in reading order
    pub tokens: Vec<Token>,
}

impl Line {
    /// Build a line from tokens on the same visual row.
    ///
    /// Tokens are sorted by X; blank tokens are dropped.
    pub fn from_tokens(page: u32, y_position: f32, mut tokens: Vec<Token>) -> Self {
        tokens.retain(|t| !t.text.trim().is_empty());
        for token in &mut tokens {
            token.text = collapse_whitespace(&token.text);
        }
        tokens.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));

        let text = tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let x_position = tokens.first().map(|t| t.x).unwrap_or(0.0);

        Self {
            text,
            page,
            y_position,
            x_position,
            tokens,
        }
    }

    /// Check if the line carries no text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Byte range of each token inside [`Line::text`].
    pub fn token_spans(&self) -> Vec<(usize, usize)> {
        let mut spans = Vec::with_capacity(self.tokens.len());
        let mut offset = 0;
        for token in &self.tokens {
            let end = offset + token.text.len();
            spans.push((offset, end));
            offset = end + 1;
        }
        spans
    }

    /// Index of the token containing the given byte offset of the text.
    ///
    /// An offset on a separating space resolves to the following token.
    pub fn token_at(&self, offset: usize) -> Option<usize> {
        self.token_spans()
            .iter()
            .position(|&(_, end)| offset < end)
    }
}

/// Location of a line in the document's line sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineRef {
    /// 1-based page number
    pub page: u32,
    /// Index into the full line sequence
    pub index: usize,
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
