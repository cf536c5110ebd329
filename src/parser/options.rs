//! Parsing options and configuration.

use crate::schema::FormSchema;

/// Options for parsing form token streams.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOptions {
    /// Tokens whose baselines differ by at most this many points share a line
    pub y_tolerance: f32,

    /// Slack added to both ends of every column range, in points
    pub x_tolerance: f32,

    /// Lines scanned by the classifier (None = all lines of the first page)
    pub classify_lines: Option<usize>,

    /// Maximum distance between a checkbox glyph and its label, in points
    pub checkbox_window: f32,

    /// Documents with fewer non-whitespace characters are treated as empty
    pub min_text_chars: usize,

    /// Whether batches use parallel processing
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line grouping tolerance.
    pub fn with_y_tolerance(mut self, points: f32) -> Self {
        self.y_tolerance = points;
        self
    }

    /// Set the column matching tolerance.
    pub fn with_x_tolerance(mut self, points: f32) -> Self {
        self.x_tolerance = points;
        self
    }

    /// Scan only the first `lines` lines when classifying.
    pub fn with_classify_lines(mut self, lines: usize) -> Self {
        self.classify_lines = Some(lines);
        self
    }

    /// Set the checkbox search window.
    pub fn with_checkbox_window(mut self, points: f32) -> Self {
        self.checkbox_window = points;
        self
    }

    /// Set the minimum amount of text a document must carry.
    pub fn with_min_text_chars(mut self, chars: usize) -> Self {
        self.min_text_chars = chars;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Apply a schema's layout overrides.
    pub fn resolved_for(&self, schema: &FormSchema) -> ParseOptions {
        let mut resolved = self.clone();
        if let Some(x) = schema.layout.x_tolerance {
            resolved.x_tolerance = x;
        }
        if let Some(y) = schema.layout.y_tolerance {
            resolved.y_tolerance = y;
        }
        resolved
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            y_tolerance: 2.0,
            x_tolerance: 4.0,
            classify_lines: None,
            checkbox_window: 24.0,
            min_text_chars: 1,
            parallel: true,
        }
    }
}
