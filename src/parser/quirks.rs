//! Strategies for the layout quirks of multi-page forms.
//!
//! Schemas select a strategy by data; the extractor only talks to the traits.

use crate::model::Line;
use crate::schema::{PageBreakRule, RowContinuation};

/// Detects lines repeated on continuation pages.
pub trait PageBreakStrategy {
    /// Check if a line is a running header or footer.
    fn is_running_header(&self, line: &Line) -> bool;
}

impl PageBreakStrategy for PageBreakRule {
    fn is_running_header(&self, line: &Line) -> bool {
        self.running_headers.iter().any(|p| p.is_match(&line.text))
    }
}

/// Decides whether a table line starts a new row.
pub trait ContinuationStrategy {
    /// Check if a line with the given primary cell text starts a new row.
    fn starts_row(&self, primary: &str) -> bool;

    /// Check if a line continues the previous row.
    fn is_continuation(&self, primary: &str) -> bool {
        !self.starts_row(primary)
    }
}

impl ContinuationStrategy for RowContinuation {
    fn starts_row(&self, primary: &str) -> bool {
        match self {
            RowContinuation::BlankPrimary => !primary.trim().is_empty(),
            RowContinuation::KeyPattern { key } => key.is_match(primary.trim()),
            RowContinuation::Never => true,
        }
    }
}
