//! Form classifier.

use crate::error::{Error, Result};
use crate::model::Line;
use crate::schema::{FormSchema, SchemaRegistry};

/// Identifies which registered form a document is.
///
/// Matching is exact-substring and case-insensitive; the first schema in
/// registry order with a matching identifier wins.
#[derive(Debug, Clone, Copy)]
pub struct FormClassifier<'r> {
    registry: &'r SchemaRegistry,
    scan_lines: Option<usize>,
}

impl<'r> FormClassifier<'r> {
    /// Create a classifier that scans all lines of the first page.
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self {
            registry,
            scan_lines: None,
        }
    }

    /// Scan only the first `lines` lines instead of the first page.
    pub fn with_scan_lines(mut self, lines: Option<usize>) -> Self {
        self.scan_lines = lines;
        self
    }

    /// Classify a document.
    pub fn classify(&self, lines: &[Line]) -> Result<&'r FormSchema> {
        let window: Vec<&Line> = match self.scan_lines {
            Some(n) => lines.iter().take(n).collect(),
            None => {
                let first_page = lines.first().map(|l| l.page);
                lines
                    .iter()
                    .take_while(|l| Some(l.page) == first_page)
                    .collect()
            }
        };

        match self.match_lines(&window) {
            Some(schema) => {
                log::debug!("Classified document as {}", schema.id);
                Ok(schema)
            }
            None => Err(Error::UnknownForm(format!(
                "no identifier of {} found in the first {} lines",
                self.registry.form_ids().join(", "),
                window.len()
            ))),
        }
    }

    /// Classify every page independently, in page order.
    pub fn classify_pages(&self, lines: &[Line]) -> Vec<(u32, Option<&'r FormSchema>)> {
        let mut pages = Vec::new();
        let mut start = 0;
        while start < lines.len() {
            let page = lines[start].page;
            let end = lines[start..]
                .iter()
                .position(|l| l.page != page)
                .map_or(lines.len(), |offset| start + offset);
            let window: Vec<&Line> = lines[start..end].iter().collect();
            pages.push((page, self.match_lines(&window)));
            start = end;
        }
        pages
    }

    fn match_lines(&self, lines: &[&Line]) -> Option<&'r FormSchema> {
        let haystack = lines
            .iter()
            .map(|l| l.text.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");

        self.registry.schemas().iter().find(|schema| {
            schema
                .identifiers
                .iter()
                .filter(|id| !id.trim().is_empty())
                .any(|id| haystack.contains(&id.to_lowercase()))
        })
    }
}
