//! Section segmenter.

use super::quirks::PageBreakStrategy;
use super::warnings::Warnings;
use crate::model::{Line, LineRef};
use crate::schema::{FormSchema, SectionSpec};

/// A line together with its location in the document.
pub(crate) type PlacedLine<'a> = (LineRef, &'a Line);

/// The lines belonging to one declared section.
#[derive(Debug)]
pub(crate) struct Section<'a> {
    pub spec: &'a SectionSpec,
    /// Body lines; the first one is the start marker when the section has one
    pub lines: Vec<PlacedLine<'a>>,
    /// Whether the section's start marker was located
    pub found: bool,
}

impl Section<'_> {
    /// Lines after the start marker.
    pub fn body(&self) -> &[PlacedLine<'_>] {
        if self.found && self.spec.start.is_some() && !self.lines.is_empty() {
            &self.lines[1..]
        } else {
            &self.lines
        }
    }
}

/// Splits a document's lines into the schema's sections.
pub(crate) struct SectionSegmenter<'a> {
    schema: &'a FormSchema,
    offset: usize,
}

impl<'a> SectionSegmenter<'a> {
    pub fn new(schema: &'a FormSchema) -> Self {
        Self { schema, offset: 0 }
    }

    /// Number the lines from `offset` when they are a slice of a larger document.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Segment lines into one [`Section`] per declared section, in schema order.
    ///
    /// Running headers are removed first and never act as boundaries.
    pub fn segment(&self, lines: &'a [Line], warnings: &mut Warnings) -> Vec<Section<'a>> {
        let content: Vec<PlacedLine<'a>> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !self.schema.page_break.is_running_header(line))
            .map(|(index, line)| {
                (
                    LineRef {
                        page: line.page,
                        index: self.offset + index,
                    },
                    line,
                )
            })
            .collect();
        log::debug!(
            "Removed {} running header lines",
            lines.len() - content.len()
        );

        // start position of each section, searching forward from the previous start
        let mut starts: Vec<Option<usize>> = Vec::with_capacity(self.schema.sections.len());
        let mut cursor = 0;
        for spec in &self.schema.sections {
            let start = match &spec.start {
                None => Some(cursor),
                Some(pattern) => {
                    let found = content[cursor.min(content.len())..]
                        .iter()
                        .position(|(_, line)| pattern.is_match(&line.text))
                        .map(|offset| cursor + offset);
                    if let Some(position) = found {
                        cursor = position + 1;
                    } else {
                        warnings.push(format!(
                            "section '{}': start marker '{}' not found",
                            spec.name, pattern
                        ));
                    }
                    found
                }
            };
            starts.push(start);
        }

        self.schema
            .sections
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let Some(start) = starts[i] else {
                    return Section {
                        spec,
                        lines: Vec::new(),
                        found: false,
                    };
                };

                let next_start = starts[i + 1..]
                    .iter()
                    .flatten()
                    .copied()
                    .find(|&s| s >= start)
                    .unwrap_or(content.len());
                let body_from = if spec.start.is_some() { start + 1 } else { start };
                let end = spec
                    .end
                    .as_ref()
                    .and_then(|pattern| {
                        content[body_from.min(next_start)..next_start]
                            .iter()
                            .position(|(_, line)| pattern.is_match(&line.text))
                            .map(|offset| body_from + offset)
                    })
                    .unwrap_or(next_start);

                let section_lines = content[start..end.max(start)].to_vec();
                log::debug!("Section '{}': {} lines", spec.name, section_lines.len());
                Section {
                    spec,
                    lines: section_lines,
                    found: true,
                }
            })
            .collect()
    }
}
