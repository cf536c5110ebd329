//! Terminal results of the parsing pipeline.

use serde::Serialize;

use super::line::LineRef;
use super::record::{ExtractedRecord, Row, SectionRecord};
use super::value::Value;

/// Parsed form.
///
/// Constructed once per document by the assembler and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    /// Form id, e.g. "106A/B"
    pub form_type: String,
    /// Version of the schema that produced this result
    pub schema_version: String,
    /// Every required field and total was located
    pub fully_matched: bool,
    /// Recovered anomalies in document order
    pub warnings: Vec<String>,
    /// Extracted data by section
    pub sections: ExtractedRecord,
    /// Pages this result was built from
    #[serde(skip)]
    pub pages: Vec<u32>,
}

impl ParseResult {
    /// Get a section.
    pub fn section(&self, name: &str) -> Option<&SectionRecord> {
        self.sections.section(name)
    }

    /// Get a field value by section and field name.
    pub fn field(&self, section: &str, name: &str) -> Option<&Value> {
        self.section(section).and_then(|s| s.field(name))
    }

    /// Get a total value by section and total name.
    pub fn total(&self, section: &str, name: &str) -> Option<&Value> {
        self.section(section).and_then(|s| s.total(name))
    }

    /// Get table rows by section and table name.
    pub fn table(&self, section: &str, name: &str) -> Option<&[Row]> {
        self.section(section).and_then(|s| s.table(name))
    }

    /// Line a located field or total was read from.
    pub fn source_of(&self, section: &str, name: &str) -> Option<LineRef> {
        self.section(section)
            .and_then(|s| s.provenance.get(name))
            .copied()
    }

    /// Check if any warnings were recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Result of parsing a packet of several forms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PacketResult {
    /// One result per run of consecutive pages of the same form
    pub forms: Vec<ParseResult>,
    /// Pages that matched no known form
    pub unclassified_pages: Vec<u32>,
}

impl PacketResult {
    /// Find the first parsed form of the given type.
    pub fn form(&self, form_type: &str) -> Option<&ParseResult> {
        self.forms
            .iter()
            .find(|f| f.form_type.eq_ignore_ascii_case(form_type))
    }

    /// Check if every parsed form matched fully.
    pub fn fully_matched(&self) -> bool {
        self.forms.iter().all(|f| f.fully_matched)
    }
}
