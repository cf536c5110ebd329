//! Per-document accumulator of extracted sections.

use std::collections::BTreeMap;

use serde::Serialize;

use super::line::LineRef;
use super::value::Value;

/// One table row: column name to value.
///
/// Every row carries exactly the columns declared by its table.
pub type Row = BTreeMap<String, Value>;

/// Data extracted from one section of a form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionRecord {
    /// Scalar fields by name
    pub fields: BTreeMap<String, Value>,
    /// Tables by name, rows in document order
    pub tables: BTreeMap<String, Vec<Row>>,
    /// Total-row values by name
    pub totals: BTreeMap<String, Value>,
    /// Line each located field or total was read from
    #[serde(skip)]
    pub provenance: BTreeMap<String, LineRef>,
}

impl SectionRecord {
    /// Create an empty section record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value and remember where it came from.
    pub fn set_field(&mut self, name: impl Into<String>, value: Value, source: Option<LineRef>) {
        let name = name.into();
        if let Some(source) = source {
            self.provenance.insert(name.clone(), source);
        }
        self.fields.insert(name, value);
    }

    /// Set a total value and remember where it came from.
    pub fn set_total(&mut self, name: impl Into<String>, value: Value, source: Option<LineRef>) {
        let name = name.into();
        if let Some(source) = source {
            self.provenance.insert(name.clone(), source);
        }
        self.totals.insert(name, value);
    }

    /// Get a field value.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get a total value.
    pub fn total(&self, name: &str) -> Option<&Value> {
        self.totals.get(name)
    }

    /// Get the rows of a table.
    pub fn table(&self, name: &str) -> Option<&[Row]> {
        self.tables.get(name).map(|rows| rows.as_slice())
    }
}

/// Section name to extracted section data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExtractedRecord {
    pub sections: BTreeMap<String, SectionRecord>,
}

impl ExtractedRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a section.
    pub fn section(&self, name: &str) -> Option<&SectionRecord> {
        self.sections.get(name)
    }

    /// Get or create a section.
    pub fn section_mut(&mut self, name: &str) -> &mut SectionRecord {
        self.sections.entry(name.to_string()).or_default()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the record holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
