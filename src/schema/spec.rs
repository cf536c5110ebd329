//! Form schema descriptors.
//!
//! A [`FormSchema`] is plain data: the pipeline never branches on a form id,
//! it only interprets sections, fields, tables and layout rules declared here.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::pattern::Pattern;
use crate::error::{Error, Result};

/// Horizontal band on the page, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct XRange {
    pub start: f32,
    pub end: f32,
}

impl XRange {
    /// Create a new range.
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Width of the range.
    pub fn width(&self) -> f32 {
        self.end - self.start
    }

    /// Check if a position falls in the range widened by `tolerance`.
    pub fn contains(&self, x: f32, tolerance: f32) -> bool {
        x >= self.start - tolerance && x <= self.end + tolerance
    }
}

impl From<[f32; 2]> for XRange {
    fn from([start, end]: [f32; 2]) -> Self {
        Self { start, end }
    }
}

impl From<XRange> for [f32; 2] {
    fn from(range: XRange) -> Self {
        [range.start, range.end]
    }
}

/// Declared type of a field or column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Dollar amount
    Currency,
    /// Yes/no answer
    Boolean,
    /// Glyph box next to the label
    Checkbox,
    /// Free text
    #[default]
    Text,
    /// Whole number
    Integer,
    /// Calendar date
    Date,
    /// Account number
    Account,
    /// Option(s) marked by checked boxes
    Choice,
}

impl ValueType {
    /// Check if values of this type are read from the trailing number of a line.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueType::Currency | ValueType::Integer)
    }
}

/// A scalar field inside a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    /// Matched against line text; the value follows the match
    pub label: Pattern,
    #[serde(rename = "type", default)]
    pub value_type: ValueType,
    #[serde(default)]
    pub required: bool,
    /// Band the value is printed in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<XRange>,
    /// Choice options, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Choice accepts several checked options
    #[serde(default)]
    pub multiple: bool,
    /// Choice scan stops at the first line matching this pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<Pattern>,
}

/// A column of a repeating table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "type", default)]
    pub value_type: ValueType,
    pub range: XRange,
    /// A non-blank primary cell starts a new row
    #[serde(default)]
    pub primary: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default)]
    pub multiple: bool,
}

/// Where a table's total row is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalsSpec {
    /// Name of the total in the section's totals
    pub field: String,
    /// Currency column whose sum the total should equal
    pub column: String,
    #[serde(default)]
    pub required: bool,
}

/// Rule deciding whether a line starts a new row or continues the previous one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RowContinuation {
    /// A line with a blank primary cell continues the previous row
    #[default]
    BlankPrimary,
    /// Only a primary cell matching `key` starts a new row
    KeyPattern { key: Pattern },
    /// Every non-blank line is its own row
    Never,
}

/// Copies a table's rows into the rows of another table they refer to.
///
/// A row refers to a target row when its primary cell equals the target's
/// primary cell, e.g. a notice listing line `2.1` and creditor `2.1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachSpec {
    /// Section holding the target table
    pub section: String,
    pub table: String,
    /// Target column receiving the referring rows
    pub into: String,
}

/// A repeating line-item table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    pub name: String,
    pub columns: Vec<ColumnSpec>,
    /// Rows begin after the first line matching this pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Pattern>,
    /// Lines dropped inside the table (repeated column headings)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skip: Vec<Pattern>,
    /// Total-row marker; the table ends here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Pattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totals: Option<TotalsSpec>,
    #[serde(default)]
    pub continuation: RowContinuation,
    /// Fields read from each row's own lines, from its first line up to
    /// the next row
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub row_fields: Vec<FieldSpec>,
    /// Tables the rows refer to, tried in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attach: Vec<AttachSpec>,
}

impl TableSpec {
    /// Index of the primary column.
    pub fn primary_index(&self) -> Option<usize> {
        self.columns.iter().position(|c| c.primary)
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Check if rows of this table carry a value with the given name.
    pub fn has_row_value(&self, name: &str) -> bool {
        self.column(name).is_some() || self.row_fields.iter().any(|f| f.name == name)
    }
}

/// Lines repeated on every continuation page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageBreakRule {
    #[serde(default)]
    pub running_headers: Vec<Pattern>,
}

/// Per-schema overrides of the positional tolerances.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_tolerance: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_tolerance: Option<f32>,
}

/// A labeled region of a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub name: String,
    /// Boundary marker; absent means the section starts at the document start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Pattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Pattern>,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
    #[serde(default)]
    pub tables: Vec<TableSpec>,
}

impl SectionSpec {
    /// Get a table by name.
    pub fn table(&self, name: &str) -> Option<&TableSpec> {
        self.tables.iter().find(|t| t.name == name)
    }
}

/// Versioned descriptor of one supported form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Form id, e.g. "106Sum"
    pub id: String,
    pub version: String,
    pub title: String,
    /// Title/number strings that identify the form (case-insensitive substrings)
    pub identifiers: Vec<String>,
    #[serde(default)]
    pub page_break: PageBreakRule,
    #[serde(default)]
    pub layout: LayoutOverrides,
    pub sections: Vec<SectionSpec>,
}

impl FormSchema {
    /// Parse and validate a schema from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let schema: FormSchema = serde_json::from_str(json)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Get a section by name.
    pub fn section(&self, name: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Check the schema for structural errors.
    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| Err(Error::InvalidSchema(format!("{}: {}", self.id, msg)));

        if self.id.trim().is_empty() {
            return Err(Error::InvalidSchema("schema id is empty".to_string()));
        }
        if self.identifiers.iter().all(|i| i.trim().is_empty()) {
            return fail("no identifiers".to_string());
        }
        if self.sections.is_empty() {
            return fail("no sections".to_string());
        }

        let mut section_names = HashSet::new();
        for (i, section) in self.sections.iter().enumerate() {
            if !section_names.insert(section.name.as_str()) {
                return fail(format!("duplicate section '{}'", section.name));
            }
            if i > 0 && section.start.is_none() {
                return fail(format!("section '{}' has no start marker", section.name));
            }

            let mut field_names = HashSet::new();
            for field in &section.fields {
                if !field_names.insert(field.name.as_str()) {
                    return fail(format!(
                        "duplicate field '{}' in section '{}'",
                        field.name, section.name
                    ));
                }
                self.validate_field(field)?;
            }

            let mut table_names = HashSet::new();
            let mut total_names = HashSet::new();
            for table in &section.tables {
                if !table_names.insert(table.name.as_str()) {
                    return fail(format!(
                        "duplicate table '{}' in section '{}'",
                        table.name, section.name
                    ));
                }
                self.validate_table(table)?;
                if let Some(totals) = &table.totals {
                    if !total_names.insert(totals.field.as_str()) {
                        return fail(format!(
                            "duplicate total '{}' in section '{}'",
                            totals.field, section.name
                        ));
                    }
                    // fields and totals share one provenance map per section
                    if field_names.contains(totals.field.as_str()) {
                        return fail(format!(
                            "total '{}' in section '{}' has the name of a field",
                            totals.field, section.name
                        ));
                    }
                }
                for attach in &table.attach {
                    self.validate_attach(table, attach)?;
                }
            }
        }

        Ok(())
    }

    fn validate_field(&self, field: &FieldSpec) -> Result<()> {
        let fail = |msg: String| Err(Error::InvalidSchema(format!("{}: {}", self.id, msg)));

        if let Some(range) = field.column {
            if range.start > range.end {
                return fail(format!("field '{}' has an inverted column", field.name));
            }
        }
        if field.value_type == ValueType::Choice && field.options.is_empty() {
            return fail(format!("choice field '{}' has no options", field.name));
        }
        Ok(())
    }

    fn validate_attach(&self, table: &TableSpec, attach: &AttachSpec) -> Result<()> {
        let fail = |msg: String| {
            Err(Error::InvalidSchema(format!(
                "{}: table '{}' {}",
                self.id, table.name, msg
            )))
        };

        let target = self
            .section(&attach.section)
            .and_then(|section| section.table(&attach.table));
        match target {
            None => fail(format!(
                "attaches to unknown table '{}.{}'",
                attach.section, attach.table
            )),
            Some(target) if target.has_row_value(&attach.into) => fail(format!(
                "attaches into '{}', which table '{}' already has",
                attach.into, target.name
            )),
            Some(_) => Ok(()),
        }
    }

    fn validate_table(&self, table: &TableSpec) -> Result<()> {
        let fail = |msg: String| {
            Err(Error::InvalidSchema(format!(
                "{}: table '{}' {}",
                self.id, table.name, msg
            )))
        };

        if table.columns.is_empty() {
            return fail("has no columns".to_string());
        }
        let primaries = table.columns.iter().filter(|c| c.primary).count();
        if primaries != 1 {
            return fail(format!("needs exactly one primary column, found {}", primaries));
        }

        let mut column_names = HashSet::new();
        for column in &table.columns {
            if !column_names.insert(column.name.as_str()) {
                return fail(format!("has duplicate column '{}'", column.name));
            }
            if column.range.start > column.range.end {
                return fail(format!("has inverted range on column '{}'", column.name));
            }
            if column.value_type == ValueType::Choice && column.options.is_empty() {
                return fail(format!("has choice column '{}' without options", column.name));
            }
        }

        for field in &table.row_fields {
            if !column_names.insert(field.name.as_str()) {
                return fail(format!("has row field '{}' named like another value", field.name));
            }
            if field.required {
                return fail(format!("marks row field '{}' as required", field.name));
            }
            self.validate_field(field)?;
        }

        if let Some(totals) = &table.totals {
            if table.total.is_none() {
                return fail("declares totals without a total-row marker".to_string());
            }
            match table.column(&totals.column) {
                Some(column) if column.value_type == ValueType::Currency => {}
                Some(_) => return fail(format!("totals column '{}' is not currency", totals.column)),
                None => return fail(format!("totals column '{}' does not exist", totals.column)),
            }
        }

        Ok(())
    }
}
