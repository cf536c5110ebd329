//! Schema assembler.

use super::warnings::Warnings;
use crate::model::{ExtractedRecord, ParseResult, Row, Value};
use crate::schema::{AttachSpec, FormSchema, SectionSpec, TableSpec};

/// Turns the per-section accumulator into the terminal [`ParseResult`].
pub(crate) struct SchemaAssembler<'s> {
    schema: &'s FormSchema,
}

impl<'s> SchemaAssembler<'s> {
    pub fn new(schema: &'s FormSchema) -> Self {
        Self { schema }
    }

    /// Complete the record with every declared section, field, table and
    /// total, then check required values.
    pub fn assemble(
        &self,
        mut record: ExtractedRecord,
        mut warnings: Warnings,
        pages: Vec<u32>,
    ) -> ParseResult {
        let mut missing = 0;

        for section in &self.schema.sections {
            for table in section.tables.iter().filter(|t| !t.attach.is_empty()) {
                self.attach_rows(section, table, &mut record, &mut warnings);
            }
        }

        for section in &self.schema.sections {
            let data = record.section_mut(&section.name);

            for field in &section.fields {
                let value = data.fields.entry(field.name.clone()).or_insert(Value::Null);
                if field.required && value.is_null() {
                    missing += 1;
                    warnings.push(format!(
                        "section '{}': required field '{}' not found",
                        section.name, field.name
                    ));
                }
            }

            for table in &section.tables {
                data.tables.entry(table.name.clone()).or_default();
                if let Some(totals) = &table.totals {
                    let value = data.totals.entry(totals.field.clone()).or_insert(Value::Null);
                    if totals.required && value.is_null() {
                        missing += 1;
                        warnings.push(format!(
                            "section '{}': required total '{}' of table '{}' not found",
                            section.name, totals.field, table.name
                        ));
                    }
                }
            }
        }

        log::debug!(
            "Assembled {}: {} sections, {} missing required values, {} warnings",
            self.schema.id,
            record.len(),
            missing,
            warnings.len()
        );

        ParseResult {
            form_type: self.schema.id.clone(),
            schema_version: self.schema.version.clone(),
            fully_matched: missing == 0,
            warnings: warnings.into_vec(),
            sections: record,
            pages,
        }
    }

    /// Copy each row of `table` into the first target row with the same
    /// primary cell. Every target row gets the attach column, empty when
    /// nothing refers to it.
    fn attach_rows(
        &self,
        section: &SectionSpec,
        table: &TableSpec,
        record: &mut ExtractedRecord,
        warnings: &mut Warnings,
    ) {
        let Some(source_key) = primary_name(table) else {
            return;
        };
        let targets: Vec<(&AttachSpec, &str)> = table
            .attach
            .iter()
            .filter_map(|attach| {
                let target = self.schema.section(&attach.section)?.table(&attach.table)?;
                Some((attach, primary_name(target)?))
            })
            .collect();

        let rows: Vec<Row> = record
            .section(&section.name)
            .and_then(|s| s.table(&table.name))
            .map(<[Row]>::to_vec)
            .unwrap_or_default();
        for (attach, _) in &targets {
            for target_row in target_rows(record, attach) {
                target_row.insert(attach.into.clone(), Value::Rows(Vec::new()));
            }
        }

        for (n, row) in rows.into_iter().enumerate() {
            let key = row.get(source_key).and_then(Value::as_text).map(str::to_string);
            let mut slot = None;
            if let Some(key) = key.as_deref() {
                for &(attach, target_key) in &targets {
                    let position = record
                        .section(&attach.section)
                        .and_then(|s| s.table(&attach.table))
                        .and_then(|rows| {
                            rows.iter()
                                .position(|t| t.get(target_key).and_then(Value::as_text) == Some(key))
                        });
                    if let Some(position) = position {
                        slot = Some((attach, position));
                        break;
                    }
                }
            }

            match slot {
                Some((attach, position)) => {
                    let target_row = &mut target_rows(record, attach)[position];
                    if let Some(Value::Rows(attached)) = target_row.get_mut(&attach.into) {
                        attached.push(row);
                    }
                }
                None => warnings.push(format!(
                    "section '{}' table '{}' row {}: '{}' matches no row of {}",
                    section.name,
                    table.name,
                    n + 1,
                    key.unwrap_or_default(),
                    targets
                        .iter()
                        .map(|(a, _)| format!("'{}.{}'", a.section, a.table))
                        .collect::<Vec<_>>()
                        .join(" or ")
                )),
            }
        }
    }
}

fn target_rows<'r>(record: &'r mut ExtractedRecord, attach: &AttachSpec) -> &'r mut Vec<Row> {
    record
        .section_mut(&attach.section)
        .tables
        .entry(attach.table.clone())
        .or_default()
}

fn primary_name(table: &TableSpec) -> Option<&str> {
    table.primary_index().map(|i| table.columns[i].name.as_str())
}
