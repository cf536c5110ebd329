//! Repeating line-item table extraction.

use super::choice::{self, SegmentBuilder};
use super::columns::{resolve_column, ColumnMatch};
use super::fields::FieldExtractor;
use super::normalize;
use super::options::ParseOptions;
use super::quirks::ContinuationStrategy;
use super::segmenter::{PlacedLine, Section};
use super::warnings::Warnings;
use crate::model::{Amount, Line, LineRef, Row, SectionRecord, Value};
use crate::schema::{ColumnSpec, TableSpec, ValueType};

/// Cell texts of one row before typing.
#[derive(Debug)]
struct RawRow<'a> {
    origin: LineRef,
    cells: Vec<String>,
    /// Lines from the row's first line up to the next row, skipped ones included
    block: Vec<PlacedLine<'a>>,
}

/// Extracts a section's tables.
pub(crate) struct TableExtractor<'o> {
    options: &'o ParseOptions,
    fields: FieldExtractor<'o>,
}

impl<'o> TableExtractor<'o> {
    pub fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            fields: FieldExtractor::new(options),
        }
    }

    /// Extract one table of the section into `record`, including its total.
    pub fn extract(
        &self,
        section: &Section<'_>,
        table: &TableSpec,
        record: &mut SectionRecord,
        warnings: &mut Warnings,
    ) {
        let context = format!("section '{}' table '{}'", section.spec.name, table.name);
        let body = section.body();

        let first_row = if !section.found {
            None
        } else {
            match &table.header {
                None => Some(0),
                Some(header) => {
                    let found = body.iter().position(|(_, l)| header.is_match(&l.text));
                    if found.is_none() {
                        warnings.push(format!("{}: header '{}' not found", context, header));
                    }
                    found.map(|p| p + 1)
                }
            }
        };

        let (raw_rows, total_line) = match first_row {
            Some(first) => self.collect_rows(&body[first..], table, &context, warnings),
            None => (Vec::new(), None),
        };

        let rows: Vec<Row> = raw_rows
            .iter()
            .enumerate()
            .map(|(n, raw)| {
                let context = format!("{} row {}", context, n + 1);
                let mut row = self.type_row(table, raw, &context, warnings);
                let values = self
                    .fields
                    .read_fields(&context, &table.row_fields, &raw.block, warnings);
                for (field, (value, _)) in table.row_fields.iter().zip(values) {
                    row.insert(field.name.clone(), value);
                }
                row
            })
            .collect();
        log::debug!("{}: {} rows", context, rows.len());

        if let Some(totals) = &table.totals {
            let (value, source) = match total_line {
                Some((line_ref, line)) => {
                    let value = self.read_total(table, line, &totals.column, &context, warnings);
                    let source = (!value.is_null()).then_some(line_ref);
                    (value, source)
                }
                None => (Value::Null, None),
            };

            if let Some(total) = value.as_amount() {
                let sum: i64 = rows
                    .iter()
                    .filter_map(|row| row.get(&totals.column).and_then(Value::as_amount))
                    .map(|a| a.cents())
                    .sum();
                if sum != total.cents() {
                    warnings.push(format!(
                        "{}: total {} differs from column '{}' sum {}",
                        context,
                        total,
                        totals.column,
                        Amount::from_cents(sum)
                    ));
                }
            }
            record.set_total(totals.field.clone(), value, source);
        }

        record.tables.insert(table.name.clone(), rows);
    }

    /// Walk the table region, merging continuation lines into their rows.
    fn collect_rows<'a>(
        &self,
        lines: &[PlacedLine<'a>],
        table: &TableSpec,
        context: &str,
        warnings: &mut Warnings,
    ) -> (Vec<RawRow<'a>>, Option<PlacedLine<'a>>) {
        let primary = table.primary_index().unwrap_or(0);
        let mut rows: Vec<RawRow<'a>> = Vec::new();

        for &(line_ref, line) in lines {
            if table.total.as_ref().is_some_and(|p| p.is_match(&line.text)) {
                return (rows, Some((line_ref, line)));
            }
            // column headings repeated after a page break belong to no row
            if table.header.as_ref().is_some_and(|p| p.is_match(&line.text)) {
                continue;
            }

            let cells = if table.skip.iter().any(|p| p.is_match(&line.text)) {
                None
            } else {
                Some(self.split_cells(line, &table.columns, context, warnings))
            };
            let cells = match cells {
                Some(cells) if !cells.iter().all(|c| c.is_empty()) => cells,
                _ => {
                    if let Some(row) = rows.last_mut() {
                        row.block.push((line_ref, line));
                    }
                    continue;
                }
            };

            if table.continuation.starts_row(&cells[primary]) {
                rows.push(RawRow {
                    origin: line_ref,
                    cells,
                    block: vec![(line_ref, line)],
                });
            } else if let Some(row) = rows.last_mut() {
                for (cell, extra) in row.cells.iter_mut().zip(cells) {
                    if extra.is_empty() {
                        continue;
                    }
                    if !cell.is_empty() {
                        cell.push(' ');
                    }
                    cell.push_str(&extra);
                }
                row.block.push((line_ref, line));
            } else {
                log::debug!("{}: dropped continuation line before any row: {}", context, line.text);
            }
        }

        (rows, None)
    }

    /// Assign a line's tokens to columns by position.
    fn split_cells(
        &self,
        line: &Line,
        columns: &[ColumnSpec],
        context: &str,
        warnings: &mut Warnings,
    ) -> Vec<String> {
        let mut cells = vec![String::new(); columns.len()];
        for token in &line.tokens {
            let placed = resolve_column(
                token.anchor(),
                columns.iter().map(|c| &c.range),
                self.options.x_tolerance,
            );
            if let ColumnMatch::Ambiguous { chosen, rival } = placed {
                warnings.push(format!(
                    "{}: '{}' at x={} fits columns '{}' and '{}' equally; '{}' chosen",
                    context, token.text, token.x, columns[chosen].name, columns[rival].name,
                    columns[chosen].name
                ));
            }
            match placed.index() {
                Some(i) => {
                    if !cells[i].is_empty() {
                        cells[i].push(' ');
                    }
                    cells[i].push_str(&token.text);
                }
                None => log::debug!("{}: token '{}' at x={} is outside all columns", context, token.text, token.x),
            }
        }
        cells
    }

    fn type_row(&self, table: &TableSpec, raw: &RawRow<'_>, context: &str, warnings: &mut Warnings) -> Row {
        table
            .columns
            .iter()
            .zip(&raw.cells)
            .map(|(column, cell)| {
                let value = match column.value_type {
                    ValueType::Choice => {
                        let mut builder = SegmentBuilder::new();
                        builder.push(cell, raw.origin);
                        let selection =
                            choice::select(&column.options, column.multiple, &builder.finish());
                        for text in &selection.unmatched {
                            warnings.push(format!(
                                "{} column '{}': checked option '{}' is not declared",
                                context, column.name, text
                            ));
                        }
                        selection.value
                    }
                    value_type => normalize::normalize(cell, value_type).unwrap_or_else(|| {
                        warnings.push(format!(
                            "{} column '{}': cannot read '{}' as {:?}",
                            context, column.name, cell, value_type
                        ));
                        Value::Null
                    }),
                };
                (column.name.clone(), value)
            })
            .collect()
    }

    /// Amount on the total row: the totals column band, else the trailing amount.
    fn read_total(
        &self,
        table: &TableSpec,
        line: &Line,
        column: &str,
        context: &str,
        warnings: &mut Warnings,
    ) -> Value {
        let band: Vec<&str> = table
            .column(column)
            .map(|spec| {
                line.tokens
                    .iter()
                    .filter(|t| spec.range.contains(t.anchor(), self.options.x_tolerance))
                    .map(|t| t.text.as_str())
                    .collect()
            })
            .unwrap_or_default();

        let raw = if band.is_empty() {
            let after = table
                .total
                .as_ref()
                .and_then(|p| p.find(&line.text))
                .map_or(0, |(_, end)| end);
            normalize::locate(&normalize::strip_leaders(&line.text[after..]), ValueType::Currency)
                .to_string()
        } else {
            band.join(" ")
        };

        normalize::normalize(&raw, ValueType::Currency).unwrap_or_else(|| {
            warnings.push(format!("{}: cannot read total '{}'", context, raw));
            Value::Null
        })
    }
}
