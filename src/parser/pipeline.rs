//! The form parsing pipeline.
//!
//! Adapter → Classifier → Segmenter → Field/Table extractors → Assembler.

use rayon::prelude::*;

use super::assembler::SchemaAssembler;
use super::classifier::FormClassifier;
use super::fields::FieldExtractor;
use super::options::ParseOptions;
use super::segmenter::SectionSegmenter;
use super::tables::TableExtractor;
use super::tokens::{LineBuilder, PageSource};
use super::warnings::Warnings;
use crate::error::{Error, Result};
use crate::model::{ExtractedRecord, Line, PacketResult, ParseResult};
use crate::schema::{FormSchema, SchemaRegistry};

/// Schema-driven parser for known court forms.
///
/// Holds only shared, read-only state; one parser can serve any number of
/// documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct FormParser<'r> {
    registry: &'r SchemaRegistry,
    options: ParseOptions,
}

impl FormParser<'static> {
    /// Create a parser over the built-in schemas.
    pub fn new() -> Self {
        Self::with_registry(SchemaRegistry::builtin())
    }
}

impl Default for FormParser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> FormParser<'r> {
    /// Create a parser over a custom registry.
    pub fn with_registry(registry: &'r SchemaRegistry) -> Self {
        Self {
            registry,
            options: ParseOptions::default(),
        }
    }

    /// Set parse options.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Get the schema registry.
    pub fn registry(&self) -> &'r SchemaRegistry {
        self.registry
    }

    /// Classify and parse a document.
    pub fn parse<S: PageSource + ?Sized>(&self, source: &S) -> Result<ParseResult> {
        let lines = LineBuilder::new(&self.options).build(source)?;
        let schema = self.classifier().classify(&lines)?;
        self.parse_built(source, lines, schema)
    }

    /// Parse a document as a specific form, skipping classification.
    pub fn parse_as<S: PageSource + ?Sized>(&self, source: &S, form_id: &str) -> Result<ParseResult> {
        let schema = self.schema(form_id)?;
        let lines = LineBuilder::new(&self.options).build(source)?;
        self.parse_built(source, lines, schema)
    }

    /// Classify and parse already-built lines.
    pub fn parse_lines(&self, lines: &[Line]) -> Result<ParseResult> {
        if lines.is_empty() {
            return Err(Error::EmptyDocument);
        }
        let schema = self.classifier().classify(lines)?;
        Ok(self.run(schema, lines, 0))
    }

    /// Parse already-built lines as a specific form.
    pub fn parse_lines_as(&self, lines: &[Line], form_id: &str) -> Result<ParseResult> {
        let schema = self.schema(form_id)?;
        if lines.is_empty() {
            return Err(Error::EmptyDocument);
        }
        Ok(self.run(schema, lines, 0))
    }

    /// Parse a packet holding several forms.
    ///
    /// Every page is classified on its own; runs of consecutive pages of the
    /// same form are parsed together. Pages matching no form are reported in
    /// [`PacketResult::unclassified_pages`].
    pub fn parse_packet<S: PageSource + ?Sized>(&self, source: &S) -> Result<PacketResult> {
        let lines = LineBuilder::new(&self.options).build(source)?;
        let pages = self.classifier().classify_pages(&lines);

        let mut forms = Vec::new();
        let mut unclassified_pages = Vec::new();
        let mut start = 0;
        let mut index = 0;

        while index < pages.len() {
            let (page, schema) = pages[index];
            let run_len = pages[index..]
                .iter()
                .take_while(|(_, s)| s.map(|s| &s.id) == schema.map(|s| &s.id))
                .count();
            let run_pages: Vec<u32> = pages[index..index + run_len].iter().map(|(p, _)| *p).collect();
            let end = start
                + lines[start..]
                    .iter()
                    .take_while(|l| run_pages.contains(&l.page))
                    .count();

            match schema {
                Some(schema) => {
                    log::debug!(
                        "Packet pages {}..={}: {}",
                        page,
                        run_pages.last().copied().unwrap_or(page),
                        schema.id
                    );
                    forms.push(self.run(schema, &lines[start..end], start));
                }
                None => unclassified_pages.extend(run_pages),
            }

            start = end;
            index += run_len;
        }

        if forms.is_empty() {
            return Err(Error::UnknownForm(format!(
                "no page of the packet matches any of {}",
                self.registry.form_ids().join(", ")
            )));
        }

        Ok(PacketResult {
            forms,
            unclassified_pages,
        })
    }

    /// Parse many documents, in parallel when enabled.
    ///
    /// Results are returned in input order.
    pub fn parse_batch<S: PageSource + Sync>(&self, sources: &[S]) -> Vec<Result<ParseResult>> {
        if self.options.parallel {
            sources.par_iter().map(|source| self.parse(source)).collect()
        } else {
            sources.iter().map(|source| self.parse(source)).collect()
        }
    }

    fn classifier(&self) -> FormClassifier<'r> {
        FormClassifier::new(self.registry).with_scan_lines(self.options.classify_lines)
    }

    fn schema(&self, form_id: &str) -> Result<&'r FormSchema> {
        self.registry.get(form_id).ok_or_else(|| {
            Error::UnknownForm(format!(
                "'{}' is not one of {}",
                form_id,
                self.registry.form_ids().join(", ")
            ))
        })
    }

    /// Rebuild lines when the schema overrides the line tolerance, then run.
    fn parse_built<S: PageSource + ?Sized>(
        &self,
        source: &S,
        lines: Vec<Line>,
        schema: &FormSchema,
    ) -> Result<ParseResult> {
        let resolved = self.options.resolved_for(schema);
        let lines = if resolved.y_tolerance != self.options.y_tolerance {
            log::debug!(
                "{} overrides y tolerance: {} -> {}",
                schema.id,
                self.options.y_tolerance,
                resolved.y_tolerance
            );
            LineBuilder::new(&resolved).build(source)?
        } else {
            lines
        };
        Ok(self.run(schema, &lines, 0))
    }

    /// Segment, extract and assemble. `offset` is the index of `lines[0]`
    /// in the full document.
    fn run(&self, schema: &FormSchema, lines: &[Line], offset: usize) -> ParseResult {
        let options = self.options.resolved_for(schema);
        let mut warnings = Warnings::new();
        let mut record = ExtractedRecord::new();

        let sections = SectionSegmenter::new(schema)
            .with_offset(offset)
            .segment(lines, &mut warnings);

        let fields = FieldExtractor::new(&options);
        let tables = TableExtractor::new(&options);
        for section in &sections {
            let data = record.section_mut(&section.spec.name);
            fields.extract(section, data, &mut warnings);
            for table in &section.spec.tables {
                tables.extract(section, table, data, &mut warnings);
            }
        }

        let mut pages: Vec<u32> = lines.iter().map(|l| l.page).collect();
        pages.dedup();

        SchemaAssembler::new(schema).assemble(record, warnings, pages)
    }
}
