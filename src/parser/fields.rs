//! Scalar field extraction.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::choice::{self, SegmentBuilder};
use super::normalize::{self, checkbox_state};
use super::options::ParseOptions;
use super::segmenter::{PlacedLine, Section};
use super::warnings::Warnings;
use crate::model::{Line, LineRef, SectionRecord, Value};
use crate::schema::{FieldSpec, ValueType};

/// A label match: position in the section and byte range in the line text.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LabelHit {
    pos: usize,
    start: usize,
    end: usize,
}

impl LabelHit {
    fn overlaps(&self, other: &LabelHit) -> bool {
        self.pos == other.pos && self.start < other.end && other.start < self.end
    }
}

/// Extracts a section's scalar fields.
pub(crate) struct FieldExtractor<'o> {
    options: &'o ParseOptions,
}

impl<'o> FieldExtractor<'o> {
    pub fn new(options: &'o ParseOptions) -> Self {
        Self { options }
    }

    /// Extract every declared field of the section into `record`.
    pub fn extract(&self, section: &Section<'_>, record: &mut SectionRecord, warnings: &mut Warnings) {
        let fields = &section.spec.fields;
        let context = format!("section '{}'", section.spec.name);
        let values = self.read_fields(&context, fields, &section.lines, warnings);
        for (field, (value, source)) in fields.iter().zip(values) {
            record.set_field(field.name.clone(), value, source);
        }

        log::debug!(
            "Section '{}': {} of {} fields located",
            section.spec.name,
            record.fields.values().filter(|v| !v.is_null()).count(),
            fields.len()
        );
    }

    /// Read `fields` from `lines`, one value per field in declaration order.
    ///
    /// Each field reads the first line matching its label. When the labels of
    /// several fields match the same text, the field with the narrowest value
    /// column keeps the line and the others move on to their next match.
    pub fn read_fields(
        &self,
        context: &str,
        fields: &[FieldSpec],
        lines: &[PlacedLine<'_>],
        warnings: &mut Warnings,
    ) -> Vec<(Value, Option<LineRef>)> {
        let candidates: Vec<Vec<LabelHit>> = fields
            .iter()
            .map(|field| {
                lines
                    .iter()
                    .enumerate()
                    .filter_map(|(pos, (_, line))| {
                        field.label.find(&line.text).map(|(start, end)| LabelHit { pos, start, end })
                    })
                    .collect()
            })
            .collect();

        let mut order: Vec<usize> = (0..fields.len()).collect();
        order.sort_by(|&a, &b| {
            column_width(&fields[a])
                .partial_cmp(&column_width(&fields[b]))
                .unwrap_or(Ordering::Equal)
                .then(a.cmp(&b))
        });

        let mut claims: Vec<(LabelHit, usize)> = Vec::new();
        let mut reported: HashSet<(usize, usize)> = HashSet::new();
        let mut assigned: Vec<Option<LabelHit>> = vec![None; fields.len()];

        for &index in &order {
            for hit in &candidates[index] {
                let rival = claims.iter().find(|(claimed, _)| claimed.overlaps(hit));
                match rival {
                    Some(&(_, owner)) => {
                        if column_width(&fields[owner]) == column_width(&fields[index])
                            && reported.insert((owner, index))
                        {
                            warnings.push(format!(
                                "{}: fields '{}' and '{}' match the same text on page {}; '{}' kept it",
                                context,
                                fields[owner].name,
                                fields[index].name,
                                lines[hit.pos].0.page,
                                fields[owner].name
                            ));
                        }
                    }
                    None => {
                        claims.push((*hit, index));
                        assigned[index] = Some(*hit);
                        break;
                    }
                }
            }
        }

        fields
            .iter()
            .zip(assigned)
            .map(|(field, hit)| match hit {
                Some(hit) => self.read(context, lines, field, hit, warnings),
                None => (Value::Null, None),
            })
            .collect()
    }

    fn read(
        &self,
        context: &str,
        lines: &[PlacedLine<'_>],
        field: &FieldSpec,
        hit: LabelHit,
        warnings: &mut Warnings,
    ) -> (Value, Option<LineRef>) {
        let (line_ref, line) = lines[hit.pos];
        let context = format!("{} field '{}'", context, field.name);

        let (value, source) = match field.value_type {
            ValueType::Checkbox => match self.checkbox(line, hit) {
                Some(state) => (Value::Bool(state), Some(line_ref)),
                None => {
                    warnings.push(format!("{}: no checkbox next to the label", context));
                    (Value::Null, None)
                }
            },
            ValueType::Choice => {
                let selection = self.choice(lines, field, hit);
                for text in &selection.unmatched {
                    warnings.push(format!("{}: checked option '{}' is not declared", context, text));
                }
                (selection.value, selection.origin)
            }
            value_type => {
                let raw = self.scalar_text(line, field, hit);
                let located = normalize::locate(&raw, value_type);
                // text with nothing of the declared type in it is unreadable, not blank
                let parsed = if located.is_empty() && raw.chars().any(char::is_alphanumeric) {
                    None
                } else {
                    normalize::normalize(located, value_type)
                };
                match parsed {
                    Some(value) => (value, Some(line_ref)),
                    None => {
                        warnings.push(format!(
                            "{}: cannot read '{}' as {:?}",
                            context, raw, value_type
                        ));
                        (Value::Null, None)
                    }
                }
            }
        };

        if value.is_null() {
            (value, None)
        } else {
            (value, source)
        }
    }

    /// Text holding the value.
    ///
    /// A declared column means only the tokens in that band after the label;
    /// a blank band is a blank value. Without one, numbers come from the
    /// tokens after the label and everything else from the rest of the line.
    fn scalar_text(&self, line: &Line, field: &FieldSpec, hit: LabelHit) -> String {
        let label_last = line.token_at(hit.end.saturating_sub(1)).unwrap_or(0);
        let after_label = line.tokens.iter().skip(label_last + 1);

        if let Some(range) = field.column {
            let band: Vec<&str> = after_label
                .filter(|t| range.contains(t.anchor(), self.options.x_tolerance))
                .map(|t| t.text.as_str())
                .collect();
            return normalize::strip_leaders(&band.join(" "));
        }
        if field.value_type.is_numeric() {
            // the label's own token is printed caption text, e.g. "from line 12"
            let rest: Vec<&str> = after_label.map(|t| t.text.as_str()).collect();
            return normalize::strip_leaders(&rest.join(" "));
        }

        let remainder = line.text[hit.end..].trim_start_matches(|c: char| c == ':' || c.is_whitespace());
        normalize::strip_leaders(remainder)
    }

    /// State of the box nearest to the label on its line.
    fn checkbox(&self, line: &Line, hit: LabelHit) -> Option<bool> {
        let first = line.token_at(hit.start)?;
        let last = line.token_at(hit.end.saturating_sub(1)).unwrap_or(first).max(first);

        let spans = line.token_spans();
        if spans[first].0 < hit.start {
            if let Some(state) = checkbox_state(&line.tokens[first].text) {
                return Some(state);
            }
        }

        let left = line.tokens[first].x;
        let right = line.tokens[last].right();
        line.tokens
            .iter()
            .enumerate()
            .filter(|(i, _)| *i < first || *i > last)
            .filter_map(|(i, token)| {
                let state = checkbox_state(&token.text)?;
                let distance = if i < first {
                    left - token.right()
                } else {
                    token.x - right
                };
                (distance <= self.options.checkbox_window).then_some((distance, state))
            })
            .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal))
            .map(|(_, state)| state)
    }

    /// Options checked between the label and the field's `until` line.
    fn choice(&self, lines: &[PlacedLine<'_>], field: &FieldSpec, hit: LabelHit) -> choice::Selection<LineRef> {
        let mut builder = SegmentBuilder::new();
        for (pos, (line_ref, line)) in lines.iter().enumerate().skip(hit.pos) {
            let text = if pos == hit.pos {
                &line.text[hit.end..]
            } else {
                if field.until.as_ref().is_some_and(|p| p.is_match(&line.text)) {
                    break;
                }
                line.text.as_str()
            };
            builder.push(text, *line_ref);
        }
        choice::select(&field.options, field.multiple, &builder.finish())
    }
}

fn column_width(field: &FieldSpec) -> f32 {
    field.column.map_or(f32::INFINITY, |c| c.width())
}
