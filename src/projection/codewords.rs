//! The SCI codewords projection: renders each `SciControl` into one or more
//! codeword strings of the form `X-Y Z …`.

use std::io::BufRead;

use crate::error::{InvalidMarking, MarkingMismatch, ProcessError, ValidationError};
use crate::model::{Marking, SciControl};
use crate::parse::banner::parse_banner;
use crate::projection::{first_nonblank_line, Attribute, SecurityRecord};

const ATTRIBUTE_NAME: &str = "codewords";
const ATTRIBUTE_NAMES: &[&str] = &[ATTRIBUTE_NAME];

/// Projects `Marking::sci_controls` onto a `codewords` attribute carrying one
/// rendered string per compartment (or per bare identifier, when it has none).
pub struct CodewordsExtractor;

impl CodewordsExtractor {
    /// The attribute names this extractor owns.
    pub fn attribute_names() -> &'static [&'static str] {
        ATTRIBUTE_NAMES
    }

    /// Parse `text` as a banner marking, compute, and set the `codewords`
    /// attribute on `record`.
    pub fn process(text: &str, record: &mut dyn SecurityRecord) -> Result<(), ProcessError> {
        let marking = parse_banner(text)?;
        Self::apply(record, &marking)?;
        Ok(())
    }

    /// Read `reader` line by line until the first non-blank line, treat that line
    /// as the marking text, and project it as `process` does. Content after that
    /// line is ignored.
    pub fn process_stream<R: BufRead>(
        reader: R,
        record: &mut dyn SecurityRecord,
    ) -> Result<(), ProcessError> {
        let line = first_nonblank_line(reader)?.ok_or_else(|| {
            ProcessError::Invalid(InvalidMarking::new(
                "marking is invalid",
                "",
                vec![ValidationError::new("source contains no non-blank line", "-")],
            ))
        })?;
        Self::process(&line, record)
    }

    /// Project an already-parsed `marking` onto `record` directly, for callers
    /// that hold a `Marking` rather than raw text.
    pub fn apply(record: &mut dyn SecurityRecord, marking: &Marking) -> Result<(), MarkingMismatch> {
        let projected = codewords(marking.sci_controls());
        if let Some(existing) = record.get(ATTRIBUTE_NAME) {
            if existing.values != projected {
                return Err(MarkingMismatch {
                    attribute: ATTRIBUTE_NAME.to_string(),
                    existing: existing.values.join(","),
                    projected: projected.join(","),
                });
            }
            return Ok(());
        }
        record.set(Attribute::many(ATTRIBUTE_NAME, projected));
        Ok(())
    }
}

fn codewords(controls: &[SciControl]) -> Vec<String> {
    controls
        .iter()
        .flat_map(|control| {
            if control.compartments.is_empty() {
                vec![control.identifier.clone()]
            } else {
                control
                    .compartments
                    .iter()
                    .map(|(compartment, subs)| render_codeword(&control.identifier, compartment, subs))
                    .collect::<Vec<_>>()
            }
        })
        .collect()
}

fn render_codeword(identifier: &str, compartment: &str, subs: &[String]) -> String {
    let mut codeword = format!("{}-{}", identifier, compartment);
    for sub in subs {
        codeword.push(' ');
        codeword.push_str(sub);
    }
    codeword
}
