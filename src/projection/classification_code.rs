//! The classification short-code projection: US classification codes, their NATO
//! equivalents, and the ATOMAL/BOHEMIA/BALK qualifier suffixes.

use std::io::BufRead;

use crate::error::{InvalidMarking, MarkingMismatch, ProcessError, ValidationError};
use crate::model::Marking;
use crate::parse::banner::parse_banner;
use crate::projection::{first_nonblank_line, Attribute, SecurityRecord};
use crate::vocab::ClassificationLevel;

const ATTRIBUTE_NAME: &str = "classification_code";
const ATTRIBUTE_NAMES: &[&str] = &[ATTRIBUTE_NAME];

/// Projects `Marking::classification` (and, for an FGI/NATO marking, its NATO
/// qualifier) onto a single `classification_code` attribute.
pub struct ClassificationCodeExtractor;

impl ClassificationCodeExtractor {
    /// The attribute names this extractor owns; hides `record`'s underlying map
    /// surface from callers who only need to know what this extractor projects.
    pub fn attribute_names() -> &'static [&'static str] {
        ATTRIBUTE_NAMES
    }

    /// Parse `text` as a banner marking, compute, and set the `classification_code`
    /// attribute on `record`. Raises `ProcessError::Invalid` if `text` does not
    /// parse, or `ProcessError::Mismatch` if the record already carries a
    /// different code.
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
        let projected = classification_code(marking);
        if let Some(existing) = record.get(ATTRIBUTE_NAME) {
            if existing.values != vec![projected.clone()] {
                return Err(MarkingMismatch {
                    attribute: ATTRIBUTE_NAME.to_string(),
                    existing: existing.values.join(","),
                    projected,
                });
            }
            return Ok(());
        }
        record.set(Attribute::single(ATTRIBUTE_NAME, projected));
        Ok(())
    }
}

fn nato_base(level: ClassificationLevel) -> &'static str {
    match level {
        ClassificationLevel::Unclassified => "NU",
        ClassificationLevel::Restricted => "NR",
        ClassificationLevel::Confidential => "NC",
        ClassificationLevel::Secret => "NS",
        ClassificationLevel::TopSecret => "CTS",
    }
}

fn classification_code(marking: &Marking) -> String {
    let is_nato = matches!(marking.fgi_authority(), Some("NATO") | Some("COSMIC"));
    let base = if is_nato {
        nato_base(marking.classification()).to_string()
    } else {
        marking.classification().short_code().to_string()
    };

    match marking.nato_qualifier() {
        Some("ATOMAL") if marking.classification() == ClassificationLevel::Secret => base + "AT",
        Some("ATOMAL") => base + "A",
        Some("BOHEMIA") => base + "-B",
        Some("BALK") => base + "-BALK",
        _ => base,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::projection::InMemoryRecord;
    use std::io::Cursor;

    #[test]
    fn test_us_classification_code() {
        let m = parse_banner("SECRET//NOFORN").unwrap();
        assert_eq!(classification_code(&m), "S");
    }

    #[test]
    fn test_cosmic_top_secret_code() {
        let m = parse_banner("//COSMIC TOP SECRET").unwrap();
        assert_eq!(classification_code(&m), "CTS");
    }

    #[test]
    fn test_secret_atomal_uses_at_suffix() {
        let m = parse_banner("//NATO SECRET//ATOMAL").unwrap();
        assert_eq!(classification_code(&m), "NSAT");
    }

    #[test]
    fn test_top_secret_atomal_uses_a_suffix() {
        let m = parse_banner("//COSMIC TOP SECRET//ATOMAL").unwrap();
        assert_eq!(classification_code(&m), "CTSA");
    }

    #[test]
    fn test_bohemia_suffix() {
        let m = parse_banner("//COSMIC TOP SECRET//BOHEMIA").unwrap();
        assert_eq!(classification_code(&m), "CTS-B");
    }

    #[test]
    fn test_attribute_names() {
        assert_eq!(
            ClassificationCodeExtractor::attribute_names(),
            &["classification_code"]
        );
    }

    #[test]
    fn test_apply_sets_attribute() {
        let m = parse_banner("SECRET//NOFORN").unwrap();
        let mut record = InMemoryRecord::default();
        ClassificationCodeExtractor::apply(&mut record, &m).unwrap();
        assert_eq!(
            record.get("classification_code"),
            Some(Attribute::single("classification_code", "S"))
        );
    }

    #[test]
    fn test_apply_is_idempotent() {
        let m = parse_banner("SECRET//NOFORN").unwrap();
        let mut record = InMemoryRecord::default();
        ClassificationCodeExtractor::apply(&mut record, &m).unwrap();
        ClassificationCodeExtractor::apply(&mut record, &m).unwrap();
        assert_eq!(
            record.get("classification_code"),
            Some(Attribute::single("classification_code", "S"))
        );
    }

    #[test]
    fn test_apply_raises_mismatch() {
        let m = parse_banner("SECRET//NOFORN").unwrap();
        let mut record = InMemoryRecord::default();
        record.set(Attribute::single("classification_code", "TS"));
        let err = ClassificationCodeExtractor::apply(&mut record, &m).unwrap_err();
        assert_eq!(err.attribute, "classification_code");
    }

    #[test]
    fn test_process_parses_text_directly() {
        let mut record = InMemoryRecord::default();
        ClassificationCodeExtractor::process("SECRET//NOFORN", &mut record).unwrap();
        assert_eq!(
            record.get("classification_code"),
            Some(Attribute::single("classification_code", "S"))
        );
    }

    #[test]
    fn test_process_reports_invalid_marking() {
        let mut record = InMemoryRecord::default();
        let err = ClassificationCodeExtractor::process("NOT A REAL CLASSIFICATION", &mut record)
            .unwrap_err();
        assert!(matches!(err, ProcessError::Invalid(_)));
    }

    #[test]
    fn test_process_stream_uses_first_non_blank_line() {
        let mut record = InMemoryRecord::default();
        let source = "\n\nSECRET//NOFORN\nthis trailing line is ignored\n";
        ClassificationCodeExtractor::process_stream(Cursor::new(source), &mut record).unwrap();
        assert_eq!(
            record.get("classification_code"),
            Some(Attribute::single("classification_code", "S"))
        );
    }

    #[test]
    fn test_process_stream_all_blank_is_invalid() {
        let mut record = InMemoryRecord::default();
        let err =
            ClassificationCodeExtractor::process_stream(Cursor::new("\n\n  \n"), &mut record)
                .unwrap_err();
        assert!(matches!(err, ProcessError::Invalid(_)));
    }
}
