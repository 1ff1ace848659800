/*
Copyright 2020 Timo Saarinen

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Error types returned by `parse_banner`/`parse_portion`, the validator, and the
//! projection layer. `InvalidMarking` and `MarkingMismatch` are checked, recoverable
//! failures; `MarkingError` is a hard-fail signal for programmer-error contracts
//! (the spec's "null input" cases), not meant to be handled in the ordinary control
//! flow of a caller.

use core::fmt;

/// One rule violation, with a citation back to the source manual's paragraph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    pub appendix: String,
    pub paragraph: String,
}

impl ValidationError {
    /// Construct an error citing only a paragraph under Enclosure 4 (no appendix).
    pub fn new(message: impl Into<String>, paragraph: impl Into<String>) -> ValidationError {
        ValidationError {
            message: message.into(),
            appendix: String::new(),
            paragraph: paragraph.into(),
        }
    }

    /// Construct an error citing a paragraph within a named appendix.
    pub fn with_appendix(
        message: impl Into<String>,
        appendix: impl Into<String>,
        paragraph: impl Into<String>,
    ) -> ValidationError {
        ValidationError {
            message: message.into(),
            appendix: appendix.into(),
            paragraph: paragraph.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: DoD MANUAL NUMBER 5200.01, Volume 2, Enc 4", self.message)?;
        if !self.appendix.is_empty() {
            write!(f, ", Appendix {}", self.appendix)?;
        }
        if !self.paragraph.is_empty() && self.paragraph != "-" {
            write!(f, ", Para {}", self.paragraph)?;
        }
        Ok(())
    }
}

/// The failure surface from parsing or validation: carries every accumulated
/// `ValidationError`, never just the first one encountered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidMarking {
    pub message: String,
    pub input: String,
    pub errors: Vec<ValidationError>,
}

impl InvalidMarking {
    pub fn new(message: impl Into<String>, input: impl Into<String>, errors: Vec<ValidationError>) -> InvalidMarking {
        InvalidMarking {
            message: message.into(),
            input: input.into(),
            errors,
        }
    }
}

impl fmt::Display for InvalidMarking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;
        writeln!(f, "{}", self.input)?;
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidMarking {}

/// Raised by the projection layer when a pre-existing record attribute disagrees with
/// the value projected from a `Marking`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkingMismatch {
    pub attribute: String,
    pub existing: String,
    pub projected: String,
}

impl fmt::Display for MarkingMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "attribute {} disagrees with marking: existing={}, projected={}",
            self.attribute, self.existing, self.projected
        )
    }
}

impl std::error::Error for MarkingMismatch {}

/// A hard-fail, non-recoverable programmer-error signal. Distinct from the two
/// checked failures above: callers are not expected to match on this and continue,
/// only to fix the call site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkingError {
    /// A required input was absent (the spec's "null input" contract).
    NullInput(&'static str),

    /// An internal invariant the crate itself is supposed to guarantee was violated.
    Invariant(String),
}

impl fmt::Display for MarkingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkingError::NullInput(site) => write!(f, "{} was called with no input", site),
            MarkingError::Invariant(msg) => write!(f, "internal invariant violated: {}", msg),
        }
    }
}

impl std::error::Error for MarkingError {}

/// The failure surface from `projection::*::process`/`process_stream`: either the
/// text/stream failed to parse as a marking, the projected value disagreed with a
/// pre-existing record attribute, or (stream form only) reading the source failed.
#[derive(Debug)]
pub enum ProcessError {
    Invalid(InvalidMarking),
    Mismatch(MarkingMismatch),
    Io(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Invalid(e) => write!(f, "{}", e),
            ProcessError::Mismatch(e) => write!(f, "{}", e),
            ProcessError::Io(e) => write!(f, "failed to read marking source: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}

impl From<InvalidMarking> for ProcessError {
    fn from(e: InvalidMarking) -> ProcessError {
        ProcessError::Invalid(e)
    }
}

impl From<MarkingMismatch> for ProcessError {
    fn from(e: MarkingMismatch) -> ProcessError {
        ProcessError::Mismatch(e)
    }
}

impl From<std::io::Error> for ProcessError {
    fn from(e: std::io::Error) -> ProcessError {
        ProcessError::Io(e)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validation_error_full_citation() {
        let e = ValidationError::with_appendix("FOO is disallowed", "2", "2.c");
        assert_eq!(
            e.to_string(),
            "FOO is disallowed: DoD MANUAL NUMBER 5200.01, Volume 2, Enc 4, Appendix 2, Para 2.c"
        );
    }

    #[test]
    fn test_validation_error_suppressed_parts() {
        let e = ValidationError::new("FOO is disallowed", "-");
        assert_eq!(
            e.to_string(),
            "FOO is disallowed: DoD MANUAL NUMBER 5200.01, Volume 2, Enc 4"
        );
    }

    #[test]
    fn test_invalid_marking_render() {
        let errs = vec![ValidationError::new("bad", "1.a")];
        let im = InvalidMarking::new("marking is invalid", "SECRET//NOFORN/RELIDO", errs);
        let rendered = im.to_string();
        assert!(rendered.contains("marking is invalid"));
        assert!(rendered.contains("SECRET//NOFORN/RELIDO"));
        assert!(rendered.contains("bad: DoD MANUAL NUMBER 5200.01, Volume 2, Enc 4, Para 1.a"));
    }
}
