//! Rules for Foreign Government Information markings: the `FGI <countries>`,
//! `FGI+<countries>`, and bare concealed `FGI` forms.

use crate::error::ValidationError;
use crate::model::Marking;
use crate::util;
use crate::vocab::{ClassificationLevel, MarkingType};

/// An FGI marking (named countries or concealed) requires at least CONFIDENTIAL.
pub(super) fn rule_fgi_threshold(m: &Marking) -> Vec<ValidationError> {
    if (!m.us_fgi_country_codes.is_empty() || m.concealed_fgi)
        && m.classification < ClassificationLevel::Confidential
    {
        vec![ValidationError::new(
            "an FGI marking requires classification at least CONFIDENTIAL",
            "9.b",
        )]
    } else {
        Vec::new()
    }
}

/// "USA" never belongs in the FGI country list; a document this marking
/// originates from is itself a U.S. document.
pub(super) fn rule_fgi_usa_forbidden(m: &Marking) -> Vec<ValidationError> {
    if m.us_fgi_country_codes.iter().any(|c| c == "USA") {
        vec![ValidationError::new(
            "USA may not appear in the FGI country code list",
            "9.c",
        )]
    } else {
        Vec::new()
    }
}

/// FGI country codes follow the shared ordering rule, with no USA exception.
pub(super) fn rule_fgi_country_code_order(m: &Marking) -> Vec<ValidationError> {
    if util::is_sorted_country_codes(&m.us_fgi_country_codes, false) {
        Vec::new()
    } else {
        vec![ValidationError::new(
            "FGI country codes must be ordered: trigraphs before tetragraphs, alphabetical within each class",
            "9.d",
        )]
    }
}

/// An FGI marking belongs on a U.S.-type document; a marking whose head is
/// already FGI (i.e. the classification authority is foreign) cannot also carry
/// an FGI control of its own.
pub(super) fn rule_fgi_only_in_us_document(m: &Marking) -> Vec<ValidationError> {
    let carries_fgi_control = !m.us_fgi_country_codes.is_empty() || m.concealed_fgi;
    if carries_fgi_control && m.marking_type == MarkingType::Fgi {
        vec![ValidationError::new(
            "an FGI control is only valid within a U.S.-type document",
            "9.b",
        )]
    } else {
        Vec::new()
    }
}
