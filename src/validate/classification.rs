//! Rules keyed off the classification level itself: what dissemination controls
//! a given level tolerates, and the thresholds a handful of controls impose on it.

use crate::error::ValidationError;
use crate::model::Marking;
use crate::vocab::{ClassificationLevel, DissemControl};

/// RESTRICTED//ORCON is never permitted.
pub(super) fn rule_restricted_orcon(m: &Marking) -> Vec<ValidationError> {
    if m.classification == ClassificationLevel::Restricted && m.dissem.contains(&DissemControl::Orcon) {
        vec![ValidationError::new("RESTRICTED is not compatible with ORCON", "10.d.3")]
    } else {
        Vec::new()
    }
}

/// RESTRICTED rejects NOFORN, PROPIN, and RELIDO outright, each under its own
/// appendix citation.
pub(super) fn rule_restricted_noforn_propin_relido(m: &Marking) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if m.classification != ClassificationLevel::Restricted {
        return errors;
    }
    if m.dissem.contains(&DissemControl::NoForn) {
        errors.push(ValidationError::with_appendix(
            "RESTRICTED is not compatible with NOFORN",
            "2",
            "2.c",
        ));
    }
    if m.dissem.contains(&DissemControl::Propin) {
        errors.push(ValidationError::with_appendix(
            "RESTRICTED is not compatible with PROPIN",
            "2",
            "3.b",
        ));
    }
    if m.dissem.contains(&DissemControl::Relido) {
        errors.push(ValidationError::with_appendix(
            "RESTRICTED is not compatible with RELIDO",
            "2",
            "4.c",
        ));
    }
    errors
}

/// FOUO only makes sense on an UNCLASSIFIED document.
pub(super) fn rule_fouo_classification(m: &Marking) -> Vec<ValidationError> {
    if m.dissem.contains(&DissemControl::Fouo) && m.classification != ClassificationLevel::Unclassified {
        vec![ValidationError::new(
            "FOUO is permitted only on an UNCLASSIFIED marking",
            "10.b.1",
        )]
    } else {
        Vec::new()
    }
}

/// ORCON and RELIDO each require at least CONFIDENTIAL; this subsumes (and
/// duplicates, when both fire) the RESTRICTED-specific prohibitions above.
pub(super) fn rule_orcon_relido_threshold(m: &Marking) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if m.dissem.contains(&DissemControl::Orcon) && m.classification < ClassificationLevel::Confidential {
        errors.push(ValidationError::new(
            "ORCON requires classification at least CONFIDENTIAL",
            "10.d.3",
        ));
    }
    if m.dissem.contains(&DissemControl::Relido) && m.classification < ClassificationLevel::Confidential {
        errors.push(ValidationError::with_appendix(
            "RELIDO requires classification at least CONFIDENTIAL",
            "2",
            "4.c",
        ));
    }
    errors
}

/// IMCON requires at least SECRET and must appear alongside some other
/// foreign-disclosure notice (NOFORN, RELIDO, REL TO, or DISPLAY ONLY).
pub(super) fn rule_imcon(m: &Marking) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if !m.dissem.contains(&DissemControl::Imcon) {
        return errors;
    }
    if m.classification < ClassificationLevel::Secret {
        errors.push(ValidationError::with_appendix(
            "IMCON requires classification at least SECRET",
            "2",
            "1.b",
        ));
    }
    let has_other_disclosure_notice = m.dissem.contains(&DissemControl::NoForn)
        || m.dissem.contains(&DissemControl::Relido)
        || !m.rel_to.is_empty()
        || !m.display_only.is_empty();
    if !has_other_disclosure_notice {
        errors.push(ValidationError::with_appendix(
            "IMCON requires an accompanying foreign disclosure notice",
            "2",
            "1.c",
        ));
    }
    errors
}
