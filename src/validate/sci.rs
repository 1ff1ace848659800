//! Rules specific to Sensitive Compartmented Information controls.

use crate::error::ValidationError;
use crate::model::Marking;
use crate::vocab::DissemControl;

/// Any SCI control requires some accompanying foreign-disclosure marking: NOFORN,
/// RELIDO, REL TO, or DISPLAY ONLY.
pub(super) fn rule_sci_requires_disclosure(m: &Marking) -> Vec<ValidationError> {
    if m.sci_controls.is_empty() {
        return Vec::new();
    }
    let has_disclosure_marking = m.dissem.contains(&DissemControl::NoForn)
        || m.dissem.contains(&DissemControl::Relido)
        || !m.rel_to.is_empty()
        || !m.display_only.is_empty();
    if has_disclosure_marking {
        Vec::new()
    } else {
        vec![ValidationError::new(
            "an SCI control requires an accompanying foreign disclosure marking",
            "6.c",
        )]
    }
}

/// HCS and KLONDIKE specifically (among the open SCI vocabulary) require NOFORN,
/// not merely some foreign-disclosure notice.
pub(super) fn rule_hcs_klondike_noforn(m: &Marking) -> Vec<ValidationError> {
    let needs_noforn = m
        .sci_controls
        .iter()
        .any(|sci| sci.identifier == "HCS" || sci.identifier == "KLONDIKE");
    if needs_noforn && !m.dissem.contains(&DissemControl::NoForn) {
        vec![ValidationError::new("HCS/KLONDIKE requires NOFORN", "6.f")]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse::banner::parse_banner;

    #[test]
    fn test_sci_without_disclosure_marking_fails() {
        let err = parse_banner("SECRET//SI").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "6.c"));
    }

    #[test]
    fn test_sci_with_noforn_ok() {
        let m = parse_banner("SECRET//SI//NOFORN").unwrap();
        assert_eq!(m.sci_controls()[0].identifier, "SI");
    }

    #[test]
    fn test_hcs_without_noforn_fails() {
        let err = parse_banner("SECRET//HCS").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "6.f"));
    }

    #[test]
    fn test_klondike_without_noforn_fails() {
        let err = parse_banner("SECRET//KLONDIKE//REL TO USA, CAN").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "6.f"));
    }

    #[test]
    fn test_hcs_with_noforn_ok() {
        let m = parse_banner("SECRET//HCS//NOFORN").unwrap();
        assert_eq!(m.sci_controls()[0].identifier, "HCS");
    }
}
