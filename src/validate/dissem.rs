//! Cross-control consistency rules among the foreign-disclosure family:
//! NOFORN, RELIDO, REL TO, and DISPLAY ONLY are pairwise exclusive in ways the
//! parser itself cannot see (each is parsed independently of the others).

use crate::error::ValidationError;
use crate::model::Marking;
use crate::vocab::DissemControl;

/// NOFORN and REL TO contradict each other: one says no foreign disclosure, the
/// other names specific countries to disclose to.
pub(super) fn rule_noforn_relto_exclusive(m: &Marking) -> Vec<ValidationError> {
    if m.dissem.contains(&DissemControl::NoForn) && !m.rel_to.is_empty() {
        vec![ValidationError::with_appendix(
            "NOFORN and REL TO may not both appear",
            "2",
            "2.d",
        )]
    } else {
        Vec::new()
    }
}

/// NOFORN and RELIDO contradict each other for the same reason.
pub(super) fn rule_noforn_relido_exclusive(m: &Marking) -> Vec<ValidationError> {
    if m.dissem.contains(&DissemControl::NoForn) && m.dissem.contains(&DissemControl::Relido) {
        vec![ValidationError::with_appendix(
            "NOFORN and RELIDO may not both appear",
            "2",
            "2.d",
        )]
    } else {
        Vec::new()
    }
}

/// DISPLAY ONLY is a narrower grant than either NOFORN or RELIDO and cannot
/// coexist with either.
pub(super) fn rule_display_only_incompatible(m: &Marking) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if !m.display_only.is_empty() && m.dissem.contains(&DissemControl::NoForn) {
        errors.push(ValidationError::new(
            "DISPLAY ONLY may not appear alongside NOFORN",
            "10.g.4",
        ));
    }
    if !m.display_only.is_empty() && m.dissem.contains(&DissemControl::Relido) {
        errors.push(ValidationError::new(
            "DISPLAY ONLY may not appear alongside RELIDO",
            "10.g.4",
        ));
    }
    errors
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse::banner::parse_banner;

    #[test]
    fn test_noforn_rel_to_exclusive() {
        let err = parse_banner("SECRET//NOFORN//REL TO USA, CAN").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "2.d"));
    }

    #[test]
    fn test_noforn_relido_exclusive() {
        let err = parse_banner("SECRET//NOFORN/RELIDO").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "2.d"));
    }

    #[test]
    fn test_display_only_with_noforn_fails() {
        let err = parse_banner("SECRET//NOFORN//DISPLAY ONLY USA, CAN").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "10.g.4"));
    }

    #[test]
    fn test_rel_to_alone_ok() {
        let m = parse_banner("SECRET//REL TO USA, CAN").unwrap();
        assert_eq!(m.rel_to(), &["USA".to_string(), "CAN".to_string()]);
    }
}
