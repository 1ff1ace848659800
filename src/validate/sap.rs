//! Rules specific to Special Access Program controls.

use crate::error::ValidationError;
use crate::model::{Marking, SapControl};
use crate::vocab::DissemControl;

/// A named-program SAP control carries at most four program codes.
pub(super) fn rule_sap_program_count(m: &Marking) -> Vec<ValidationError> {
    match &m.sap_control {
        Some(SapControl::Programs(codes)) if codes.len() > 4 => {
            vec![ValidationError::new(
                "a SAP control may name at most four programs",
                "7.e",
            )]
        }
        _ => Vec::new(),
    }
}

/// WAIVED only means something in the presence of a SAP control.
pub(super) fn rule_waived_requires_sap(m: &Marking) -> Vec<ValidationError> {
    if m.dissem.contains(&DissemControl::Waived) && m.sap_control.is_none() {
        vec![ValidationError::new("WAIVED requires a SAP control", "7.f")]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse::banner::parse_banner;

    #[test]
    fn test_five_programs_fails() {
        let err = parse_banner("SECRET//SAR-A/B/C/D/E").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "7.e"));
    }

    #[test]
    fn test_four_programs_ok() {
        let m = parse_banner("SECRET//SAR-A/B/C/D").unwrap();
        assert!(m.sap_control().is_some());
    }

    #[test]
    fn test_waived_without_sap_fails() {
        let err = parse_banner("SECRET//WAIVED").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "7.f"));
    }

    #[test]
    fn test_waived_with_sap_ok() {
        let m = parse_banner("SECRET//SAR-ALPHA//WAIVED").unwrap();
        assert!(m.dissem().contains(&DissemControl::Waived));
    }
}
