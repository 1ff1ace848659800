//! Rules specific to Atomic Energy Act markings.

use crate::error::ValidationError;
use crate::model::Marking;
use crate::vocab::{AeaType, ClassificationLevel};

/// RD and FRD each require at least CONFIDENTIAL.
pub(super) fn rule_aea_threshold(m: &Marking) -> Vec<ValidationError> {
    let aea = match &m.aea {
        Some(aea) => aea,
        None => return Vec::new(),
    };
    if m.classification >= ClassificationLevel::Confidential {
        return Vec::new();
    }
    match aea.category {
        AeaType::Rd => vec![ValidationError::new(
            "RESTRICTED DATA requires classification at least CONFIDENTIAL",
            "8.a.4",
        )],
        AeaType::Frd => vec![ValidationError::new(
            "FORMERLY RESTRICTED DATA requires classification at least CONFIDENTIAL",
            "8.b.2",
        )],
        _ => Vec::new(),
    }
}

/// CNWDI is a qualifier on RD only.
pub(super) fn rule_cnwdi_rd_only(m: &Marking) -> Vec<ValidationError> {
    match &m.aea {
        Some(aea) if aea.cnwdi && aea.category != AeaType::Rd => {
            vec![ValidationError::new("CNWDI is valid only on RESTRICTED DATA", "8.c.3")]
        }
        _ => Vec::new(),
    }
}

/// SIGMA numbers are never zero; under RD they additionally top out at 999,
/// under FRD at 99.
pub(super) fn rule_sigma_range(m: &Marking) -> Vec<ValidationError> {
    let aea = match &m.aea {
        Some(aea) => aea,
        None => return Vec::new(),
    };
    let upper_bound = match aea.category {
        AeaType::Rd => 999,
        AeaType::Frd => 99,
        _ => u32::MAX,
    };
    if aea.sigmas.iter().any(|&s| s < 1 || s > upper_bound) {
        vec![ValidationError::new(
            format!("SIGMA values under {} must fall within 1..={}", aea.category, upper_bound),
            "8.d.3",
        )]
    } else {
        Vec::new()
    }
}

/// DOD UCNI and DOE UCNI are valid only on an UNCLASSIFIED document.
pub(super) fn rule_ucni_classification(m: &Marking) -> Vec<ValidationError> {
    match &m.aea {
        Some(aea)
            if matches!(aea.category, AeaType::DodUcni | AeaType::DoeUcni)
                && m.classification != ClassificationLevel::Unclassified =>
        {
            vec![ValidationError::new(
                format!("{} is valid only on an UNCLASSIFIED marking", aea.category),
                "8.f.3",
            )]
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse::banner::parse_banner;

    #[test]
    fn test_restricted_rd_fails() {
        let err = parse_banner("RESTRICTED//RD").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "8.a.4"));
    }

    #[test]
    fn test_restricted_frd_fails() {
        let err = parse_banner("RESTRICTED//FRD").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "8.b.2"));
    }

    #[test]
    fn test_confidential_rd_ok() {
        let m = parse_banner("CONFIDENTIAL//RD").unwrap();
        assert_eq!(m.aea().unwrap().category, AeaType::Rd);
    }

    #[test]
    fn test_cnwdi_on_frd_fails() {
        let err = parse_banner("CONFIDENTIAL//FRD-N").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "8.c.3"));
    }

    #[test]
    fn test_sigma_out_of_frd_range_fails() {
        let err = parse_banner("CONFIDENTIAL//FRD-SIGMA 100").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "8.d.3"));
    }

    #[test]
    fn test_sigma_in_range_ok() {
        let m = parse_banner("CONFIDENTIAL//FRD-SIGMA 1 99").unwrap();
        assert_eq!(m.aea().unwrap().sigmas, vec![1, 99]);
    }

    #[test]
    fn test_sigma_zero_rejected() {
        let err = parse_banner("CONFIDENTIAL//RD-SIGMA 0").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "8.d.3"));
    }

    #[test]
    fn test_sigma_100_accepted_for_rd() {
        let m = parse_banner("CONFIDENTIAL//RD-SIGMA 100").unwrap();
        assert_eq!(m.aea().unwrap().sigmas, vec![100]);
    }

    #[test]
    fn test_sigma_1000_rejected_for_rd() {
        let err = parse_banner("CONFIDENTIAL//RD-SIGMA 1000").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "8.d.3"));
    }

    #[test]
    fn test_ucni_on_secret_fails() {
        let err = parse_banner("SECRET//DOE UCNI").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "8.f.3"));
    }

    #[test]
    fn test_ucni_on_unclassified_ok() {
        let m = parse_banner("UNCLASSIFIED//DOD UCNI").unwrap();
        assert_eq!(m.aea().unwrap().category, AeaType::DodUcni);
    }
}
