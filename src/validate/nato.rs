//! Rules for NATO/COSMIC FGI markings and their qualifiers.

use crate::error::ValidationError;
use crate::model::Marking;
use crate::vocab::{ClassificationLevel, DissemControl, MarkingType};

/// COSMIC is the NATO classification authority reserved for TOP SECRET.
pub(super) fn rule_cosmic_requires_top_secret(m: &Marking) -> Vec<ValidationError> {
    if m.fgi_authority.as_deref() == Some("COSMIC") && m.classification != ClassificationLevel::TopSecret {
        vec![ValidationError::new(
            "COSMIC requires classification TOP SECRET",
            "4.b.2.a",
        )]
    } else {
        Vec::new()
    }
}

/// Below COSMIC, a NATO authority never reaches TOP SECRET.
pub(super) fn rule_nato_requires_below_top_secret(m: &Marking) -> Vec<ValidationError> {
    if m.fgi_authority.as_deref() == Some("NATO") && m.classification == ClassificationLevel::TopSecret {
        vec![ValidationError::new(
            "NATO requires classification below TOP SECRET",
            "4.b.2.a",
        )]
    } else {
        Vec::new()
    }
}

/// NOFORN has no meaning on a NATO/COSMIC document: the document's own foreign
/// disclosure regime is what governs it.
pub(super) fn rule_noforn_disallowed_nato_cosmic(m: &Marking) -> Vec<ValidationError> {
    let authority = m.fgi_authority.as_deref();
    if (authority == Some("NATO") || authority == Some("COSMIC")) && m.dissem.contains(&DissemControl::NoForn) {
        vec![ValidationError::new(
            "NOFORN is not valid on a NATO/COSMIC marking",
            "4.b.3",
        )]
    } else {
        Vec::new()
    }
}

/// BOHEMIA and BALK are reserved for COSMIC TOP SECRET; ATOMAL has no such
/// restriction.
pub(super) fn rule_bohemia_balk_cosmic_top_secret_only(m: &Marking) -> Vec<ValidationError> {
    let qualifier = match &m.nato_qualifier {
        Some(q) => q.as_str(),
        None => return Vec::new(),
    };
    if qualifier != "BOHEMIA" && qualifier != "BALK" {
        return Vec::new();
    }
    let is_cosmic_top_secret =
        m.fgi_authority.as_deref() == Some("COSMIC") && m.classification == ClassificationLevel::TopSecret;
    if is_cosmic_top_secret {
        Vec::new()
    } else {
        vec![ValidationError::new(
            format!("{} is valid only on a COSMIC TOP SECRET marking", qualifier),
            "4.b.2.c",
        )]
    }
}

/// A NATO qualifier only makes sense attached to a NATO/COSMIC FGI marking.
pub(super) fn rule_qualifier_requires_nato_marking(m: &Marking) -> Vec<ValidationError> {
    if m.nato_qualifier.is_some() && m.marking_type != MarkingType::Fgi {
        vec![ValidationError::new(
            "a NATO qualifier requires a NATO/COSMIC marking",
            "4.b.2.a",
        )]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse::banner::parse_banner;

    #[test]
    fn test_cosmic_secret_fails() {
        let err = parse_banner("//COSMIC SECRET").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "4.b.2.a"));
    }

    #[test]
    fn test_cosmic_top_secret_ok() {
        let m = parse_banner("//COSMIC TOP SECRET").unwrap();
        assert_eq!(m.fgi_authority(), Some("COSMIC"));
    }

    #[test]
    fn test_nato_top_secret_fails() {
        let err = parse_banner("//NATO TOP SECRET").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "4.b.2.a"));
    }

    #[test]
    fn test_noforn_on_cosmic_fails() {
        let err = parse_banner("//COSMIC TOP SECRET//NOFORN").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "4.b.3"));
    }

    #[test]
    fn test_bohemia_on_cosmic_top_secret_ok() {
        let m = parse_banner("//COSMIC TOP SECRET//BOHEMIA").unwrap();
        assert_eq!(m.nato_qualifier(), Some("BOHEMIA"));
    }

    #[test]
    fn test_balk_on_nato_secret_fails() {
        let err = parse_banner("//NATO SECRET//BALK").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "4.b.2.c"));
    }

    #[test]
    fn test_atomal_on_nato_secret_ok() {
        let m = parse_banner("//NATO SECRET//ATOMAL").unwrap();
        assert_eq!(m.nato_qualifier(), Some("ATOMAL"));
    }
}
