//! Rules for `DISPLAY ONLY` country lists.

use crate::error::ValidationError;
use crate::model::Marking;
use crate::util;
use crate::vocab::ClassificationLevel;

/// DISPLAY ONLY requires at least CONFIDENTIAL.
pub(super) fn rule_display_only_threshold(m: &Marking) -> Vec<ValidationError> {
    if !m.display_only.is_empty() && m.classification < ClassificationLevel::Confidential {
        vec![ValidationError::new(
            "DISPLAY ONLY requires classification at least CONFIDENTIAL",
            "10.g.3",
        )]
    } else {
        Vec::new()
    }
}

/// DISPLAY ONLY has no USA exception: trigraphs before tetragraphs, alphabetical
/// within each length class.
pub(super) fn rule_display_only_order(m: &Marking) -> Vec<ValidationError> {
    if util::is_sorted_country_codes(&m.display_only, false) {
        Vec::new()
    } else {
        vec![ValidationError::new(
            "DISPLAY ONLY codes must be ordered: trigraphs before tetragraphs, alphabetical within each class",
            "10.g.5",
        )]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse::banner::parse_banner;

    #[test]
    fn test_display_only_below_confidential_fails() {
        let err = parse_banner("RESTRICTED//DISPLAY ONLY GBR").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "10.g.3"));
    }

    #[test]
    fn test_display_only_ordered_ok() {
        let m = parse_banner("SECRET//DISPLAY ONLY GBR, GCTF").unwrap();
        assert_eq!(m.display_only(), &["GBR".to_string(), "GCTF".to_string()]);
    }

    #[test]
    fn test_display_only_unordered_fails() {
        let err = parse_banner("SECRET//DISPLAY ONLY GCTF, GBR").unwrap_err();
        assert!(err.errors.iter().any(|e| e.paragraph == "10.g.5"));
    }
}
