//! Rules for `REL TO` country lists.

use crate::error::ValidationError;
use crate::model::Marking;
use crate::util;
use crate::vocab::ClassificationLevel;

/// REL TO requires at least CONFIDENTIAL.
pub(super) fn rule_rel_to_threshold(m: &Marking) -> Vec<ValidationError> {
    if !m.rel_to.is_empty() && m.classification < ClassificationLevel::Confidential {
        vec![ValidationError::new(
            "REL TO requires classification at least CONFIDENTIAL",
            "10.e.3",
        )]
    } else {
        Vec::new()
    }
}

/// USA must come first in the list when present.
pub(super) fn rule_rel_to_usa_first(m: &Marking) -> Vec<ValidationError> {
    if m.rel_to.iter().any(|c| c == "USA") && m.rel_to.first().map(String::as_str) != Some("USA") {
        vec![ValidationError::new("USA must appear first in REL TO", "10.e.4")]
    } else {
        Vec::new()
    }
}

/// The remaining codes (after any leading USA) must be trigraphs before
/// tetragraphs, alphabetical within each class.
pub(super) fn rule_rel_to_order(m: &Marking) -> Vec<ValidationError> {
    if util::is_sorted_country_codes(&m.rel_to, true) {
        Vec::new()
    } else {
        vec![ValidationError::new(
            "REL TO codes must be ordered: USA first, then trigraphs before tetragraphs, alphabetical within each class",
            "10.e.4",
        )]
    }
}

/// REL TO naming only "USA" is meaningless: release to the originating country
/// alone says nothing.
pub(super) fn rule_rel_to_only_usa(m: &Marking) -> Vec<ValidationError> {
    if m.rel_to.len() == 1 && m.rel_to[0] == "USA" {
        vec![ValidationError::new("REL TO may not name only USA", "10.e.5")]
    } else {
        Vec::new()
    }
}
