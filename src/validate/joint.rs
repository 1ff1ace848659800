//! Rules for JOINT authority markings.

use crate::error::ValidationError;
use crate::model::Marking;
use crate::vocab::{ClassificationLevel, MarkingType};

/// A JOINT marking naming the USA as one of its authorities may not be RESTRICTED:
/// the U.S. does not use that classification level.
pub(super) fn rule_joint_usa_restricted(m: &Marking) -> Vec<ValidationError> {
    if m.marking_type == MarkingType::Joint
        && m.classification == ClassificationLevel::Restricted
        && m.joint_authorities.iter().any(|a| a == "USA")
    {
        vec![ValidationError::new(
            "RESTRICTED is not used when USA is a JOINT authority",
            "5.d",
        )]
    } else {
        Vec::new()
    }
}
