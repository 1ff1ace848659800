//! Rules for the other-dissemination family (EXDIS, NODIS, …) and its
//! interaction with REL TO.

use crate::error::ValidationError;
use crate::model::Marking;
use crate::vocab::OtherDissemControl;

/// EXDIS and NODIS are mutually exclusive distribution regimes.
pub(super) fn rule_exdis_nodis_exclusive(m: &Marking) -> Vec<ValidationError> {
    if m.other_dissem.contains(&OtherDissemControl::Exdis) && m.other_dissem.contains(&OtherDissemControl::Nodis) {
        vec![ValidationError::with_appendix(
            "EXDIS and NODIS may not both appear",
            "3",
            "1.c",
        )]
    } else {
        Vec::new()
    }
}

/// EXDIS restricts distribution below what REL TO grants; the two cannot coexist.
pub(super) fn rule_exdis_relto_incompatible(m: &Marking) -> Vec<ValidationError> {
    if m.other_dissem.contains(&OtherDissemControl::Exdis) && !m.rel_to.is_empty() {
        vec![ValidationError::with_appendix(
            "EXDIS may not appear alongside REL TO",
            "3",
            "1.c",
        )]
    } else {
        Vec::new()
    }
}

/// NODIS for the same reason.
pub(super) fn rule_nodis_relto_incompatible(m: &Marking) -> Vec<ValidationError> {
    if m.other_dissem.contains(&OtherDissemControl::Nodis) && !m.rel_to.is_empty() {
        vec![ValidationError::with_appendix(
            "NODIS may not appear alongside REL TO",
            "3",
            "2.d",
        )]
    } else {
        Vec::new()
    }
}
