/*
Copyright 2020 Timo Saarinen

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Atomic Energy Act information category vocabulary.

use crate::error::MarkingError;

/// AEA information category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AeaType {
    Rd,
    Frd,
    DodUcni,
    DoeUcni,
    Tfni,
}

impl AeaType {
    pub fn canonical_name(&self) -> &'static str {
        match self {
            AeaType::Rd => "RESTRICTED DATA",
            AeaType::Frd => "FORMERLY RESTRICTED DATA",
            AeaType::DodUcni => "DOD UNCLASSIFIED CONTROLLED NUCLEAR INFORMATION",
            AeaType::DoeUcni => "DOE UNCLASSIFIED CONTROLLED NUCLEAR INFORMATION",
            AeaType::Tfni => "TRANSCLASSIFIED FOREIGN NUCLEAR INFORMATION",
        }
    }

    /// Every spelling the category accepts, longest canonical name first.
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            AeaType::Rd => &["RESTRICTED DATA", "RD"],
            AeaType::Frd => &["FORMERLY RESTRICTED DATA", "FRD"],
            AeaType::DodUcni => &[
                "DOD UNCLASSIFIED CONTROLLED NUCLEAR INFORMATION",
                "DOD UCNI",
                "DCNI",
            ],
            AeaType::DoeUcni => &[
                "DOE UNCLASSIFIED CONTROLLED NUCLEAR INFORMATION",
                "DOE UCNI",
                "UCNI",
            ],
            AeaType::Tfni => &[
                "TRANSCLASSIFIED FOREIGN NUCLEAR INFORMATION",
                "TFNI",
            ],
        }
    }

    /// Return the first category whose canonical name or any accepted alias is a *prefix*
    /// of the trimmed input. The empty string yields `Ok(None)`. A `None` input is a
    /// programmer error: the caller asked this API to look up a marking that was never
    /// collected, which is distinct from looking up an empty one.
    pub fn lookup(input: Option<&str>) -> Result<Option<AeaType>, MarkingError> {
        let input = input.ok_or(MarkingError::NullInput("AeaType::lookup"))?;
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        Ok(find(trimmed).map(|(category, _alias)| category))
    }
}

/// Same prefix-match rule as `lookup`, but also hands back the exact alias that
/// matched so a caller (the AEA sub-structure parser) can strip it off the front of
/// the segment to get at the `-N`/`-SIGMA`/`-SG` remainder.
pub(crate) fn find(trimmed: &str) -> Option<(AeaType, &'static str)> {
    const ALL: [AeaType; 5] = [
        AeaType::Rd,
        AeaType::Frd,
        AeaType::DodUcni,
        AeaType::DoeUcni,
        AeaType::Tfni,
    ];
    for category in ALL.iter() {
        if let Some(alias) = category.aliases().iter().find(|a| trimmed.starts_with(**a)) {
            return Some((*category, alias));
        }
    }
    None
}

impl core::fmt::Display for AeaType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_prefix_match() {
        assert_eq!(AeaType::lookup(Some("RD")).unwrap(), Some(AeaType::Rd));
        assert_eq!(
            AeaType::lookup(Some("RESTRICTED DATA-SIGMA 1 2")).unwrap(),
            Some(AeaType::Rd)
        );
        assert_eq!(AeaType::lookup(Some("FRD-SG1")).unwrap(), Some(AeaType::Frd));
    }

    #[test]
    fn test_empty_is_not_found() {
        assert_eq!(AeaType::lookup(Some("")).unwrap(), None);
        assert_eq!(AeaType::lookup(Some("   ")).unwrap(), None);
    }

    #[test]
    fn test_null_is_hard_fail() {
        assert!(AeaType::lookup(None).is_err());
    }

    #[test]
    fn test_case_sensitive_no_normalisation() {
        // Lower-case spellings must not alias-hit; the lookup is deliberately case-sensitive.
        assert_eq!(AeaType::lookup(Some("rd")).unwrap(), None);
    }

    #[test]
    fn test_ucni_disambiguation() {
        assert_eq!(AeaType::lookup(Some("DOD UCNI")).unwrap(), Some(AeaType::DodUcni));
        assert_eq!(AeaType::lookup(Some("DOE UCNI")).unwrap(), Some(AeaType::DoeUcni));
        assert_eq!(AeaType::lookup(Some("UCNI")).unwrap(), Some(AeaType::DoeUcni));
    }
}
