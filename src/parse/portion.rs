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

//! Portion marking parser: the paragraph/field-level, short-code vocabulary. The
//! banner/portion distinction survives only in how the classification head is
//! spelled — every control token already accepts both long and short spellings
//! (see `vocab`), so downstream the representation is identical.

use crate::error::InvalidMarking;
use crate::model::Marking;
use crate::parse::parse_marking;
use crate::vocab::ClassificationLevel;

/// Parse a `//`-delimited portion marking into a fully-typed, validated `Marking`.
pub fn parse_portion(text: &str) -> Result<Marking, InvalidMarking> {
    debug!("parsing portion marking: {}", text);
    parse_marking(text, ClassificationLevel::from_short_code)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse::banner::parse_banner;
    use crate::vocab::{ClassificationLevel, DissemControl, MarkingType};

    #[test]
    fn test_scenario_9_portion_equivalent_to_banner_scenario_1() {
        let portion = parse_portion("TS//SI-TK//NF").unwrap();
        let banner = parse_banner("TOP SECRET//SI-TK//NOFORN").unwrap();

        assert_eq!(portion.marking_type(), banner.marking_type());
        assert_eq!(portion.classification(), banner.classification());
        assert_eq!(portion.sci_controls(), banner.sci_controls());
        assert_eq!(portion.dissem(), banner.dissem());
    }

    #[test]
    fn test_bare_short_code() {
        let m = parse_portion("C").unwrap();
        assert_eq!(m.marking_type(), MarkingType::Us);
        assert_eq!(m.classification(), ClassificationLevel::Confidential);
    }

    #[test]
    fn test_portion_dissem_short_code() {
        let m = parse_portion("S//NF").unwrap();
        assert_eq!(m.dissem(), &[DissemControl::NoForn]);
    }

    #[test]
    fn test_empty_input_is_invalid() {
        assert!(parse_portion("").is_err());
    }
}
