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

//! Atomic Energy Act (AEA) marking sub-structure. The only sub-structure that must
//! round-trip: `parse(render(x)) == x` for every constructable `x`.

use std::collections::HashSet;

use crate::vocab::aea_type;
use crate::vocab::AeaType;

/// An AEA category plus its optional CNWDI flag and SIGMA list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AeaMarking {
    pub category: AeaType,
    pub cnwdi: bool,
    pub sigmas: Vec<u32>,
}

impl AeaMarking {
    /// Parse a single segment body such as `"RD"`, `"RD-N"`, `"RD-SIGMA 1 2 3"` or
    /// `"RD-SG1 2 3"`.
    pub fn parse(segment: &str) -> Result<AeaMarking, String> {
        let trimmed = segment.trim();
        let (category, alias) = aea_type::find(trimmed)
            .ok_or_else(|| format!("unrecognised AEA category: {}", trimmed))?;
        let remainder = trimmed[alias.len()..].trim_start();

        if remainder.is_empty() {
            return Ok(AeaMarking {
                category,
                cnwdi: false,
                sigmas: Vec::new(),
            });
        }
        if remainder == "-N" {
            return Ok(AeaMarking {
                category,
                cnwdi: true,
                sigmas: Vec::new(),
            });
        }
        if let Some(rest) = remainder.strip_prefix("-SIGMA") {
            return Ok(AeaMarking {
                category,
                cnwdi: false,
                sigmas: parse_sigma_list(rest),
            });
        }
        if let Some(rest) = remainder.strip_prefix("-SG") {
            return Ok(AeaMarking {
                category,
                cnwdi: false,
                sigmas: parse_sigma_list(rest),
            });
        }
        Err(format!("unrecognised AEA marking suffix: {}", remainder))
    }

    /// Render the canonical long form. Guaranteed to round-trip through `parse`.
    pub fn render(&self) -> String {
        let mut rendered = self.category.canonical_name().to_string();
        if self.cnwdi {
            rendered.push_str("-N");
        }
        if !self.sigmas.is_empty() {
            rendered.push_str("-SIGMA");
            for sigma in &self.sigmas {
                rendered.push(' ');
                rendered.push_str(&sigma.to_string());
            }
        }
        rendered
    }
}

/// Split on whitespace, drop tokens that don't parse as an integer, and keep only the
/// first occurrence of each value (the spec's "ordered distinct set of SIGMA integers").
fn parse_sigma_list(rest: &str) -> Vec<u32> {
    let mut seen = HashSet::new();
    rest.split_whitespace()
        .filter_map(|token| token.parse::<u32>().ok())
        .filter(|n| seen.insert(*n))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_bare_category() {
        let m = AeaMarking::parse("RD").unwrap();
        assert_eq!(m.category, AeaType::Rd);
        assert!(!m.cnwdi);
        assert!(m.sigmas.is_empty());
    }

    #[test]
    fn test_parse_cnwdi_flag() {
        let m = AeaMarking::parse("RD-N").unwrap();
        assert_eq!(m.category, AeaType::Rd);
        assert!(m.cnwdi);
    }

    #[test]
    fn test_parse_sigma_long_form() {
        let m = AeaMarking::parse("RD-SIGMA 1 2 3").unwrap();
        assert_eq!(m.sigmas, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_sg_abbreviated_glued() {
        let m = AeaMarking::parse("RD-SG1 2 3").unwrap();
        assert_eq!(m.sigmas, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_sg_abbreviated_spaced() {
        let m = AeaMarking::parse("RD-SG 1 2 3").unwrap();
        assert_eq!(m.sigmas, vec![1, 2, 3]);
    }

    #[test]
    fn test_invalid_sigma_token_silently_dropped() {
        let m = AeaMarking::parse("RD-SIGMA 1 ABC 3").unwrap();
        assert_eq!(m.sigmas, vec![1, 3]);
    }

    #[test]
    fn test_all_invalid_sigma_tokens_yield_empty_set() {
        let m = AeaMarking::parse("RD-SIGMA ABC DEF").unwrap();
        assert!(m.sigmas.is_empty());
    }

    #[test]
    fn test_duplicate_sigma_dropped() {
        let m = AeaMarking::parse("RD-SIGMA 1 1 2").unwrap();
        assert_eq!(m.sigmas, vec![1, 2]);
    }

    #[test]
    fn test_round_trip() {
        let m = AeaMarking::parse("RD-SIGMA 1 2 3").unwrap();
        assert_eq!(m.render(), "RESTRICTED DATA-SIGMA 1 2 3");
        let reparsed = AeaMarking::parse(&m.render()).unwrap();
        assert_eq!(reparsed, m);
    }

    #[test]
    fn test_round_trip_cnwdi() {
        let m = AeaMarking::parse("RD-N").unwrap();
        assert_eq!(m.render(), "RESTRICTED DATA-N");
        assert_eq!(AeaMarking::parse(&m.render()).unwrap(), m);
    }

    #[test]
    fn test_round_trip_bare() {
        let m = AeaMarking::parse("FRD").unwrap();
        assert_eq!(m.render(), "FORMERLY RESTRICTED DATA");
        assert_eq!(AeaMarking::parse(&m.render()).unwrap(), m);
    }

    #[test]
    fn test_unrecognised_category_fails() {
        assert!(AeaMarking::parse("BOGUS").is_err());
    }
}
