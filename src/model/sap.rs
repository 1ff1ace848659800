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

//! Special Access Program (SAP) control sub-structure.

/// A SAP control: a bounded list of program codes, the `MULTIPLE PROGRAMS`
/// placeholder, or the `HVSACO` special case.
///
/// `Programs` may carry any number of codes coming out of the parser; the 1..=4
/// bound is enforced by the validator (§7.e), not here, so a too-long list is a
/// validation failure rather than a parse failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SapControl {
    Programs(Vec<String>),
    MultiplePrograms,
    Hvsaco,
}

impl SapControl {
    /// Parse a single segment body: `SAR-<PROG>(/<PROG>)*`, `SPECIAL ACCESS
    /// REQUIRED-<PROG>...`, the literal `SAR-MULTIPLE PROGRAMS`, or standalone
    /// `HVSACO`.
    pub fn parse(segment: &str) -> Result<SapControl, String> {
        let trimmed = segment.trim();
        if trimmed == "HVSACO" {
            return Ok(SapControl::Hvsaco);
        }
        let body = if let Some(rest) = trimmed.strip_prefix("SPECIAL ACCESS REQUIRED-") {
            rest
        } else if let Some(rest) = trimmed.strip_prefix("SAR-") {
            rest
        } else {
            return Err(format!("unrecognised SAP control: {}", trimmed));
        };

        if body == "MULTIPLE PROGRAMS" {
            return Ok(SapControl::MultiplePrograms);
        }

        let programs: Vec<String> = body.split('/').map(|p| p.trim().to_string()).collect();
        if programs.iter().any(|p| p.is_empty()) {
            return Err(format!("empty SAP program code in: {}", trimmed));
        }
        Ok(SapControl::Programs(programs))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_sar_single_program() {
        assert_eq!(
            SapControl::parse("SAR-ALPHA").unwrap(),
            SapControl::Programs(vec!["ALPHA".to_string()])
        );
    }

    #[test]
    fn test_parse_sar_multiple_program_codes() {
        assert_eq!(
            SapControl::parse("SAR-ALPHA/BRAVO/CHARLIE").unwrap(),
            SapControl::Programs(vec![
                "ALPHA".to_string(),
                "BRAVO".to_string(),
                "CHARLIE".to_string()
            ])
        );
    }

    #[test]
    fn test_parse_full_form() {
        assert_eq!(
            SapControl::parse("SPECIAL ACCESS REQUIRED-ALPHA").unwrap(),
            SapControl::Programs(vec!["ALPHA".to_string()])
        );
    }

    #[test]
    fn test_parse_multiple_programs_literal() {
        assert_eq!(
            SapControl::parse("SAR-MULTIPLE PROGRAMS").unwrap(),
            SapControl::MultiplePrograms
        );
    }

    #[test]
    fn test_parse_hvsaco() {
        assert_eq!(SapControl::parse("HVSACO").unwrap(), SapControl::Hvsaco);
    }

    #[test]
    fn test_parse_unrecognised() {
        assert!(SapControl::parse("BOGUS").is_err());
    }

    #[test]
    fn test_more_than_four_programs_parses_ok() {
        // Parsing never fails on program count; that's a validator concern (§7.e).
        let parsed = SapControl::parse("SAR-A/B/C/D/E").unwrap();
        match parsed {
            SapControl::Programs(codes) => assert_eq!(codes.len(), 5),
            _ => panic!("expected Programs"),
        }
    }
}
