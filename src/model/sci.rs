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

//! Sensitive Compartmented Information (SCI) control sub-structure.

/// An SCI control identifier plus its compartment/sub-compartment breakdown.
/// `compartments` is an ordered list of (compartment code, sub-compartment codes)
/// pairs; an identifier with no compartments (e.g. bare `SI`) has an empty list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SciControl {
    pub identifier: String,
    pub compartments: Vec<(String, Vec<String>)>,
}

impl SciControl {
    /// Parse a segment of the form `<ID>(-<COMP>(-<SUB>)*)?`. The `SI` identifier
    /// additionally accepts sub-compartments separated by spaces after the
    /// compartment code, e.g. `SI-G ABC DEF` (compartment `G`, sub-compartments
    /// `ABC`, `DEF`).
    pub fn parse(segment: &str) -> Result<SciControl, String> {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            return Err("empty SCI control segment".to_string());
        }
        let dash = match trimmed.find('-') {
            Some(pos) => pos,
            None => {
                return Ok(SciControl {
                    identifier: trimmed.to_string(),
                    compartments: Vec::new(),
                })
            }
        };

        let identifier = trimmed[..dash].to_string();
        let rest = &trimmed[dash + 1..];
        let mut tokens = rest.split_whitespace();

        let compartments = match tokens.next() {
            Some(first) => {
                // Hyphens within the first whitespace-delimited token chain further
                // sub-compartments (e.g. "X-Y"); a following whitespace-delimited
                // token adds more (the SI space-separated form).
                let mut parts = first.split('-');
                let code = parts.next().unwrap_or("").to_string();
                let mut subs: Vec<String> = parts.map(|p| p.to_string()).collect();
                subs.extend(tokens.map(|t| t.to_string()));
                vec![(code, subs)]
            }
            None => Vec::new(),
        };

        Ok(SciControl {
            identifier,
            compartments,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bare_identifier() {
        let sci = SciControl::parse("SI").unwrap();
        assert_eq!(sci.identifier, "SI");
        assert!(sci.compartments.is_empty());
    }

    #[test]
    fn test_single_compartment_no_subs() {
        let sci = SciControl::parse("SI-TK").unwrap();
        assert_eq!(sci.identifier, "SI");
        assert_eq!(sci.compartments, vec![("TK".to_string(), vec![])]);
    }

    #[test]
    fn test_space_separated_sub_compartments() {
        let sci = SciControl::parse("SI-G ABC DEF").unwrap();
        assert_eq!(sci.identifier, "SI");
        assert_eq!(
            sci.compartments,
            vec![("G".to_string(), vec!["ABC".to_string(), "DEF".to_string()])]
        );
    }

    #[test]
    fn test_hyphen_separated_sub_compartment() {
        let sci = SciControl::parse("HCS-X-Y").unwrap();
        assert_eq!(sci.identifier, "HCS");
        assert_eq!(sci.compartments, vec![("X".to_string(), vec!["Y".to_string()])]);
    }

    #[test]
    fn test_empty_segment_is_error() {
        assert!(SciControl::parse("").is_err());
    }
}
