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

//! Small shared helpers: segment splitting and country-code ordering. Neither the
//! banner parser nor the portion parser owns these outright since both need them.

/// Split a marking into its `//`-delimited segments, trimming whitespace around
/// each and dropping any that are blank. This makes the split tolerant of a
/// leading `//` (the FGI/JOINT classification-head form), a trailing `//`, and
/// runs of blank segments, per the parser's documented tolerance.
pub(crate) fn split_segments(input: &str) -> Vec<String> {
    input
        .trim()
        .split("//")
        .map(|segment| segment.trim().to_string())
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Split a comma-and/or-whitespace separated list of tokens (used for `REL TO` and
/// `DISPLAY ONLY` lists), trimming each token and dropping empties.
pub(crate) fn split_token_list(body: &str) -> Vec<String> {
    body.split(|c: char| c == ',' || c.is_whitespace())
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// Sort country codes per the shared ordering rule: an optional "USA first"
/// exception, then trigraphs before tetragraphs, alphabetical ascending within
/// each length class.
pub(crate) fn sort_country_codes(codes: &[String], usa_first: bool) -> Vec<String> {
    let (usa, rest): (Vec<String>, Vec<String>) = if usa_first {
        codes.iter().cloned().partition(|c| c == "USA")
    } else {
        (Vec::new(), codes.to_vec())
    };

    let mut trigraphs: Vec<String> = rest.iter().filter(|c| c.len() == 3).cloned().collect();
    let mut tetragraphs: Vec<String> = rest.iter().filter(|c| c.len() == 4).cloned().collect();
    trigraphs.sort();
    tetragraphs.sort();

    let mut result = usa;
    result.extend(trigraphs);
    result.extend(tetragraphs);
    result
}

/// True if `codes` is already in the canonical order `sort_country_codes` would
/// produce.
pub(crate) fn is_sorted_country_codes(codes: &[String], usa_first: bool) -> bool {
    sort_country_codes(codes, usa_first) == codes
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_split_segments_trailing_slashes() {
        assert_eq!(
            split_segments("SECRET//NOFORN//"),
            vec!["SECRET".to_string(), "NOFORN".to_string()]
        );
    }

    #[test]
    fn test_split_segments_leading_slashes() {
        assert_eq!(
            split_segments("//COSMIC SECRET"),
            vec!["COSMIC SECRET".to_string()]
        );
    }

    #[test]
    fn test_split_segments_collapses_blank_runs() {
        assert_eq!(
            split_segments("SECRET////NOFORN"),
            vec!["SECRET".to_string(), "NOFORN".to_string()]
        );
    }

    #[test]
    fn test_split_token_list_commas_and_spaces() {
        assert_eq!(
            split_token_list("USA, CAN, GBR, GCTF"),
            vec!["USA", "CAN", "GBR", "GCTF"]
        );
    }

    #[test]
    fn test_sort_country_codes_usa_first() {
        let codes = vec!["GBR".to_string(), "USA".to_string(), "GCTF".to_string(), "CAN".to_string()];
        assert_eq!(
            sort_country_codes(&codes, true),
            vec!["USA", "CAN", "GBR", "GCTF"]
        );
    }

    #[test]
    fn test_sort_country_codes_no_usa_exception() {
        let codes = vec!["GCTF".to_string(), "GBR".to_string(), "CAN".to_string()];
        assert_eq!(
            sort_country_codes(&codes, false),
            vec!["CAN", "GBR", "GCTF"]
        );
    }

    #[test]
    fn test_is_sorted_detects_violation() {
        let codes = vec!["GBR".to_string(), "USA".to_string()];
        assert!(!is_sorted_country_codes(&codes, true));
    }
}
