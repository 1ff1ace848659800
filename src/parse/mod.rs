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

//! Shared segmenting/tokenising core used by both the banner and the portion
//! parser. The two differ only in how the classification head and control tokens
//! are spelled (long form vs. short code); every dissemination/other-dissemination
//! control and AEA category already accepts both spellings (see `vocab`), so only
//! the classification-head resolver needs to be swapped in by the caller.

pub(crate) mod banner;
pub(crate) mod portion;

use crate::error::{InvalidMarking, ValidationError};
use crate::model::{AeaMarking, Marking, SapControl, SciControl};
use crate::util;
use crate::validate;
use crate::vocab::{AeaType, ClassificationLevel, DissemControl, MarkingType, NatoQualifier, OtherDissemControl};

/// Mutable accumulator built up segment by segment, turned into an immutable
/// `Marking` once every segment has been consumed.
#[derive(Default)]
struct MarkingState {
    marking_type: Option<MarkingType>,
    classification: Option<ClassificationLevel>,
    fgi_authority: Option<String>,
    nato_qualifier: Option<String>,
    joint_authorities: Vec<String>,
    sci_controls: Vec<SciControl>,
    sap_control: Option<SapControl>,
    aea: Option<AeaMarking>,
    dissem: Vec<DissemControl>,
    rel_to: Vec<String>,
    display_only: Vec<String>,
    other_dissem: Vec<OtherDissemControl>,
    accm: Vec<String>,
    us_fgi_country_codes: Vec<String>,
    concealed_fgi: bool,
}

/// Entry point shared by `parse_banner` and `parse_portion`. `resolve_class` looks
/// a classification token up by whatever spelling that grammar uses (canonical
/// name for the banner, short code for the portion).
pub(crate) fn parse_marking(
    input: &str,
    resolve_class: fn(&str) -> Option<ClassificationLevel>,
) -> Result<Marking, InvalidMarking> {
    if input.trim().is_empty() {
        return Err(structural_failure(input, "empty marking input"));
    }

    let segments = util::split_segments(input);
    let head = match segments.first() {
        Some(h) => h,
        None => return Err(structural_failure(input, "empty marking input")),
    };

    let mut state = MarkingState::default();
    let mut parse_errors = Vec::new();

    match parse_head(head, resolve_class) {
        Ok((marking_type, classification, fgi_authority, joint_authorities)) => {
            state.marking_type = Some(marking_type);
            state.classification = Some(classification);
            state.fgi_authority = fgi_authority;
            state.joint_authorities = joint_authorities;
        }
        Err(reason) => {
            return Err(InvalidMarking::new(
                "marking is invalid",
                input,
                vec![ValidationError::new(format!("classification: {}", reason), "-")],
            ));
        }
    }

    for segment in segments.iter().skip(1) {
        apply_segment(segment, &mut state, &mut parse_errors);
    }

    state.joint_authorities.sort();
    state.joint_authorities.dedup();

    let marking = Marking {
        input: input.to_string(),
        marking_type: state
            .marking_type
            .expect("classification head always sets marking_type"),
        classification: state
            .classification
            .expect("classification head always sets classification"),
        fgi_authority: state.fgi_authority,
        nato_qualifier: state.nato_qualifier,
        joint_authorities: state.joint_authorities,
        sci_controls: state.sci_controls,
        sap_control: state.sap_control,
        aea: state.aea,
        dissem: state.dissem,
        rel_to: state.rel_to,
        display_only: state.display_only,
        other_dissem: state.other_dissem,
        accm: state.accm,
        us_fgi_country_codes: state.us_fgi_country_codes,
        concealed_fgi: state.concealed_fgi,
    };

    let mut errors = parse_errors;
    errors.extend(validate::validate(&marking));

    if errors.is_empty() {
        Ok(marking)
    } else {
        Err(InvalidMarking::new("marking failed validation", input, errors))
    }
}

fn structural_failure(input: &str, message: &str) -> InvalidMarking {
    InvalidMarking::new(
        "marking is invalid",
        input,
        vec![ValidationError::new(message, "-")],
    )
}

/// Resolve the first segment into `(type, classification, fgi_authority,
/// joint_authorities)`. Order matters: a bare classification name is tried before
/// the FGI-authority heuristic so that a two-word classification like
/// "TOP SECRET" is never mistaken for a one-word authority plus a dangling
/// classification word.
fn parse_head(
    segment: &str,
    resolve_class: fn(&str) -> Option<ClassificationLevel>,
) -> Result<(MarkingType, ClassificationLevel, Option<String>, Vec<String>), String> {
    let segment = segment.trim();

    if let Some((level, authority)) = nato_short_code(segment) {
        return Ok((MarkingType::Fgi, level, Some(authority.to_string()), Vec::new()));
    }

    if let Some(level) = resolve_class(segment) {
        return Ok((MarkingType::Us, level, None, Vec::new()));
    }

    if let Some(rest) = segment.strip_prefix("JOINT ") {
        let (level, authorities) = resolve_with_trailing_words(rest, resolve_class)
            .ok_or_else(|| format!("unrecognised JOINT classification head: {}", segment))?;
        if authorities.is_empty() {
            return Err(format!(
                "JOINT marking requires at least one authority: {}",
                segment
            ));
        }
        return Ok((MarkingType::Joint, level, None, authorities));
    }

    let words: Vec<&str> = segment.split_whitespace().collect();
    if let Some(first) = words.first() {
        if *first == "NATO" || *first == "COSMIC" || is_country_code(first) {
            let rest = segment[first.len()..].trim_start();
            if let Some((level, remainder)) = resolve_with_trailing_words(rest, resolve_class) {
                if remainder.is_empty() {
                    return Ok((MarkingType::Fgi, level, Some((*first).to_string()), Vec::new()));
                }
            }
        }
    }

    Err(format!("unrecognised classification: {}", segment))
}

fn nato_short_code(segment: &str) -> Option<(ClassificationLevel, &'static str)> {
    match segment {
        "NU" => Some((ClassificationLevel::Unclassified, "NATO")),
        "NR" => Some((ClassificationLevel::Restricted, "NATO")),
        "NC" => Some((ClassificationLevel::Confidential, "NATO")),
        "NS" => Some((ClassificationLevel::Secret, "NATO")),
        "CTS" => Some((ClassificationLevel::TopSecret, "COSMIC")),
        _ => None,
    }
}

/// Try to resolve a classification name (one or two words) from the front of
/// `rest`, returning the classification and the words left over.
fn resolve_with_trailing_words(
    rest: &str,
    resolve_class: fn(&str) -> Option<ClassificationLevel>,
) -> Option<(ClassificationLevel, Vec<String>)> {
    let words: Vec<&str> = rest.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }
    if words.len() >= 2 {
        let two = format!("{} {}", words[0], words[1]);
        if let Some(level) = resolve_class(&two) {
            return Some((level, words[2..].iter().map(|w| w.to_string()).collect()));
        }
    }
    resolve_class(words[0]).map(|level| (level, words[1..].iter().map(|w| w.to_string()).collect()))
}

fn is_country_code(word: &str) -> bool {
    (word.len() == 3 || word.len() == 4) && word.chars().all(|c| c.is_ascii_uppercase())
}

/// Classify and apply a single control-group segment to the state being built up.
/// Disambiguation priority (per the grammar): AEA markers, SAP markers, SCI
/// identifiers, dissemination controls, other-dissemination controls, FGI, NATO
/// qualifier, ACCM.
fn apply_segment(segment: &str, state: &mut MarkingState, errors: &mut Vec<ValidationError>) {
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return;
    }

    if let Some(rest) = trimmed.strip_prefix("REL TO ") {
        state.rel_to = util::split_token_list(rest);
        return;
    }
    if let Some(rest) = trimmed.strip_prefix("DISPLAY ONLY ") {
        state.display_only = util::split_token_list(rest);
        return;
    }
    if trimmed == "FGI" {
        state.concealed_fgi = true;
        return;
    }
    if let Some(rest) = trimmed.strip_prefix("FGI ") {
        state.us_fgi_country_codes = util::split_token_list(rest);
        return;
    }
    if let Some(rest) = trimmed.strip_prefix("FGI+") {
        state.us_fgi_country_codes = util::split_token_list(&rest.replace('/', " "));
        return;
    }
    if let Some(rest) = trimmed.strip_prefix("ACCM-") {
        state.accm = rest
            .split('/')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        return;
    }

    if matches!(AeaType::lookup(Some(trimmed)), Ok(Some(_))) {
        match AeaMarking::parse(trimmed) {
            Ok(aea) => {
                state.aea = Some(aea);
            }
            Err(reason) => {
                warn!("invalid AEA marking segment: {}", trimmed);
                errors.push(ValidationError::new(format!("invalid AEA marking: {}", reason), "-"));
            }
        }
        return;
    }

    if trimmed == "HVSACO"
        || trimmed.starts_with("SAR-")
        || trimmed.starts_with("SPECIAL ACCESS REQUIRED-")
    {
        match SapControl::parse(trimmed) {
            Ok(sap) => {
                state.sap_control = Some(sap);
            }
            Err(reason) => {
                warn!("invalid SAP control segment: {}", trimmed);
                errors.push(ValidationError::new(format!("invalid SAP control: {}", reason), "-"));
            }
        }
        return;
    }

    if let Some(q) = NatoQualifier::lookup(trimmed) {
        state.nato_qualifier = Some(q.canonical_name().to_string());
        return;
    }

    for token in trimmed.split('/') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let Some(d) = DissemControl::lookup(token) {
            if !state.dissem.contains(&d) {
                state.dissem.push(d);
            }
            continue;
        }
        if let Some(o) = OtherDissemControl::lookup(token) {
            if !state.other_dissem.contains(&o) {
                state.other_dissem.push(o);
            }
            continue;
        }
        match SciControl::parse(token) {
            Ok(sci) if looks_like_sci_identifier(&sci.identifier) => {
                state.sci_controls.push(sci);
            }
            _ => {
                warn!("unrecognised control token: {}", token);
                errors.push(ValidationError::new(format!("unknown control {}", token), "-"));
            }
        }
    }
}

fn looks_like_sci_identifier(identifier: &str) -> bool {
    !identifier.is_empty()
        && identifier
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_uppercase())
        && identifier.chars().all(|c| c.is_ascii_alphanumeric())
}
