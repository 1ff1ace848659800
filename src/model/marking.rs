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

//! The root parsed value: a fully-typed representation of a banner or portion marking.

use crate::model::{AeaMarking, SapControl, SciControl};
use crate::vocab::{ClassificationLevel, DissemControl, MarkingType, OtherDissemControl};

/// A fully-typed, fully-populated security marking. Created whole by the parser and
/// never mutated afterwards; every accessor hands back a shared reference so a
/// caller cannot observe or induce mutation through the public API.
#[derive(Clone, Debug, PartialEq)]
pub struct Marking {
    pub(crate) input: String,
    pub(crate) marking_type: MarkingType,
    pub(crate) classification: ClassificationLevel,
    pub(crate) fgi_authority: Option<String>,
    pub(crate) nato_qualifier: Option<String>,
    pub(crate) joint_authorities: Vec<String>,
    pub(crate) sci_controls: Vec<SciControl>,
    pub(crate) sap_control: Option<SapControl>,
    pub(crate) aea: Option<AeaMarking>,
    pub(crate) dissem: Vec<DissemControl>,
    pub(crate) rel_to: Vec<String>,
    pub(crate) display_only: Vec<String>,
    pub(crate) other_dissem: Vec<OtherDissemControl>,
    pub(crate) accm: Vec<String>,
    pub(crate) us_fgi_country_codes: Vec<String>,
    pub(crate) concealed_fgi: bool,
}

impl Marking {
    /// The verbatim original input, preserved byte-for-byte.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn marking_type(&self) -> MarkingType {
        self.marking_type
    }

    pub fn classification(&self) -> ClassificationLevel {
        self.classification
    }

    pub fn fgi_authority(&self) -> Option<&str> {
        self.fgi_authority.as_deref()
    }

    pub fn nato_qualifier(&self) -> Option<&str> {
        self.nato_qualifier.as_deref()
    }

    /// Always non-empty and alphabetically sorted when `marking_type() == MarkingType::Joint`.
    pub fn joint_authorities(&self) -> &[String] {
        &self.joint_authorities
    }

    pub fn sci_controls(&self) -> &[SciControl] {
        &self.sci_controls
    }

    pub fn sap_control(&self) -> Option<&SapControl> {
        self.sap_control.as_ref()
    }

    pub fn aea(&self) -> Option<&AeaMarking> {
        self.aea.as_ref()
    }

    pub fn dissem(&self) -> &[DissemControl] {
        &self.dissem
    }

    /// USA first when present; remaining trigraphs before tetragraphs, alphabetical
    /// within each length class.
    pub fn rel_to(&self) -> &[String] {
        &self.rel_to
    }

    /// Trigraphs before tetragraphs, alphabetical within each length class.
    pub fn display_only(&self) -> &[String] {
        &self.display_only
    }

    pub fn other_dissem(&self) -> &[OtherDissemControl] {
        &self.other_dissem
    }

    pub fn accm(&self) -> &[String] {
        &self.accm
    }

    /// Trigraphs before tetragraphs, alphabetical within each length class. Never
    /// contains "USA".
    pub fn us_fgi_country_codes(&self) -> &[String] {
        &self.us_fgi_country_codes
    }

    /// True only when the input contained a bare `FGI` token with no country codes.
    pub fn concealed_fgi(&self) -> bool {
        self.concealed_fgi
    }
}
