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

//! Dissemination and foreign-disclosure controls.

/// Foreign-disclosure and handling notice. Disjoint from `OtherDissemControl`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DissemControl {
    NoForn,
    Orcon,
    Propin,
    Relido,
    Imcon,
    Fouo,
    Fisa,
    DeaSensitive,
    Waived,
}

impl DissemControl {
    pub fn canonical_name(&self) -> &'static str {
        match self {
            DissemControl::NoForn => "NOT RELEASABLE TO FOREIGN NATIONALS",
            DissemControl::Orcon => "ORIGINATOR CONTROLLED",
            DissemControl::Propin => "CAUTION-PROPRIETARY INFORMATION INVOLVED",
            DissemControl::Relido => "RELEASABLE BY INFORMATION DISCLOSURE OFFICIAL",
            DissemControl::Imcon => "CONTROLLED IMAGERY",
            DissemControl::Fouo => "FOR OFFICIAL USE ONLY",
            DissemControl::Fisa => "FOREIGN INTELLIGENCE SURVEILLANCE ACT",
            DissemControl::DeaSensitive => "DEA SENSITIVE",
            DissemControl::Waived => "WAIVED",
        }
    }

    pub fn short_code(&self) -> &'static str {
        match self {
            DissemControl::NoForn => "NF",
            DissemControl::Orcon => "OC",
            DissemControl::Propin => "PR",
            DissemControl::Relido => "RELIDO",
            DissemControl::Imcon => "IMC",
            DissemControl::Fouo => "FOUO",
            DissemControl::Fisa => "FISA",
            DissemControl::DeaSensitive => "DSEN",
            DissemControl::Waived => "WAIVED",
        }
    }

    /// Every spelling accepted for this control, long and short form alike.
    fn spellings(&self) -> &'static [&'static str] {
        match self {
            DissemControl::NoForn => &["NOFORN", "NF"],
            DissemControl::Orcon => &["ORCON", "OC"],
            DissemControl::Propin => &["PROPIN", "PR"],
            DissemControl::Relido => &["RELIDO"],
            DissemControl::Imcon => &["IMCON", "IMC"],
            DissemControl::Fouo => &["FOUO"],
            DissemControl::Fisa => &["FISA"],
            DissemControl::DeaSensitive => &["DEA SENSITIVE", "DSEN"],
            DissemControl::Waived => &["WAIVED"],
        }
    }

    /// Exact-match, case-sensitive lookup against any accepted spelling.
    pub fn lookup(token: &str) -> Option<DissemControl> {
        const ALL: [DissemControl; 9] = [
            DissemControl::NoForn,
            DissemControl::Orcon,
            DissemControl::Propin,
            DissemControl::Relido,
            DissemControl::Imcon,
            DissemControl::Fouo,
            DissemControl::Fisa,
            DissemControl::DeaSensitive,
            DissemControl::Waived,
        ];
        ALL.iter()
            .find(|c| c.spellings().contains(&token))
            .copied()
    }
}

impl core::fmt::Display for DissemControl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}
