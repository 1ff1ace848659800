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

//! Other-dissemination controls, disjoint from `DissemControl`.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OtherDissemControl {
    Exdis,
    Limdis,
    Nodis,
    Sbu,
    SbuNoforn,
    Les,
    LesNoforn,
    Ssi,
}

impl OtherDissemControl {
    pub fn canonical_name(&self) -> &'static str {
        match self {
            OtherDissemControl::Exdis => "EXCLUSIVE DISTRIBUTION",
            OtherDissemControl::Limdis => "LIMITED DISTRIBUTION",
            OtherDissemControl::Nodis => "NO DISTRIBUTION",
            OtherDissemControl::Sbu => "SENSITIVE BUT UNCLASSIFIED",
            OtherDissemControl::SbuNoforn => "SENSITIVE BUT UNCLASSIFIED NOFORN",
            OtherDissemControl::Les => "LAW ENFORCEMENT SENSITIVE",
            OtherDissemControl::LesNoforn => "LAW ENFORCEMENT SENSITIVE NOFORN",
            OtherDissemControl::Ssi => "SENSITIVE SECURITY INFORMATION",
        }
    }

    pub fn short_code(&self) -> &'static str {
        match self {
            OtherDissemControl::Exdis => "XD",
            OtherDissemControl::Limdis => "LIMDIS",
            OtherDissemControl::Nodis => "ND",
            OtherDissemControl::Sbu => "SBU",
            OtherDissemControl::SbuNoforn => "SBU-NF",
            OtherDissemControl::Les => "LES",
            OtherDissemControl::LesNoforn => "LES-NF",
            OtherDissemControl::Ssi => "SSI",
        }
    }

    fn spellings(&self) -> &'static [&'static str] {
        match self {
            OtherDissemControl::Exdis => &["EXDIS", "XD"],
            OtherDissemControl::Limdis => &["LIMDIS"],
            OtherDissemControl::Nodis => &["NODIS", "ND"],
            OtherDissemControl::Sbu => &["SBU"],
            OtherDissemControl::SbuNoforn => &["SBU-NF", "SBU NOFORN"],
            OtherDissemControl::Les => &["LES"],
            OtherDissemControl::LesNoforn => &["LES-NF", "LES NOFORN"],
            OtherDissemControl::Ssi => &["SSI"],
        }
    }

    pub fn lookup(token: &str) -> Option<OtherDissemControl> {
        const ALL: [OtherDissemControl; 8] = [
            OtherDissemControl::Exdis,
            OtherDissemControl::Limdis,
            OtherDissemControl::Nodis,
            OtherDissemControl::Sbu,
            OtherDissemControl::SbuNoforn,
            OtherDissemControl::Les,
            OtherDissemControl::LesNoforn,
            OtherDissemControl::Ssi,
        ];
        ALL.iter()
            .find(|c| c.spellings().contains(&token))
            .copied()
    }
}

impl core::fmt::Display for OtherDissemControl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(OtherDissemControl::lookup("EXDIS"), Some(OtherDissemControl::Exdis));
        assert_eq!(OtherDissemControl::lookup("ND"), Some(OtherDissemControl::Nodis));
        assert_eq!(OtherDissemControl::lookup("nope"), None);
    }
}
