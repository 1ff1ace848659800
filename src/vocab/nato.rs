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

//! NATO compartment qualifiers: ATOMAL, BOHEMIA, BALK.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NatoQualifier {
    Atomal,
    Bohemia,
    Balk,
}

impl NatoQualifier {
    pub fn canonical_name(&self) -> &'static str {
        match self {
            NatoQualifier::Atomal => "ATOMAL",
            NatoQualifier::Bohemia => "BOHEMIA",
            NatoQualifier::Balk => "BALK",
        }
    }

    /// Exact, case-sensitive match on the token.
    pub fn lookup(token: &str) -> Option<NatoQualifier> {
        match token {
            "ATOMAL" => Some(NatoQualifier::Atomal),
            "BOHEMIA" => Some(NatoQualifier::Bohemia),
            "BALK" => Some(NatoQualifier::Balk),
            _ => None,
        }
    }
}

impl core::fmt::Display for NatoQualifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}
