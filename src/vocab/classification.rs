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

//! Classification level vocabulary.

/// U.S. classification level, totally ordered from least to most restrictive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClassificationLevel {
    Unclassified,
    Restricted,
    Confidential,
    Secret,
    TopSecret,
}

impl ClassificationLevel {
    /// Canonical long-form name, as used in a banner marking (e.g. "TOP SECRET").
    pub fn canonical_name(&self) -> &'static str {
        match self {
            ClassificationLevel::Unclassified => "UNCLASSIFIED",
            ClassificationLevel::Restricted => "RESTRICTED",
            ClassificationLevel::Confidential => "CONFIDENTIAL",
            ClassificationLevel::Secret => "SECRET",
            ClassificationLevel::TopSecret => "TOP SECRET",
        }
    }

    /// Short code, as used in a portion marking (e.g. "TS").
    pub fn short_code(&self) -> &'static str {
        match self {
            ClassificationLevel::Unclassified => "U",
            ClassificationLevel::Restricted => "R",
            ClassificationLevel::Confidential => "C",
            ClassificationLevel::Secret => "S",
            ClassificationLevel::TopSecret => "TS",
        }
    }

    /// Look up by exact canonical long-form name. Whitespace variants do not match;
    /// "TOP SECRET" requires a single space and nothing else.
    pub fn from_canonical_name(name: &str) -> Option<ClassificationLevel> {
        match name {
            "UNCLASSIFIED" => Some(ClassificationLevel::Unclassified),
            "RESTRICTED" => Some(ClassificationLevel::Restricted),
            "CONFIDENTIAL" => Some(ClassificationLevel::Confidential),
            "SECRET" => Some(ClassificationLevel::Secret),
            "TOP SECRET" => Some(ClassificationLevel::TopSecret),
            _ => None,
        }
    }

    /// Look up by exact short code.
    pub fn from_short_code(code: &str) -> Option<ClassificationLevel> {
        match code {
            "U" => Some(ClassificationLevel::Unclassified),
            "R" => Some(ClassificationLevel::Restricted),
            "C" => Some(ClassificationLevel::Confidential),
            "S" => Some(ClassificationLevel::Secret),
            "TS" => Some(ClassificationLevel::TopSecret),
            _ => None,
        }
    }
}

impl core::fmt::Display for ClassificationLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}
