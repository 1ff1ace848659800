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

//! Marking type: which scope of banner rules a marking falls under.

/// Determines which scope of banner rules apply to a parsed marking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkingType {
    /// Classification head is a bare classification name (US document).
    Us,

    /// Classification head carries a foreign government authority (NATO, COSMIC, or a
    /// country code).
    Fgi,

    /// Classification head carries one or more joint authorities.
    Joint,
}

impl core::fmt::Display for MarkingType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MarkingType::Us => write!(f, "US"),
            MarkingType::Fgi => write!(f, "FGI"),
            MarkingType::Joint => write!(f, "JOINT"),
        }
    }
}
