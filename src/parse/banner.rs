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

//! Banner marking parser: the document-level, long-form vocabulary.

use crate::error::InvalidMarking;
use crate::model::Marking;
use crate::parse::parse_marking;
use crate::vocab::ClassificationLevel;

/// Parse a `//`-delimited banner marking into a fully-typed, validated `Marking`.
pub fn parse_banner(text: &str) -> Result<Marking, InvalidMarking> {
    debug!("parsing banner marking: {}", text);
    parse_marking(text, ClassificationLevel::from_canonical_name)
}
