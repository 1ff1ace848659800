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

//! Parses and validates DoD banner and portion security markings (DoD 5200.01
//! Vol. 2 / CAPCO Register conventions) into a fully-typed `Marking`, and
//! projects a parsed `Marking` onto an external record's security attributes.
//!
//! ```
//! use dod_marking::parse_banner;
//!
//! let marking = parse_banner("TOP SECRET//SI-TK//NOFORN").unwrap();
//! assert_eq!(marking.classification().short_code(), "TS");
//! ```

#[macro_use]
extern crate log;

pub mod error;
pub mod model;
mod parse;
pub mod projection;
mod util;
mod validate;
pub mod vocab;

pub use error::{InvalidMarking, MarkingError, MarkingMismatch, ProcessError, ValidationError};
pub use model::{AeaMarking, Marking, SapControl, SciControl};
pub use parse::banner::parse_banner;
pub use parse::portion::parse_portion;
pub use vocab::{
    AeaType, ClassificationLevel, DissemControl, MarkingType, NatoQualifier, OtherDissemControl,
};
