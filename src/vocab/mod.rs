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

//! Closed marking vocabularies: classification levels, marking type, dissemination
//! controls, AEA categories and NATO qualifiers.

pub(crate) mod aea_type;
mod classification;
mod dissem;
mod marking_type;
mod nato;
mod other_dissem;

pub use aea_type::AeaType;
pub use classification::ClassificationLevel;
pub use dissem::DissemControl;
pub use marking_type::MarkingType;
pub use nato::NatoQualifier;
pub use other_dissem::OtherDissemControl;
