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

//! Composite value types: the sub-structures that make up a `Marking`, and the
//! `Marking` root type itself.

mod aea;
mod marking;
mod sap;
mod sci;

pub use aea::AeaMarking;
pub use marking::Marking;
pub use sap::SapControl;
pub use sci::SciControl;
