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

//! The validator: a battery of independent rule functions, each a pure fold from a
//! candidate `Marking` to zero or more `ValidationError`s. The driver concatenates
//! every rule's output and never short-circuits on the first violation, so
//! permuting the rule list below changes neither the contents nor the count of
//! the final error set — only its order, which callers aren't meant to depend on.

mod aea;
mod classification;
mod dissem;
mod display_only;
mod fgi;
mod joint;
mod nato;
mod other_dissem;
mod rel_to;
mod sap;
mod sci;

use crate::error::ValidationError;
use crate::model::Marking;

type Rule = fn(&Marking) -> Vec<ValidationError>;

const RULES: &[Rule] = &[
    classification::rule_restricted_orcon,
    classification::rule_restricted_noforn_propin_relido,
    classification::rule_fouo_classification,
    classification::rule_orcon_relido_threshold,
    classification::rule_imcon,
    dissem::rule_noforn_relto_exclusive,
    dissem::rule_noforn_relido_exclusive,
    dissem::rule_display_only_incompatible,
    sci::rule_sci_requires_disclosure,
    sci::rule_hcs_klondike_noforn,
    sap::rule_sap_program_count,
    sap::rule_waived_requires_sap,
    aea::rule_aea_threshold,
    aea::rule_cnwdi_rd_only,
    aea::rule_sigma_range,
    aea::rule_ucni_classification,
    fgi::rule_fgi_threshold,
    fgi::rule_fgi_usa_forbidden,
    fgi::rule_fgi_country_code_order,
    fgi::rule_fgi_only_in_us_document,
    rel_to::rule_rel_to_threshold,
    rel_to::rule_rel_to_usa_first,
    rel_to::rule_rel_to_order,
    rel_to::rule_rel_to_only_usa,
    display_only::rule_display_only_threshold,
    display_only::rule_display_only_order,
    other_dissem::rule_exdis_nodis_exclusive,
    other_dissem::rule_exdis_relto_incompatible,
    other_dissem::rule_nodis_relto_incompatible,
    nato::rule_cosmic_requires_top_secret,
    nato::rule_nato_requires_below_top_secret,
    nato::rule_noforn_disallowed_nato_cosmic,
    nato::rule_bohemia_balk_cosmic_top_secret_only,
    nato::rule_qualifier_requires_nato_marking,
    joint::rule_joint_usa_restricted,
];

/// Run every rule against `marking` and return the concatenation of every
/// violation reported. An empty result means the marking is fully valid.
pub(crate) fn validate(marking: &Marking) -> Vec<ValidationError> {
    RULES.iter().flat_map(|rule| rule(marking)).collect()
}
