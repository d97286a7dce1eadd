//! Emission-line star lists and other catalogs without a better home.

use crate::catalog::families::{
    ExternalForm, FieldCatalog, NumberSegment, NumberedCatalog, SkyCodedCatalog,
};
use crate::common::constants::{field, label};
use crate::domain::{Category, FieldSpec};

static A64_LAYOUT: [FieldSpec; 4] = [
    FieldSpec::key(field::AREA),
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::MAG_V),
    FieldSpec::attribute(label::SPECTRUM),
];

/// Objects numbered within survey areas: [A64] AB 01.
pub static A64: FieldCatalog = FieldCatalog {
    code: "[A64]",
    name: "Area Survey Objects",
    acronym: "A64",
    category: Category::Others,
    prefix: "[A64] ",
    separator: ' ',
    number_segment: NumberSegment::Omitted,
    external: ExternalForm::Dotted("[A64]"),
    layout: &A64_LAYOUT,
};

static EMISSION_LAYOUT: [FieldSpec; 3] = [
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::MAG_V),
    FieldSpec::attribute(label::SPECTRUM),
];

pub static STHA: NumberedCatalog = NumberedCatalog {
    code: "StHA",
    name: "Stephenson H-alpha Emission Stars",
    acronym: "StHA",
    category: Category::Others,
    prefix: "StHA ",
    external: ExternalForm::Prefixed("StHA"),
    layout: &EMISSION_LAYOUT,
    position_error: None,
};

pub static MWC: NumberedCatalog = NumberedCatalog {
    code: "MWC",
    name: "Mount Wilson Catalog of Emission-Line Stars",
    acronym: "MWC",
    category: Category::Others,
    prefix: "MWC ",
    external: ExternalForm::Prefixed("MWC"),
    layout: &EMISSION_LAYOUT,
    position_error: None,
};

pub static CSS: NumberedCatalog = NumberedCatalog {
    code: "CSS",
    name: "Case Stellar Survey",
    acronym: "CSS",
    category: Category::Others,
    prefix: "CSS ",
    external: ExternalForm::Prefixed("CSS"),
    layout: &EMISSION_LAYOUT,
    position_error: None,
};

static HBHA_LAYOUT: [FieldSpec; 4] = [
    FieldSpec::key(field::RA_CODE),
    FieldSpec::key(field::DEC_CODE),
    FieldSpec::attribute(label::MAG_V),
    FieldSpec::attribute(label::REMARKS),
];

pub static HBHA: SkyCodedCatalog = SkyCodedCatalog {
    code: "HBHA",
    name: "Hamburg Objective-Prism H-alpha Survey",
    acronym: "HBHA",
    category: Category::Others,
    prefix: "HBHA ",
    lead: "",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("HBHA "),
    layout: &HBHA_LAYOUT,
    position_error: None,
};
