//! Variable star catalogs.

use crate::catalog::descriptor::{layout_attributes, CatalogDescriptor};
use crate::catalog::families::{ExternalForm, NumberedCatalog, SkyCodedCatalog};
use crate::catalog::strategy;
use crate::common::constants::{field, label, IBVS_PREFIX};
use crate::common::Result;
use crate::domain::{Category, FieldRecord, FieldSpec, KeyValueBag};

/// Strip the redundant `IBVS` literal from reference columns.
fn ibvs_reference(name: &str, value: &str) -> String {
    if name == label::IBVS {
        strategy::strip_literal_prefix(value, IBVS_PREFIX).to_string()
    } else {
        value.to_string()
    }
}

static GCVS_LAYOUT: [FieldSpec; 8] = [
    FieldSpec::key(field::VARIABLE),
    FieldSpec::key(field::CONSTELLATION),
    FieldSpec::attribute(label::TYPE),
    FieldSpec::attribute(label::MAX),
    FieldSpec::attribute(label::MIN),
    FieldSpec::attribute(label::PERIOD),
    FieldSpec::attribute(label::SPECTRUM),
    FieldSpec::attribute(label::IBVS),
];

/// General Catalogue of Variable Stars. Designations are the variable's name
/// followed by the constellation abbreviation: "SS Cyg", "V1500 Cyg".
#[derive(Debug)]
pub struct Gcvs;

pub static GCVS: Gcvs = Gcvs;

impl Gcvs {
    /// Name part used for bucketing: the number of a V-numbered star,
    /// the letters otherwise.
    fn bucket_name(variable: &str) -> &str {
        match variable.strip_prefix('V') {
            Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest,
            _ => variable,
        }
    }
}

impl CatalogDescriptor for Gcvs {
    fn catalog_code(&self) -> &'static str {
        "GCVS"
    }

    fn catalog_name(&self) -> &'static str {
        "General Catalogue of Variable Stars"
    }

    fn category(&self) -> Category {
        Category::Variable
    }

    fn layout(&self) -> &'static [FieldSpec] {
        &GCVS_LAYOUT
    }

    fn designation(&self, record: &FieldRecord) -> Result<String> {
        Ok(format!(
            "{} {}",
            record.get(field::VARIABLE)?,
            record.get(field::CONSTELLATION)?
        ))
    }

    fn attributes(&self, record: &FieldRecord) -> Result<KeyValueBag> {
        Ok(layout_attributes(record, ibvs_reference))
    }

    fn external_name(&self, designation: &str, _attributes: &KeyValueBag) -> Result<String> {
        let (variable, constellation) = strategy::split_at_marker(designation, &[' '])?;
        Ok(format!(
            "{}{}",
            constellation.to_uppercase(),
            variable.to_uppercase()
        ))
    }

    fn hierarchic_folders(&self, designation: &str) -> Result<Vec<String>> {
        let (variable, constellation) = strategy::split_at_marker(designation, &[' '])?;
        strategy::prefix(constellation, 3)?;
        Ok(vec![
            strategy::safe_segment(constellation)?,
            strategy::first_char_branch(Self::bucket_name(variable))?,
        ])
    }
}

static NSV_LAYOUT: [FieldSpec; 6] = [
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::TYPE),
    FieldSpec::attribute(label::MAX),
    FieldSpec::attribute(label::MIN),
    FieldSpec::attribute(label::SPECTRUM),
    FieldSpec::attribute(label::IBVS),
];

/// New Catalogue of Suspected Variable Stars.
#[derive(Debug)]
pub struct Nsv;

pub static NSV: Nsv = Nsv;

impl CatalogDescriptor for Nsv {
    fn catalog_code(&self) -> &'static str {
        "NSV"
    }

    fn catalog_name(&self) -> &'static str {
        "New Catalogue of Suspected Variable Stars"
    }

    fn category(&self) -> Category {
        Category::Variable
    }

    fn name_prefix(&self) -> &'static str {
        "NSV "
    }

    fn layout(&self) -> &'static [FieldSpec] {
        &NSV_LAYOUT
    }

    fn designation(&self, record: &FieldRecord) -> Result<String> {
        Ok(record.get(field::NUMBER)?.to_string())
    }

    fn attributes(&self, record: &FieldRecord) -> Result<KeyValueBag> {
        Ok(layout_attributes(record, ibvs_reference))
    }

    fn external_name(&self, designation: &str, _attributes: &KeyValueBag) -> Result<String> {
        Ok(format!("NSV{}", strategy::digits(designation)?))
    }

    fn hierarchic_folders(&self, designation: &str) -> Result<Vec<String>> {
        Ok(vec![strategy::leading_century(designation)?])
    }
}

static MISV_LAYOUT: [FieldSpec; 6] = [
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::MAX),
    FieldSpec::attribute(label::MIN),
    FieldSpec::attribute(label::TYPE),
    FieldSpec::attribute(label::PERIOD),
    FieldSpec::attribute(label::REMARKS),
];

const MISV_PREFIX: &str = "MisV";

/// MISAO Project variable stars. The catalog prefix is part of the designation.
#[derive(Debug)]
pub struct MisV;

pub static MISV: MisV = MisV;

impl CatalogDescriptor for MisV {
    fn catalog_code(&self) -> &'static str {
        "MisV"
    }

    fn catalog_name(&self) -> &'static str {
        "MISAO Project Variable Stars"
    }

    fn category(&self) -> Category {
        Category::Variable
    }

    fn layout(&self) -> &'static [FieldSpec] {
        &MISV_LAYOUT
    }

    fn designation(&self, record: &FieldRecord) -> Result<String> {
        Ok(format!("{}{}", MISV_PREFIX, record.get(field::NUMBER)?))
    }

    fn external_name(&self, designation: &str, _attributes: &KeyValueBag) -> Result<String> {
        strategy::digits(strategy::strip_required_prefix(designation, MISV_PREFIX)?)?;
        Ok(designation.to_string())
    }

    fn hierarchic_folders(&self, designation: &str) -> Result<Vec<String>> {
        let number = strategy::strip_required_prefix(designation, MISV_PREFIX)?;
        Ok(vec![strategy::trailing_century(number)?])
    }
}

static NUMBERED_LAYOUT: [FieldSpec; 5] = [
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::MAX),
    FieldSpec::attribute(label::MIN),
    FieldSpec::attribute(label::TYPE),
    FieldSpec::attribute(label::PERIOD),
];

static CODED_LAYOUT: [FieldSpec; 6] = [
    FieldSpec::key(field::RA_CODE),
    FieldSpec::key(field::DEC_CODE),
    FieldSpec::attribute(label::MAX),
    FieldSpec::attribute(label::MIN),
    FieldSpec::attribute(label::TYPE),
    FieldSpec::attribute(label::PERIOD),
];

pub static NSVS: NumberedCatalog = NumberedCatalog {
    code: "NSVS",
    name: "Northern Sky Variability Survey",
    acronym: "NSVS",
    category: Category::Variable,
    prefix: "NSVS ",
    external: ExternalForm::Compact("NSVS"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static ASAS: SkyCodedCatalog = SkyCodedCatalog {
    code: "ASAS",
    name: "All Sky Automated Survey Variable Stars",
    acronym: "ASAS",
    category: Category::Variable,
    prefix: "ASAS J",
    lead: "",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("ASAS J"),
    layout: &CODED_LAYOUT,
    position_error: None,
};

pub static ROTSE1: SkyCodedCatalog = SkyCodedCatalog {
    code: "ROTSE1",
    name: "ROTSE-I Variable Stars",
    acronym: "ROTSE1",
    category: Category::Variable,
    prefix: "ROTSE1 ",
    lead: "J",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("ROTSE1 "),
    layout: &CODED_LAYOUT,
    position_error: None,
};

pub static SVS: NumberedCatalog = NumberedCatalog {
    code: "SVS",
    name: "Soviet Variable Stars",
    acronym: "SVS",
    category: Category::Variable,
    prefix: "SVS ",
    external: ExternalForm::Prefixed("SVS"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static TASS: NumberedCatalog = NumberedCatalog {
    code: "TASS",
    name: "The Amateur Sky Survey Variable Stars",
    acronym: "TASS",
    category: Category::Variable,
    prefix: "TASS ",
    external: ExternalForm::Compact("TASS"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::CatalogEntry;

    #[test]
    fn test_gcvs_letter_and_numbered_names() {
        let ss = CatalogEntry::construct(&GCVS, &["SS", "Cyg", "UGSS", "7.7", "12.4"]).unwrap();
        assert_eq!(ss.designation(), "SS Cyg");
        assert_eq!(ss.external_name().unwrap(), "CYGSS");
        assert_eq!(ss.folder_path().unwrap(), vec!["variable", "GCVS", "Cyg", "S"]);
        assert_eq!(ss.star_folder().unwrap(), "SS_Cyg");

        let nova = CatalogEntry::construct(&GCVS, &["V1500", "Cyg"]).unwrap();
        assert_eq!(nova.external_name().unwrap(), "CYGV1500");
        assert_eq!(nova.folder_path().unwrap(), vec!["variable", "GCVS", "Cyg", "1500"]);
    }

    #[test]
    fn test_gcvs_constellation_folder_is_file_safe() {
        let entry = CatalogEntry::construct(&GCVS, &["SS", "Cy g"]).unwrap();
        assert_eq!(entry.folder_path().unwrap(), vec!["variable", "GCVS", "Cy_g", "S"]);
    }

    #[test]
    fn test_gcvs_strips_ibvs_literal() {
        let with_literal = CatalogEntry::construct(
            &GCVS,
            &["V404", "Cyg", "XN", "11.2", "20.5", "", "K0IV", "IBVS3224"],
        )
        .unwrap();
        assert_eq!(with_literal.attributes().get(label::IBVS), Some("3224"));
        assert_eq!(with_literal.attributes().get(label::PERIOD), None);

        let verbatim =
            CatalogEntry::construct(&GCVS, &["V404", "Cyg", "", "", "", "", "", "3224"]).unwrap();
        assert_eq!(verbatim.attributes().get(label::IBVS), Some("3224"));
    }

    #[test]
    fn test_gcvs_requires_constellation_delimiter() {
        let mut entry = CatalogEntry::empty(&GCVS);
        entry.set_designation("SSCyg");
        assert!(entry.folder_path().is_err());
        assert!(entry.external_name().is_err());
    }

    #[test]
    fn test_nsv_buckets_and_names() {
        let entry = CatalogEntry::construct(&NSV, &["12345", "SR", "11.0", "12.5", "M5", "IBVS 987"])
            .unwrap();
        assert_eq!(entry.display_name(), "NSV 12345");
        assert_eq!(entry.external_name().unwrap(), "NSV12345");
        assert_eq!(entry.folder_path().unwrap(), vec!["variable", "NSV", "12300"]);
        assert_eq!(entry.attributes().get(label::IBVS), Some("987"));
    }

    #[test]
    fn test_misv_concatenates_prefix() {
        let entry = CatalogEntry::construct(&MISV, &["1234", "13.2", "14.0"]).unwrap();
        assert_eq!(entry.designation(), "MisV1234");
        assert_eq!(entry.external_name().unwrap(), "MisV1234");
        assert_eq!(entry.folder_path().unwrap(), vec!["variable", "MisV", "1200"]);
    }
}
