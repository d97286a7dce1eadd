//! Galaxy catalogs.

use crate::catalog::descriptor::CatalogDescriptor;
use crate::catalog::families::{
    ExternalForm, FieldCatalog, NumberSegment, NumberedCatalog, SkyCodedCatalog,
};
use crate::catalog::strategy::{self, SIGNS};
use crate::common::constants::{field, label};
use crate::common::{CatalogError, Result};
use crate::domain::{Category, FieldRecord, FieldSpec, KeyValueBag};

static NUMBERED_LAYOUT: [FieldSpec; 4] = [
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::MAG_PG),
    FieldSpec::attribute(label::SIZE),
    FieldSpec::attribute(label::MORPHOLOGY),
];

pub static UGC: NumberedCatalog = NumberedCatalog {
    code: "UGC",
    name: "Uppsala General Catalogue of Galaxies",
    acronym: "UGC",
    category: Category::Galaxy,
    prefix: "UGC ",
    external: ExternalForm::Prefixed("UGC"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static UGCA: NumberedCatalog = NumberedCatalog {
    code: "UGCA",
    name: "Uppsala General Catalogue, Addendum",
    acronym: "UGCA",
    category: Category::Galaxy,
    prefix: "UGCA ",
    external: ExternalForm::Prefixed("UGCA"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static PGC: NumberedCatalog = NumberedCatalog {
    code: "PGC",
    name: "Principal Galaxies Catalogue",
    acronym: "PGC",
    category: Category::Galaxy,
    prefix: "PGC ",
    external: ExternalForm::Prefixed("PGC"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static MRK: NumberedCatalog = NumberedCatalog {
    code: "Mrk",
    name: "Markarian Galaxies",
    acronym: "Mrk",
    category: Category::Galaxy,
    prefix: "Mrk ",
    external: ExternalForm::Prefixed("Mrk"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static ARP: NumberedCatalog = NumberedCatalog {
    code: "Arp",
    name: "Atlas of Peculiar Galaxies",
    acronym: "Arp",
    category: Category::Galaxy,
    prefix: "Arp ",
    external: ExternalForm::Prefixed("Arp"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static VV: NumberedCatalog = NumberedCatalog {
    code: "VV",
    name: "Vorontsov-Velyaminov Interacting Galaxies",
    acronym: "VV",
    category: Category::Galaxy,
    prefix: "VV ",
    external: ExternalForm::Prefixed("VV"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

static MCG_LAYOUT: [FieldSpec; 5] = [
    FieldSpec::key(field::ZONE),
    FieldSpec::key(field::FIELD),
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::MAG_PG),
    FieldSpec::attribute(label::MORPHOLOGY),
];

/// Morphological Catalogue of Galaxies: MCG +05-12-034.
#[derive(Debug)]
pub struct Mcg;

pub static MCG: Mcg = Mcg;

impl CatalogDescriptor for Mcg {
    fn catalog_code(&self) -> &'static str {
        "MCG"
    }

    fn catalog_name(&self) -> &'static str {
        "Morphological Catalogue of Galaxies"
    }

    fn category(&self) -> Category {
        Category::Galaxy
    }

    fn name_prefix(&self) -> &'static str {
        "MCG "
    }

    fn layout(&self) -> &'static [FieldSpec] {
        &MCG_LAYOUT
    }

    fn designation(&self, record: &FieldRecord) -> Result<String> {
        Ok(format!(
            "{}-{}-{}",
            record.get(field::ZONE)?,
            record.get(field::FIELD)?,
            record.get(field::NUMBER)?
        ))
    }

    fn external_name(&self, designation: &str, _attributes: &KeyValueBag) -> Result<String> {
        Ok(format!("MCG{}", designation))
    }

    fn hierarchic_folders(&self, designation: &str) -> Result<Vec<String>> {
        let rest = designation
            .strip_prefix(SIGNS)
            .ok_or_else(|| CatalogError::malformed(designation, "zone needs a sign"))?;
        let zone = strategy::prefix(designation, 3)?;
        let (_, tail) = strategy::split_at_marker(rest, &['-'])?;
        let (plate, _) = strategy::split_at_marker(tail, &['-'])?;
        strategy::digits(plate)?;
        Ok(vec![zone, plate.to_string()])
    }
}

static ESO_LAYOUT: [FieldSpec; 4] = [
    FieldSpec::key(field::FIELD),
    FieldSpec::key(field::IDENTIFIER),
    FieldSpec::attribute(label::MAG_B),
    FieldSpec::attribute(label::MORPHOLOGY),
];

/// ESO/Uppsala Survey of the ESO(B) Atlas: ESO 123-G45.
#[derive(Debug)]
pub struct Eso;

pub static ESO: Eso = Eso;

impl CatalogDescriptor for Eso {
    fn catalog_code(&self) -> &'static str {
        "ESO"
    }

    fn catalog_name(&self) -> &'static str {
        "ESO/Uppsala Survey of the ESO(B) Atlas"
    }

    fn category(&self) -> Category {
        Category::Galaxy
    }

    fn name_prefix(&self) -> &'static str {
        "ESO "
    }

    fn layout(&self) -> &'static [FieldSpec] {
        &ESO_LAYOUT
    }

    fn designation(&self, record: &FieldRecord) -> Result<String> {
        Ok(format!(
            "{}-{}",
            record.get(field::FIELD)?,
            record.get(field::IDENTIFIER)?
        ))
    }

    fn external_name(&self, designation: &str, _attributes: &KeyValueBag) -> Result<String> {
        Ok(format!("ESO{}", designation))
    }

    fn hierarchic_folders(&self, designation: &str) -> Result<Vec<String>> {
        let (plate, id) = strategy::split_at_marker(designation, &['-'])?;
        if id.is_empty() {
            return Err(CatalogError::malformed(designation, "missing object identifier"));
        }
        Ok(vec![strategy::leading_century(strategy::digits(plate)?)?])
    }
}

static CGCG_LAYOUT: [FieldSpec; 3] = [
    FieldSpec::key(field::FIELD),
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::MAG_PG),
];

pub static CGCG: FieldCatalog = FieldCatalog {
    code: "CGCG",
    name: "Catalogue of Galaxies and of Clusters of Galaxies",
    acronym: "CGCG",
    category: Category::Galaxy,
    prefix: "CGCG ",
    separator: '-',
    number_segment: NumberSegment::Omitted,
    external: ExternalForm::Prefixed("CGCG"),
    layout: &CGCG_LAYOUT,
};

static KUG_LAYOUT: [FieldSpec; 4] = [
    FieldSpec::key(field::RA_CODE),
    FieldSpec::key(field::DEC_CODE),
    FieldSpec::attribute(label::MAG_PG),
    FieldSpec::attribute(label::MORPHOLOGY),
];

pub static KUG: SkyCodedCatalog = SkyCodedCatalog {
    code: "KUG",
    name: "Kiso Ultraviolet-Excess Galaxies",
    acronym: "KUG",
    category: Category::Galaxy,
    prefix: "KUG ",
    lead: "",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("KUG "),
    layout: &KUG_LAYOUT,
    position_error: None,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::CatalogEntry;

    #[test]
    fn test_numbered_galaxy() {
        let entry = CatalogEntry::construct(&UGC, &["12158", "13.2"]).unwrap();
        assert_eq!(entry.display_name(), "UGC 12158");
        assert_eq!(entry.external_name().unwrap(), "UGC12158");
        assert_eq!(entry.folder_path().unwrap(), vec!["galaxy", "UGC", "12100"]);
    }

    #[test]
    fn test_mcg_zone_and_field() {
        let south = CatalogEntry::construct(&MCG, &["-02", "33", "015"]).unwrap();
        assert_eq!(south.designation(), "-02-33-015");
        assert_eq!(south.external_name().unwrap(), "MCG-02-33-015");
        assert_eq!(south.folder_path().unwrap(), vec!["galaxy", "MCG", "-02", "33"]);

        let north = CatalogEntry::construct(&MCG, &["+05", "12", "034"]).unwrap();
        assert_eq!(north.folder_path().unwrap(), vec!["galaxy", "MCG", "+05", "12"]);

        let unsigned = CatalogEntry::construct(&MCG, &["05", "12", "034"]).unwrap();
        assert!(unsigned.folder_path().is_err());
    }

    #[test]
    fn test_eso_field_century() {
        let entry = CatalogEntry::construct(&ESO, &["123", "G45"]).unwrap();
        assert_eq!(entry.designation(), "123-G45");
        assert_eq!(entry.external_name().unwrap(), "ESO123-G45");
        assert_eq!(entry.folder_path().unwrap(), vec!["galaxy", "ESO", "100"]);

        let mut broken = CatalogEntry::empty(&ESO);
        broken.set_designation("12A-G45");
        assert!(broken.folder_path().is_err());
    }

    #[test]
    fn test_cgcg_field_folder() {
        let entry = CatalogEntry::construct(&CGCG, &["097", "073"]).unwrap();
        assert_eq!(entry.designation(), "097-073");
        assert_eq!(entry.external_name().unwrap(), "CGCG097-073");
        assert_eq!(entry.folder_path().unwrap(), vec!["galaxy", "CGCG", "097"]);
    }
}
