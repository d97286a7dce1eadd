//! Stellar catalogs: running-number surveys, zone catalogs and the
//! astrometric reference catalogs.

use crate::catalog::descriptor::CatalogDescriptor;
use crate::catalog::families::{
    ExternalForm, FieldCatalog, NumberSegment, NumberedCatalog, SkyCodedCatalog, ZoneCatalog,
};
use crate::catalog::strategy;
use crate::common::constants::{field, label};
use crate::common::Result;
use crate::domain::{Category, FieldRecord, FieldSpec, KeyValueBag};

static PHOTOMETRIC_LAYOUT: [FieldSpec; 4] = [
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::MAG_V),
    FieldSpec::attribute(label::COLOR_BV),
    FieldSpec::attribute(label::SPECTRUM),
];

static PROPER_MOTION_LAYOUT: [FieldSpec; 3] = [
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::MAG_V),
    FieldSpec::attribute(label::PROPER_MOTION),
];

pub static HIP: NumberedCatalog = NumberedCatalog {
    code: "HIP",
    name: "Hipparcos Catalogue",
    acronym: "HIP",
    category: Category::Star,
    prefix: "HIP ",
    external: ExternalForm::Prefixed("HIP"),
    layout: &PHOTOMETRIC_LAYOUT,
    position_error: None,
};

pub static HD: NumberedCatalog = NumberedCatalog {
    code: "HD",
    name: "Henry Draper Catalogue",
    acronym: "HD",
    category: Category::Star,
    prefix: "HD ",
    external: ExternalForm::Prefixed("HD"),
    layout: &PHOTOMETRIC_LAYOUT,
    position_error: None,
};

pub static HDE: NumberedCatalog = NumberedCatalog {
    code: "HDE",
    name: "Henry Draper Extension",
    acronym: "HDE",
    category: Category::Star,
    prefix: "HDE ",
    external: ExternalForm::Prefixed("HDE"),
    layout: &PHOTOMETRIC_LAYOUT,
    position_error: None,
};

pub static SAO: NumberedCatalog = NumberedCatalog {
    code: "SAO",
    name: "Smithsonian Astrophysical Observatory Star Catalog",
    acronym: "SAO",
    category: Category::Star,
    prefix: "SAO ",
    external: ExternalForm::Prefixed("SAO"),
    layout: &PHOTOMETRIC_LAYOUT,
    position_error: None,
};

pub static LHS: NumberedCatalog = NumberedCatalog {
    code: "LHS",
    name: "Luyten Half-Second Catalogue",
    acronym: "LHS",
    category: Category::Star,
    prefix: "LHS ",
    external: ExternalForm::Prefixed("LHS"),
    layout: &PROPER_MOTION_LAYOUT,
    position_error: None,
};

pub static LTT: NumberedCatalog = NumberedCatalog {
    code: "LTT",
    name: "Luyten Two-Tenths Catalogue",
    acronym: "LTT",
    category: Category::Star,
    prefix: "LTT ",
    external: ExternalForm::Prefixed("LTT"),
    layout: &PROPER_MOTION_LAYOUT,
    position_error: None,
};

pub static ROSS: NumberedCatalog = NumberedCatalog {
    code: "Ross",
    name: "Ross High Proper Motion Stars",
    acronym: "Ross",
    category: Category::Star,
    prefix: "Ross ",
    external: ExternalForm::Prefixed("Ross"),
    layout: &PROPER_MOTION_LAYOUT,
    position_error: None,
};

pub static WOLF: NumberedCatalog = NumberedCatalog {
    code: "Wolf",
    name: "Wolf High Proper Motion Stars",
    acronym: "Wolf",
    category: Category::Star,
    prefix: "Wolf ",
    external: ExternalForm::Prefixed("Wolf"),
    layout: &PROPER_MOTION_LAYOUT,
    position_error: None,
};

pub static GD: NumberedCatalog = NumberedCatalog {
    code: "GD",
    name: "Giclas Dwarfs",
    acronym: "GD",
    category: Category::Star,
    prefix: "GD ",
    external: ExternalForm::Prefixed("GD"),
    layout: &PHOTOMETRIC_LAYOUT,
    position_error: None,
};

pub static HZ: NumberedCatalog = NumberedCatalog {
    code: "HZ",
    name: "Humason-Zwicky Faint Blue Stars",
    acronym: "HZ",
    category: Category::Star,
    prefix: "HZ ",
    external: ExternalForm::Prefixed("HZ"),
    layout: &PHOTOMETRIC_LAYOUT,
    position_error: None,
};

static TYCHO_LAYOUT: [FieldSpec; 5] = [
    FieldSpec::key(field::REGION),
    FieldSpec::key(field::NUMBER),
    FieldSpec::key(field::COMPONENT),
    FieldSpec::attribute(label::MAG_BT),
    FieldSpec::attribute(label::MAG_VT),
];

/// Tycho catalogs: TYC 1234-567-1, numbered within GSC regions.
#[derive(Debug)]
pub struct Tycho;

pub static TYC: Tycho = Tycho;

impl CatalogDescriptor for Tycho {
    fn catalog_code(&self) -> &'static str {
        "TYC"
    }

    fn catalog_name(&self) -> &'static str {
        "Tycho-2 Catalogue"
    }

    fn category(&self) -> Category {
        Category::Star
    }

    fn name_prefix(&self) -> &'static str {
        "TYC "
    }

    fn layout(&self) -> &'static [FieldSpec] {
        &TYCHO_LAYOUT
    }

    fn designation(&self, record: &FieldRecord) -> Result<String> {
        Ok(format!(
            "{}-{}-{}",
            record.get(field::REGION)?,
            record.get(field::NUMBER)?,
            record.get(field::COMPONENT)?
        ))
    }

    fn external_name(&self, designation: &str, _attributes: &KeyValueBag) -> Result<String> {
        Ok(format!("TYC{}", strategy::substitute(designation, &[('-', '.')])))
    }

    fn hierarchic_folders(&self, designation: &str) -> Result<Vec<String>> {
        let (region, rest) = strategy::split_at_marker(designation, &['-'])?;
        strategy::digits(region)?;
        // number and component must both be present
        strategy::split_at_marker(rest, &['-'])?;
        Ok(vec![strategy::leading_century(region)?, region.to_string()])
    }
}

static GSC_LAYOUT: [FieldSpec; 4] = [
    FieldSpec::key(field::REGION),
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::MAG_V),
    FieldSpec::attribute(label::TYPE),
];

/// Hubble Guide Star Catalog: GSC 1234 00567.
#[derive(Debug)]
pub struct GuideStar;

pub static GSC: GuideStar = GuideStar;

impl CatalogDescriptor for GuideStar {
    fn catalog_code(&self) -> &'static str {
        "GSC"
    }

    fn catalog_name(&self) -> &'static str {
        "Hubble Guide Star Catalog"
    }

    fn category(&self) -> Category {
        Category::Star
    }

    fn name_prefix(&self) -> &'static str {
        "GSC "
    }

    fn layout(&self) -> &'static [FieldSpec] {
        &GSC_LAYOUT
    }

    fn designation(&self, record: &FieldRecord) -> Result<String> {
        Ok(format!(
            "{} {}",
            record.get(field::REGION)?,
            record.get(field::NUMBER)?
        ))
    }

    fn external_name(&self, designation: &str, _attributes: &KeyValueBag) -> Result<String> {
        let (region, number) = strategy::split_at_marker(designation, &[' '])?;
        Ok(format!("GSC{}.{}", region, number))
    }

    fn hierarchic_folders(&self, designation: &str) -> Result<Vec<String>> {
        let (region, _) = strategy::split_at_marker(designation, &[' '])?;
        let region = strategy::digits(region)?;
        Ok(vec![
            strategy::prefix(region, 2)?,
            strategy::decade_bucket(strategy::leading_integer(region)?),
        ])
    }
}

static USNO_LAYOUT: [FieldSpec; 4] = [
    FieldSpec::key(field::ZONE),
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::MAG_B),
    FieldSpec::attribute(label::MAG_R),
];

/// USNO-A2.0: 0900-01234567. VSNET has no naming convention for it.
#[derive(Debug)]
pub struct UsnoA2;

pub static USNO_A2: UsnoA2 = UsnoA2;

impl CatalogDescriptor for UsnoA2 {
    fn catalog_code(&self) -> &'static str {
        "USNO-A2.0"
    }

    fn catalog_name(&self) -> &'static str {
        "USNO-A2.0"
    }

    fn acronym(&self) -> &'static str {
        "USNO"
    }

    fn category(&self) -> Category {
        Category::Star
    }

    fn name_prefix(&self) -> &'static str {
        "USNO-A2.0 "
    }

    fn layout(&self) -> &'static [FieldSpec] {
        &USNO_LAYOUT
    }

    fn designation(&self, record: &FieldRecord) -> Result<String> {
        Ok(format!(
            "{}-{}",
            record.get(field::ZONE)?,
            record.get(field::NUMBER)?
        ))
    }

    fn hierarchic_folders(&self, designation: &str) -> Result<Vec<String>> {
        let (zone, number) = strategy::split_at_marker(designation, &['-'])?;
        Ok(vec![
            strategy::digits(zone)?.to_string(),
            strategy::prefix(number, 3)?,
        ])
    }
}

static DURCHMUSTERUNG_LAYOUT: [FieldSpec; 3] = [
    FieldSpec::key(field::ZONE),
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::MAG_V),
];

pub static BD: ZoneCatalog = ZoneCatalog {
    code: "BD",
    name: "Bonner Durchmusterung",
    acronym: "BD",
    category: Category::Star,
    prefix: "BD",
    separator: ' ',
    external: ExternalForm::Dotted("BD"),
    layout: &DURCHMUSTERUNG_LAYOUT,
};

pub static CD: ZoneCatalog = ZoneCatalog {
    code: "CD",
    name: "Cordoba Durchmusterung",
    acronym: "CD",
    category: Category::Star,
    prefix: "CD",
    separator: ' ',
    external: ExternalForm::Dotted("CD"),
    layout: &DURCHMUSTERUNG_LAYOUT,
};

pub static CPD: ZoneCatalog = ZoneCatalog {
    code: "CPD",
    name: "Cape Photographic Durchmusterung",
    acronym: "CPD",
    category: Category::Star,
    prefix: "CPD",
    separator: ' ',
    external: ExternalForm::Dotted("CPD"),
    layout: &DURCHMUSTERUNG_LAYOUT,
};

static FIELD_LAYOUT: [FieldSpec; 4] = [
    FieldSpec::key(field::FIELD),
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::MAG_V),
    FieldSpec::attribute(label::PROPER_MOTION),
];

pub static LP: FieldCatalog = FieldCatalog {
    code: "LP",
    name: "Luyten Palomar Proper Motion Survey",
    acronym: "LP",
    category: Category::Star,
    prefix: "LP ",
    separator: '-',
    number_segment: NumberSegment::Omitted,
    external: ExternalForm::Prefixed("LP"),
    layout: &FIELD_LAYOUT,
};

pub static GICLAS: FieldCatalog = FieldCatalog {
    code: "G",
    name: "Giclas Proper Motion Stars",
    acronym: "G",
    category: Category::Star,
    prefix: "G ",
    separator: '-',
    number_segment: NumberSegment::Omitted,
    external: ExternalForm::Prefixed("G"),
    layout: &FIELD_LAYOUT,
};

static WD_LAYOUT: [FieldSpec; 4] = [
    FieldSpec::key(field::RA_CODE),
    FieldSpec::key(field::DEC_CODE),
    FieldSpec::attribute(label::MAG_V),
    FieldSpec::attribute(label::SPECTRUM),
];

pub static WD: SkyCodedCatalog = SkyCodedCatalog {
    code: "WD",
    name: "McCook-Sion White Dwarf Catalog",
    acronym: "WD",
    category: Category::Star,
    prefix: "WD ",
    lead: "",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("WD "),
    layout: &WD_LAYOUT,
    position_error: None,
};
