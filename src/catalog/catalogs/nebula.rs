//! Star clusters, nebulae and planetary nebulae.

use crate::catalog::descriptor::CatalogDescriptor;
use crate::catalog::families::{ExternalForm, NumberedCatalog, SkyCodedCatalog};
use crate::catalog::strategy::{self, SIGNS};
use crate::common::constants::{field, label};
use crate::common::{CatalogError, Result};
use crate::domain::{Category, FieldRecord, FieldSpec, KeyValueBag};

static NUMBERED_LAYOUT: [FieldSpec; 4] = [
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::MAG_V),
    FieldSpec::attribute(label::SIZE),
    FieldSpec::attribute(label::TYPE),
];

pub static NGC: NumberedCatalog = NumberedCatalog {
    code: "NGC",
    name: "New General Catalogue",
    acronym: "NGC",
    category: Category::ClusterAndNebula,
    prefix: "NGC ",
    external: ExternalForm::Prefixed("NGC"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static IC: NumberedCatalog = NumberedCatalog {
    code: "IC",
    name: "Index Catalogue",
    acronym: "IC",
    category: Category::ClusterAndNebula,
    prefix: "IC ",
    external: ExternalForm::Prefixed("IC"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static ACO: NumberedCatalog = NumberedCatalog {
    code: "ACO",
    name: "Abell Clusters of Galaxies",
    acronym: "ACO",
    category: Category::ClusterAndNebula,
    prefix: "ACO ",
    external: ExternalForm::Prefixed("ACO"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static VDB: NumberedCatalog = NumberedCatalog {
    code: "vdB",
    name: "van den Bergh Reflection Nebulae",
    acronym: "vdB",
    category: Category::ClusterAndNebula,
    prefix: "vdB ",
    external: ExternalForm::Prefixed("vdB"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static LBN: NumberedCatalog = NumberedCatalog {
    code: "LBN",
    name: "Lynds Bright Nebulae",
    acronym: "LBN",
    category: Category::ClusterAndNebula,
    prefix: "LBN ",
    external: ExternalForm::Prefixed("LBN"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static LDN: NumberedCatalog = NumberedCatalog {
    code: "LDN",
    name: "Lynds Dark Nebulae",
    acronym: "LDN",
    category: Category::ClusterAndNebula,
    prefix: "LDN ",
    external: ExternalForm::Prefixed("LDN"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static BARNARD: NumberedCatalog = NumberedCatalog {
    code: "B",
    name: "Barnard Dark Objects",
    acronym: "B",
    category: Category::ClusterAndNebula,
    prefix: "B ",
    external: ExternalForm::Prefixed("B"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

// Open cluster lists whose external names zero-pad the number: M007, Cr042a.

pub static MESSIER: NumberedCatalog = NumberedCatalog {
    code: "M",
    name: "Messier Catalogue",
    acronym: "M",
    category: Category::ClusterAndNebula,
    prefix: "M ",
    external: ExternalForm::Padded("M"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static COLLINDER: NumberedCatalog = NumberedCatalog {
    code: "Cr",
    name: "Collinder Open Clusters",
    acronym: "Cr",
    category: Category::ClusterAndNebula,
    prefix: "Cr ",
    external: ExternalForm::Padded("Cr"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static TRUMPLER: NumberedCatalog = NumberedCatalog {
    code: "Tr",
    name: "Trumpler Open Clusters",
    acronym: "Tr",
    category: Category::ClusterAndNebula,
    prefix: "Tr ",
    external: ExternalForm::Padded("Tr"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static MELOTTE: NumberedCatalog = NumberedCatalog {
    code: "Mel",
    name: "Melotte Clusters",
    acronym: "Mel",
    category: Category::ClusterAndNebula,
    prefix: "Mel ",
    external: ExternalForm::Padded("Mel"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static BERKELEY: NumberedCatalog = NumberedCatalog {
    code: "Be",
    name: "Berkeley Open Clusters",
    acronym: "Be",
    category: Category::ClusterAndNebula,
    prefix: "Be ",
    external: ExternalForm::Padded("Be"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static KING: NumberedCatalog = NumberedCatalog {
    code: "King",
    name: "King Open Clusters",
    acronym: "King",
    category: Category::ClusterAndNebula,
    prefix: "King ",
    external: ExternalForm::Padded("King"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static STOCK: NumberedCatalog = NumberedCatalog {
    code: "Stock",
    name: "Stock Open Clusters",
    acronym: "Stock",
    category: Category::ClusterAndNebula,
    prefix: "Stock ",
    external: ExternalForm::Padded("Stock"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

const SHARPLESS_PREFIX: &str = "2-";

/// Sharpless H II regions. The catalog number "2-" belongs to the
/// designation: Sh 2-155.
#[derive(Debug)]
pub struct Sharpless;

pub static SH2: Sharpless = Sharpless;

impl CatalogDescriptor for Sharpless {
    fn catalog_code(&self) -> &'static str {
        "Sh2"
    }

    fn catalog_name(&self) -> &'static str {
        "Sharpless Catalog of H II Regions"
    }

    fn category(&self) -> Category {
        Category::ClusterAndNebula
    }

    fn name_prefix(&self) -> &'static str {
        "Sh "
    }

    fn layout(&self) -> &'static [FieldSpec] {
        &NUMBERED_LAYOUT
    }

    fn designation(&self, record: &FieldRecord) -> Result<String> {
        Ok(format!("{}{}", SHARPLESS_PREFIX, record.get(field::NUMBER)?))
    }

    fn external_name(&self, designation: &str, _attributes: &KeyValueBag) -> Result<String> {
        Ok(format!("Sh{}", designation))
    }

    fn hierarchic_folders(&self, designation: &str) -> Result<Vec<String>> {
        let number = strategy::strip_required_prefix(designation, SHARPLESS_PREFIX)?;
        Ok(vec![strategy::trailing_century(strategy::digits(number)?)?])
    }
}

static PK_LAYOUT: [FieldSpec; 5] = [
    FieldSpec::key(field::GLON),
    FieldSpec::key(field::GLAT),
    FieldSpec::key(field::SEQUENCE),
    FieldSpec::attribute(label::MAG_V),
    FieldSpec::attribute(label::SIZE),
];

/// Perek-Kohoutek planetary nebulae, named by galactic coordinates in whole
/// degrees and a sequence number: PK 064+05 1.
#[derive(Debug)]
pub struct PerekKohoutek;

pub static PK: PerekKohoutek = PerekKohoutek;

impl CatalogDescriptor for PerekKohoutek {
    fn catalog_code(&self) -> &'static str {
        "PK"
    }

    fn catalog_name(&self) -> &'static str {
        "Catalogue of Galactic Planetary Nebulae"
    }

    fn category(&self) -> Category {
        Category::ClusterAndNebula
    }

    fn name_prefix(&self) -> &'static str {
        "PK "
    }

    fn layout(&self) -> &'static [FieldSpec] {
        &PK_LAYOUT
    }

    fn designation(&self, record: &FieldRecord) -> Result<String> {
        let glat = record.get(field::GLAT)?;
        if !glat.starts_with(SIGNS) {
            return Err(CatalogError::malformed(glat, "galactic latitude needs a sign"));
        }
        Ok(format!(
            "{}{} {}",
            record.get(field::GLON)?,
            glat,
            record.get(field::SEQUENCE)?
        ))
    }

    fn external_name(&self, designation: &str, _attributes: &KeyValueBag) -> Result<String> {
        ExternalForm::Dotted("PK").render(self.catalog_code(), designation)
    }

    fn hierarchic_folders(&self, designation: &str) -> Result<Vec<String>> {
        let glon = strategy::prefix(designation, 3)?;
        strategy::digits(&glon)?;
        Ok(vec![glon, strategy::marker_window(designation, SIGNS, 0, 3)?])
    }
}

static PN_LAYOUT: [FieldSpec; 4] = [
    FieldSpec::key(field::RA_CODE),
    FieldSpec::key(field::DEC_CODE),
    FieldSpec::attribute(label::MAG_V),
    FieldSpec::attribute(label::SIZE),
];

/// Planetary nebulae in galactic coordinates: PN G064.7+05.0. The lead `G` is part
/// of the designation, so the external name only adds "PN ".
pub static PN_G: SkyCodedCatalog = SkyCodedCatalog {
    code: "PN G",
    name: "Strasbourg-ESO Catalogue of Galactic Planetary Nebulae",
    acronym: "PN",
    category: Category::ClusterAndNebula,
    prefix: "PN ",
    lead: "G",
    head_width: 3,
    sign_width: 3,
    external: ExternalForm::Prefixed("PN "),
    layout: &PN_LAYOUT,
    position_error: None,
};
