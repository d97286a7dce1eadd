//! Infrared catalogs.

use crate::catalog::descriptor::CatalogDescriptor;
use crate::catalog::families::{ExternalForm, NumberedCatalog, SkyCodedCatalog};
use crate::catalog::strategy::{self, SIGNS};
use crate::common::constants::{field, label};
use crate::common::{CatalogError, Result};
use crate::domain::{Category, FieldRecord, FieldSpec, KeyValueBag, PositionError};

static IRAS_LAYOUT: [FieldSpec; 6] = [
    FieldSpec::key(field::RA_CODE),
    FieldSpec::key(field::DEC_CODE),
    FieldSpec::attribute(label::FLUX_12),
    FieldSpec::attribute(label::FLUX_25),
    FieldSpec::attribute(label::FLUX_60),
    FieldSpec::attribute(label::FLUX_100),
];

static JHK_LAYOUT: [FieldSpec; 5] = [
    FieldSpec::key(field::RA_CODE),
    FieldSpec::key(field::DEC_CODE),
    FieldSpec::attribute(label::MAG_J),
    FieldSpec::attribute(label::MAG_H),
    FieldSpec::attribute(label::MAG_K),
];

static FLUX_LAYOUT: [FieldSpec; 3] = [
    FieldSpec::key(field::RA_CODE),
    FieldSpec::key(field::DEC_CODE),
    FieldSpec::attribute(label::FLUX),
];

const IRAS_ERROR: Option<PositionError> = Some(PositionError::new(20.0, 60.0));

pub static IRAS_PSC: SkyCodedCatalog = SkyCodedCatalog {
    code: "IRAS PSC",
    name: "IRAS Point Source Catalog",
    acronym: "IRAS",
    category: Category::Infrared,
    prefix: "IRAS ",
    lead: "",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("IRAS "),
    layout: &IRAS_LAYOUT,
    position_error: IRAS_ERROR,
};

pub static IRAS_FSC: SkyCodedCatalog = SkyCodedCatalog {
    code: "IRAS FSC",
    name: "IRAS Faint Source Catalog",
    acronym: "IRASF",
    category: Category::Infrared,
    prefix: "IRAS ",
    lead: "F",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("IRAS "),
    layout: &IRAS_LAYOUT,
    position_error: IRAS_ERROR,
};

pub static TWO_MASS: SkyCodedCatalog = SkyCodedCatalog {
    code: "2MASS",
    name: "2MASS All-Sky Point Source Catalog",
    acronym: "2MASS",
    category: Category::Infrared,
    prefix: "2MASS ",
    lead: "J",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("2MASS "),
    layout: &JHK_LAYOUT,
    position_error: None,
};

pub static TWO_MASX: SkyCodedCatalog = SkyCodedCatalog {
    code: "2MASX",
    name: "2MASS Extended Source Catalog",
    acronym: "2MASX",
    category: Category::Infrared,
    prefix: "2MASX ",
    lead: "J",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("2MASX "),
    layout: &JHK_LAYOUT,
    position_error: None,
};

pub static DENIS: SkyCodedCatalog = SkyCodedCatalog {
    code: "DENIS",
    name: "Deep Near Infrared Survey of the Southern Sky",
    acronym: "DENIS",
    category: Category::Infrared,
    prefix: "DENIS ",
    lead: "J",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("DENIS "),
    layout: &JHK_LAYOUT,
    position_error: None,
};

pub static WISE: SkyCodedCatalog = SkyCodedCatalog {
    code: "WISE",
    name: "WISE All-Sky Source Catalog",
    acronym: "WISE",
    category: Category::Infrared,
    prefix: "WISE ",
    lead: "J",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("WISE "),
    layout: &FLUX_LAYOUT,
    position_error: None,
};

pub static AKARI_IRC: SkyCodedCatalog = SkyCodedCatalog {
    code: "AKARI-IRC",
    name: "AKARI/IRC Mid-Infrared All-Sky Survey",
    acronym: "AKARI-IRC",
    category: Category::Infrared,
    prefix: "IRC-V1 ",
    lead: "J",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("AKARI-IRC-V1 "),
    layout: &FLUX_LAYOUT,
    position_error: None,
};

pub static AKARI_FIS: SkyCodedCatalog = SkyCodedCatalog {
    code: "AKARI-FIS",
    name: "AKARI/FIS All-Sky Survey Bright Source Catalogue",
    acronym: "AKARI-FIS",
    category: Category::Infrared,
    prefix: "FIS-V1 ",
    lead: "J",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("AKARI-FIS-V1 "),
    layout: &FLUX_LAYOUT,
    position_error: None,
};

/// MSX Infrared Point Source Catalog, named by galactic coordinates:
/// G123.4567+01.2345.
pub static MSX6C: SkyCodedCatalog = SkyCodedCatalog {
    code: "MSX6C",
    name: "MSX Infrared Point Source Catalog",
    acronym: "MSX6C",
    category: Category::Infrared,
    prefix: "MSX6C ",
    lead: "G",
    head_width: 3,
    sign_width: 3,
    external: ExternalForm::Prefixed("MSX6C "),
    layout: &FLUX_LAYOUT,
    position_error: None,
};

static AFGL_LAYOUT: [FieldSpec; 3] = [
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::FLUX),
    FieldSpec::attribute(label::SPECTRUM),
];

pub static AFGL: NumberedCatalog = NumberedCatalog {
    code: "AFGL",
    name: "AFGL Four Color Infrared Sky Survey",
    acronym: "AFGL",
    category: Category::Infrared,
    prefix: "AFGL ",
    external: ExternalForm::Prefixed("AFGL "),
    layout: &AFGL_LAYOUT,
    position_error: Some(PositionError::new(60.0, 180.0)),
};

static IRC_LAYOUT: [FieldSpec; 4] = [
    FieldSpec::key(field::ZONE),
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::MAG_K),
    FieldSpec::attribute(label::SPECTRUM),
];

/// Two-Micron Sky Survey. The signed zone and the number are written
/// together: IRC +10216.
#[derive(Debug)]
pub struct Irc;

pub static IRC: Irc = Irc;

impl Irc {
    /// Zone part, sign plus two digits.
    const ZONE_WIDTH: usize = 3;
}

impl CatalogDescriptor for Irc {
    fn catalog_code(&self) -> &'static str {
        "IRC"
    }

    fn catalog_name(&self) -> &'static str {
        "Two-Micron Sky Survey"
    }

    fn category(&self) -> Category {
        Category::Infrared
    }

    fn name_prefix(&self) -> &'static str {
        "IRC "
    }

    fn layout(&self) -> &'static [FieldSpec] {
        &IRC_LAYOUT
    }

    fn designation(&self, record: &FieldRecord) -> Result<String> {
        let zone = record.get(field::ZONE)?;
        if !zone.starts_with(SIGNS) {
            return Err(CatalogError::malformed(zone, "zone needs a sign"));
        }
        Ok(format!("{}{}", zone, record.get(field::NUMBER)?))
    }

    fn external_name(&self, designation: &str, _attributes: &KeyValueBag) -> Result<String> {
        Ok(format!("IRC{}", designation))
    }

    fn hierarchic_folders(&self, designation: &str) -> Result<Vec<String>> {
        let zone = strategy::marker_window(designation, SIGNS, 0, Self::ZONE_WIDTH)?;
        let number: String = designation
            .chars()
            .skip(strategy::find_marker(designation, SIGNS)? + Self::ZONE_WIDTH)
            .collect();
        Ok(vec![zone, strategy::leading_century(&number)?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::CatalogEntry;

    #[test]
    fn test_iras_faint_source_lead() {
        let entry = CatalogEntry::construct(&IRAS_FSC, &["12345", "+1234"]).unwrap();
        assert_eq!(entry.designation(), "F12345+1234");
        assert_eq!(entry.external_name().unwrap(), "IRAS F12345+1234");
        assert_eq!(
            entry.folder_path().unwrap(),
            vec!["infrared", "IRAS_FSC", "12", "+12"]
        );
        assert_eq!(entry.star_folder().unwrap(), "12345+1234");
    }

    #[test]
    fn test_msx_galactic_longitude_bucket() {
        let entry = CatalogEntry::construct(&MSX6C, &["123.4567", "-01.2345"]).unwrap();
        assert_eq!(entry.folder_path().unwrap(), vec!["infrared", "MSX6C", "123", "-01"]);
    }

    #[test]
    fn test_irc_zone_and_number() {
        let entry = CatalogEntry::construct(&IRC, &["+10", "216", "-1.9", "C9,5"]).unwrap();
        assert_eq!(entry.designation(), "+10216");
        assert_eq!(entry.display_name(), "IRC +10216");
        assert_eq!(entry.external_name().unwrap(), "IRC+10216");
        assert_eq!(entry.folder_path().unwrap(), vec!["infrared", "IRC", "+10", "200"]);
    }

    #[test]
    fn test_irc_rejects_unsigned_zone() {
        let err = CatalogEntry::construct(&IRC, &["10", "216"]).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedDesignation { .. }));
    }
}
