//! Quasar and UV-excess survey catalogs.

use crate::catalog::families::{
    ExternalForm, FieldCatalog, NumberSegment, NumberedCatalog, SkyCodedCatalog,
};
use crate::common::constants::{field, label};
use crate::domain::{Category, FieldSpec};

static CODED_LAYOUT: [FieldSpec; 5] = [
    FieldSpec::key(field::RA_CODE),
    FieldSpec::key(field::DEC_CODE),
    FieldSpec::attribute(label::MAG_B),
    FieldSpec::attribute(label::REDSHIFT),
    FieldSpec::attribute(label::SPECTRUM),
];

static NUMBERED_LAYOUT: [FieldSpec; 3] = [
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::MAG_B),
    FieldSpec::attribute(label::SPECTRUM),
];

/// Palomar-Green names carry declination to a tenth of a degree: PG 1159-035.
pub static PG: SkyCodedCatalog = SkyCodedCatalog {
    code: "PG",
    name: "Palomar-Green Survey",
    acronym: "PG",
    category: Category::Quasar,
    prefix: "PG ",
    lead: "",
    head_width: 2,
    sign_width: 2,
    external: ExternalForm::Prefixed("PG "),
    layout: &CODED_LAYOUT,
    position_error: None,
};

pub static KUV: SkyCodedCatalog = SkyCodedCatalog {
    code: "KUV",
    name: "Kiso Ultraviolet-Excess Objects",
    acronym: "KUV",
    category: Category::Quasar,
    prefix: "KUV ",
    lead: "",
    head_width: 2,
    sign_width: 2,
    external: ExternalForm::Prefixed("KUV "),
    layout: &CODED_LAYOUT,
    position_error: None,
};

pub static HS: SkyCodedCatalog = SkyCodedCatalog {
    code: "HS",
    name: "Hamburg Quasar Survey (northern)",
    acronym: "HS",
    category: Category::Quasar,
    prefix: "HS ",
    lead: "",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("HS "),
    layout: &CODED_LAYOUT,
    position_error: None,
};

pub static HE: SkyCodedCatalog = SkyCodedCatalog {
    code: "HE",
    name: "Hamburg/ESO Survey",
    acronym: "HE",
    category: Category::Quasar,
    prefix: "HE ",
    lead: "",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("HE "),
    layout: &CODED_LAYOUT,
    position_error: None,
};

pub static SBS: SkyCodedCatalog = SkyCodedCatalog {
    code: "SBS",
    name: "Second Byurakan Survey",
    acronym: "SBS",
    category: Category::Quasar,
    prefix: "SBS ",
    lead: "",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("SBS "),
    layout: &CODED_LAYOUT,
    position_error: None,
};

pub static FBS: SkyCodedCatalog = SkyCodedCatalog {
    code: "FBS",
    name: "First Byurakan Survey",
    acronym: "FBS",
    category: Category::Quasar,
    prefix: "FBS ",
    lead: "",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("FBS "),
    layout: &CODED_LAYOUT,
    position_error: None,
};

pub static EC: SkyCodedCatalog = SkyCodedCatalog {
    code: "EC",
    name: "Edinburgh-Cape Blue Object Survey",
    acronym: "EC",
    category: Category::Quasar,
    prefix: "EC ",
    lead: "",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("EC "),
    layout: &CODED_LAYOUT,
    position_error: None,
};

pub static SDSS: SkyCodedCatalog = SkyCodedCatalog {
    code: "SDSS",
    name: "Sloan Digital Sky Survey",
    acronym: "SDSS",
    category: Category::Quasar,
    prefix: "SDSS ",
    lead: "J",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("SDSS "),
    layout: &CODED_LAYOUT,
    position_error: None,
};

pub static TWO_QZ: SkyCodedCatalog = SkyCodedCatalog {
    code: "2QZ",
    name: "2dF QSO Redshift Survey",
    acronym: "2QZ",
    category: Category::Quasar,
    prefix: "2QZ ",
    lead: "J",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("2QZ "),
    layout: &CODED_LAYOUT,
    position_error: None,
};

static PLATE_LAYOUT: [FieldSpec; 4] = [
    FieldSpec::key(field::PLATE),
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::MAG_B),
    FieldSpec::attribute(label::SPECTRUM),
];

static SURVEY_LAYOUT: [FieldSpec; 4] = [
    FieldSpec::key(field::SURVEY),
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::MAG_V),
    FieldSpec::attribute(label::COLOR_BV),
];

/// Hamburg Quasar Survey plate objects: HQS H199-00123.
pub static HQS: FieldCatalog = FieldCatalog {
    code: "HQS",
    name: "Hamburg Quasar Survey Plate Objects",
    acronym: "HQS",
    category: Category::Quasar,
    prefix: "HQS ",
    separator: '-',
    number_segment: NumberSegment::Century,
    external: ExternalForm::Prefixed("HQS_"),
    layout: &PLATE_LAYOUT,
};

/// Beers-Preston-Shectman HK survey: BPS CS 22892-052.
pub static BPS: FieldCatalog = FieldCatalog {
    code: "BPS",
    name: "Beers-Preston-Shectman HK Survey",
    acronym: "BPS",
    category: Category::Quasar,
    prefix: "BPS ",
    separator: ' ',
    number_segment: NumberSegment::Prefix(3),
    external: ExternalForm::Compact("BPS"),
    layout: &SURVEY_LAYOUT,
};

pub static TON: NumberedCatalog = NumberedCatalog {
    code: "Ton",
    name: "Tonantzintla Blue Objects",
    acronym: "Ton",
    category: Category::Quasar,
    prefix: "Ton ",
    external: ExternalForm::Prefixed("Ton"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static LB: NumberedCatalog = NumberedCatalog {
    code: "LB",
    name: "Luyten Blue Objects",
    acronym: "LB",
    category: Category::Quasar,
    prefix: "LB ",
    external: ExternalForm::Prefixed("LB"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

pub static US: NumberedCatalog = NumberedCatalog {
    code: "US",
    name: "Usher Faint Blue Objects",
    acronym: "US",
    category: Category::Quasar,
    prefix: "US ",
    external: ExternalForm::Prefixed("US"),
    layout: &NUMBERED_LAYOUT,
    position_error: None,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::CatalogEntry;

    #[test]
    fn test_palomar_green_narrow_sign_window() {
        let entry = CatalogEntry::construct(&PG, &["1159", "-035", "14.8"]).unwrap();
        assert_eq!(entry.designation(), "1159-035");
        assert_eq!(entry.external_name().unwrap(), "PG 1159-035");
        assert_eq!(entry.folder_path().unwrap(), vec!["qso", "PG", "11", "-0"]);
    }

    #[test]
    fn test_hamburg_eso_wide_sign_window() {
        let entry = CatalogEntry::construct(&HE, &["1523", "-0901"]).unwrap();
        assert_eq!(entry.folder_path().unwrap(), vec!["qso", "HE", "15", "-09"]);
    }

    #[test]
    fn test_hqs_plate_and_number_century() {
        let entry = CatalogEntry::construct(&HQS, &["H199", "00123"]).unwrap();
        assert_eq!(entry.designation(), "H199-00123");
        assert_eq!(entry.external_name().unwrap(), "HQS_H199-00123");
        assert_eq!(entry.folder_path().unwrap(), vec!["qso", "HQS", "H199", "100"]);
    }

    #[test]
    fn test_bps_survey_and_number_head() {
        let entry = CatalogEntry::construct(&BPS, &["CS", "22892-052", "13.2"]).unwrap();
        assert_eq!(entry.designation(), "CS 22892-052");
        assert_eq!(entry.external_name().unwrap(), "BPSCS22892-052");
        assert_eq!(entry.folder_path().unwrap(), vec!["qso", "BPS", "CS", "228"]);
        assert_eq!(entry.star_folder().unwrap(), "CS_22892-052");
    }

    #[test]
    fn test_numbered_blue_object() {
        let entry = CatalogEntry::construct(&TON, &["618"]).unwrap();
        assert_eq!(entry.external_name().unwrap(), "Ton618");
        assert_eq!(entry.folder_path().unwrap(), vec!["qso", "Ton", "600"]);
    }
}
