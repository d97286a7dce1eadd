//! X-ray source catalogs. All of them name sources by position.

use crate::catalog::families::{ExternalForm, SkyCodedCatalog};
use crate::common::constants::{field, label};
use crate::domain::{Category, FieldSpec, PositionError};

static SURVEY_LAYOUT: [FieldSpec; 4] = [
    FieldSpec::key(field::RA_CODE),
    FieldSpec::key(field::DEC_CODE),
    FieldSpec::attribute(label::COUNT_RATE),
    FieldSpec::attribute(label::HARDNESS),
];

static FLUX_LAYOUT: [FieldSpec; 3] = [
    FieldSpec::key(field::RA_CODE),
    FieldSpec::key(field::DEC_CODE),
    FieldSpec::attribute(label::FLUX),
];

/// Collimator-era surveys locate sources to tens of arcminutes.
const COLLIMATOR_ERROR: Option<PositionError> = Some(PositionError::new(1800.0, 3600.0));

/// ROSAT All-Sky Survey Bright Source Catalogue, 1RXS J123456.7+123456.
pub static ROSAT_BRIGHT: SkyCodedCatalog = SkyCodedCatalog {
    code: "1RXS",
    name: "ROSAT All-Sky Survey Bright Source Catalogue",
    acronym: "1RXS",
    category: Category::XRay,
    prefix: "1RXS ",
    lead: "J",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("1RXS "),
    layout: &SURVEY_LAYOUT,
    position_error: Some(PositionError::new(15.0, 60.0)),
};

pub static RX: SkyCodedCatalog = SkyCodedCatalog {
    code: "RX",
    name: "ROSAT Pointed Observations",
    acronym: "RX",
    category: Category::XRay,
    prefix: "RX ",
    lead: "J",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("RX "),
    layout: &SURVEY_LAYOUT,
    position_error: None,
};

pub static WGA: SkyCodedCatalog = SkyCodedCatalog {
    code: "WGA",
    name: "WGACAT ROSAT PSPC Sources",
    acronym: "WGA",
    category: Category::XRay,
    prefix: "WGA ",
    lead: "J",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("WGA "),
    layout: &SURVEY_LAYOUT,
    position_error: None,
};

pub static XMMSL1: SkyCodedCatalog = SkyCodedCatalog {
    code: "XMMSL1",
    name: "XMM-Newton Slew Survey",
    acronym: "XMMSL1",
    category: Category::XRay,
    prefix: "XMMSL1 ",
    lead: "J",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("XMMSL1 "),
    layout: &SURVEY_LAYOUT,
    position_error: None,
};

pub static EINSTEIN_2E: SkyCodedCatalog = SkyCodedCatalog {
    code: "2E",
    name: "Einstein IPC Catalog",
    acronym: "2E",
    category: Category::XRay,
    prefix: "2E ",
    lead: "",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("2E "),
    layout: &SURVEY_LAYOUT,
    position_error: None,
};

pub static HEAO_1H: SkyCodedCatalog = SkyCodedCatalog {
    code: "1H",
    name: "HEAO 1 A-1 X-ray Source Catalog",
    acronym: "1H",
    category: Category::XRay,
    prefix: "1H ",
    lead: "",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("1H "),
    layout: &FLUX_LAYOUT,
    position_error: COLLIMATOR_ERROR,
};

pub static UHURU_4U: SkyCodedCatalog = SkyCodedCatalog {
    code: "4U",
    name: "Fourth Uhuru Catalog",
    acronym: "4U",
    category: Category::XRay,
    prefix: "4U ",
    lead: "",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("4U "),
    layout: &FLUX_LAYOUT,
    position_error: COLLIMATOR_ERROR,
};

pub static EINSTEIN_1ES: SkyCodedCatalog = SkyCodedCatalog {
    code: "1ES",
    name: "Einstein Slew Survey",
    acronym: "1ES",
    category: Category::XRay,
    prefix: "1ES ",
    lead: "",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("1ES "),
    layout: &SURVEY_LAYOUT,
    position_error: None,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::CatalogEntry;

    #[test]
    fn test_rosat_bright_source() {
        let entry =
            CatalogEntry::construct(&ROSAT_BRIGHT, &["123456.7", "+123456", "0.12", "-0.5"]).unwrap();
        assert_eq!(entry.designation(), "J123456.7+123456");
        assert_eq!(entry.display_name(), "1RXS J123456.7+123456");
        assert_eq!(entry.external_name().unwrap(), "1RXS J123456.7+123456");
        assert_eq!(entry.folder_path().unwrap(), vec!["xray", "1RXS", "12", "+12"]);
        assert_eq!(entry.star_folder().unwrap(), "123456.7+123456");
    }

    #[test]
    fn test_uhuru_without_lead() {
        let entry = CatalogEntry::construct(&UHURU_4U, &["1700", "-37"]).unwrap();
        assert_eq!(entry.designation(), "1700-37");
        assert_eq!(entry.folder_path().unwrap(), vec!["xray", "4U", "17", "-37"]);
        assert_eq!(
            entry.position_error(&PositionError::default()),
            PositionError::new(1800.0, 3600.0)
        );
    }

    #[test]
    fn test_short_declination_is_malformed() {
        let entry = CatalogEntry::construct(&EINSTEIN_2E, &["0123", "+1"]).unwrap();
        assert!(entry.folder_path().is_err());
    }
}
