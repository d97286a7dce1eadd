//! Radio source catalogs.

use crate::catalog::families::{ExternalForm, NumberedCatalog, SkyCodedCatalog, ZoneCatalog};
use crate::common::constants::{field, label};
use crate::domain::{Category, FieldSpec, PositionError};

static CODED_LAYOUT: [FieldSpec; 3] = [
    FieldSpec::key(field::RA_CODE),
    FieldSpec::key(field::DEC_CODE),
    FieldSpec::attribute(label::FLUX_1400),
];

static NUMBERED_LAYOUT: [FieldSpec; 3] = [
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::FLUX),
    FieldSpec::attribute(label::REMARKS),
];

static ZONED_LAYOUT: [FieldSpec; 3] = [
    FieldSpec::key(field::ZONE),
    FieldSpec::key(field::NUMBER),
    FieldSpec::attribute(label::FLUX),
];

const SINGLE_DISH_ERROR: Option<PositionError> = Some(PositionError::new(60.0, 180.0));

pub static NVSS: SkyCodedCatalog = SkyCodedCatalog {
    code: "NVSS",
    name: "NRAO VLA Sky Survey",
    acronym: "NVSS",
    category: Category::Radio,
    prefix: "NVSS ",
    lead: "J",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("NVSS "),
    layout: &CODED_LAYOUT,
    position_error: None,
};

pub static FIRST: SkyCodedCatalog = SkyCodedCatalog {
    code: "FIRST",
    name: "Faint Images of the Radio Sky at Twenty-cm",
    acronym: "FIRST",
    category: Category::Radio,
    prefix: "FIRST ",
    lead: "J",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("FIRST "),
    layout: &CODED_LAYOUT,
    position_error: None,
};

pub static PKS: SkyCodedCatalog = SkyCodedCatalog {
    code: "PKS",
    name: "Parkes Radio Sources",
    acronym: "PKS",
    category: Category::Radio,
    prefix: "PKS ",
    lead: "",
    head_width: 2,
    sign_width: 3,
    external: ExternalForm::Prefixed("PKS "),
    layout: &CODED_LAYOUT,
    position_error: SINGLE_DISH_ERROR,
};

pub static THIRD_CAMBRIDGE: NumberedCatalog = NumberedCatalog {
    code: "3C",
    name: "Third Cambridge Catalogue of Radio Sources",
    acronym: "3C",
    category: Category::Radio,
    prefix: "3C ",
    external: ExternalForm::Prefixed("3C"),
    layout: &NUMBERED_LAYOUT,
    position_error: SINGLE_DISH_ERROR,
};

/// 4C sources are numbered within declination strips: 4C +12.34.
pub static FOURTH_CAMBRIDGE: ZoneCatalog = ZoneCatalog {
    code: "4C",
    name: "Fourth Cambridge Survey of Radio Sources",
    acronym: "4C",
    category: Category::Radio,
    prefix: "4C ",
    separator: '.',
    external: ExternalForm::Prefixed("4C"),
    layout: &ZONED_LAYOUT,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::CatalogEntry;
    use crate::common::CatalogError;

    #[test]
    fn test_3c_number_and_tolerance() {
        let entry = CatalogEntry::construct(&THIRD_CAMBRIDGE, &["273", "55.1"]).unwrap();
        assert_eq!(entry.display_name(), "3C 273");
        assert_eq!(entry.external_name().unwrap(), "3C273");
        assert_eq!(entry.folder_path().unwrap(), vec!["radio", "3C", "200"]);
        assert_eq!(
            entry.position_error(&PositionError::default()),
            PositionError::new(60.0, 180.0)
        );
    }

    #[test]
    fn test_4c_strip_and_number() {
        let entry = CatalogEntry::construct(&FOURTH_CAMBRIDGE, &["+12", "34"]).unwrap();
        assert_eq!(entry.designation(), "+12.34");
        assert_eq!(entry.external_name().unwrap(), "4C+12.34");
        assert_eq!(entry.folder_path().unwrap(), vec!["radio", "4C", "+12", "0"]);
    }

    #[test]
    fn test_nvss_needs_lead() {
        let mut entry = CatalogEntry::empty(&NVSS);
        entry.set_designation("123456+123456");
        assert!(matches!(
            entry.folder_path(),
            Err(CatalogError::MalformedDesignation { .. })
        ));
    }
}
