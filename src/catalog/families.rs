//! Parameterized descriptors for catalogs whose rules only differ in
//! literals and widths. Each catalog of a family is a `static` instance.

use crate::catalog::descriptor::CatalogDescriptor;
use crate::catalog::strategy::{self, SIGNS};
use crate::common::constants::field;
use crate::common::{CatalogError, Result};
use crate::domain::{Category, FieldRecord, FieldSpec, KeyValueBag, PositionError};

/// How a family catalog writes its designations for VSNET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalForm {
    None,
    /// Prefix followed by the designation.
    Prefixed(&'static str),
    /// Prefix followed by the designation with spaces removed.
    Compact(&'static str),
    /// Prefix followed by the designation with spaces turned into dots.
    Dotted(&'static str),
    /// Prefix followed by the leading number padded to three digits.
    Padded(&'static str),
}

impl ExternalForm {
    pub fn render(&self, catalog: &str, designation: &str) -> Result<String> {
        match self {
            ExternalForm::None => Err(CatalogError::NoExternalName {
                catalog: catalog.to_string(),
            }),
            ExternalForm::Prefixed(p) => Ok(format!("{}{}", p, designation)),
            ExternalForm::Compact(p) => Ok(format!("{}{}", p, designation.replace(' ', ""))),
            ExternalForm::Dotted(p) => Ok(format!("{}{}", p, designation.replace(' ', "."))),
            ExternalForm::Padded(p) => {
                let number = strategy::leading_integer(designation)?;
                Ok(format!(
                    "{}{}{}",
                    p,
                    strategy::pad_to_three(number),
                    strategy::after_leading_digits(designation)
                ))
            }
        }
    }
}

/// Catalog identified by a running number: HIP 71683, NGC 224, UGC 12158.
#[derive(Debug)]
pub struct NumberedCatalog {
    pub code: &'static str,
    pub name: &'static str,
    pub acronym: &'static str,
    pub category: Category,
    pub prefix: &'static str,
    pub external: ExternalForm,
    pub layout: &'static [FieldSpec],
    pub position_error: Option<PositionError>,
}

impl CatalogDescriptor for NumberedCatalog {
    fn catalog_code(&self) -> &'static str {
        self.code
    }

    fn catalog_name(&self) -> &'static str {
        self.name
    }

    fn acronym(&self) -> &'static str {
        self.acronym
    }

    fn category(&self) -> Category {
        self.category
    }

    fn name_prefix(&self) -> &'static str {
        self.prefix
    }

    fn layout(&self) -> &'static [FieldSpec] {
        self.layout
    }

    fn designation(&self, record: &FieldRecord) -> Result<String> {
        Ok(record.get(field::NUMBER)?.to_string())
    }

    fn external_name(&self, designation: &str, _attributes: &KeyValueBag) -> Result<String> {
        strategy::leading_integer(designation)?;
        self.external.render(self.code, designation)
    }

    fn hierarchic_folders(&self, designation: &str) -> Result<Vec<String>> {
        Ok(vec![strategy::leading_century(designation)?])
    }

    fn position_error(&self) -> Option<PositionError> {
        self.position_error
    }
}

/// Catalog whose names encode the sky position, e.g. 1RXS J123456.7+123456
/// or IRAS 12345+1234. The designation is `lead + ra_code + dec_code`.
#[derive(Debug)]
pub struct SkyCodedCatalog {
    pub code: &'static str,
    pub name: &'static str,
    pub acronym: &'static str,
    pub category: Category,
    pub prefix: &'static str,
    /// Literal between the prefix and the coordinates ("J", "F", "G" or "").
    pub lead: &'static str,
    /// Characters of the right ascension (or longitude) used as first bucket.
    pub head_width: usize,
    /// Characters of the declination bucket, sign included.
    pub sign_width: usize,
    pub external: ExternalForm,
    pub layout: &'static [FieldSpec],
    pub position_error: Option<PositionError>,
}

impl CatalogDescriptor for SkyCodedCatalog {
    fn catalog_code(&self) -> &'static str {
        self.code
    }

    fn catalog_name(&self) -> &'static str {
        self.name
    }

    fn acronym(&self) -> &'static str {
        self.acronym
    }

    fn category(&self) -> Category {
        self.category
    }

    fn name_prefix(&self) -> &'static str {
        self.prefix
    }

    fn layout(&self) -> &'static [FieldSpec] {
        self.layout
    }

    fn designation(&self, record: &FieldRecord) -> Result<String> {
        Ok(format!(
            "{}{}{}",
            self.lead,
            record.get(field::RA_CODE)?,
            record.get(field::DEC_CODE)?
        ))
    }

    fn external_name(&self, designation: &str, _attributes: &KeyValueBag) -> Result<String> {
        self.external.render(self.code, designation)
    }

    fn hierarchic_folders(&self, designation: &str) -> Result<Vec<String>> {
        let coded = strategy::strip_required_prefix(designation, self.lead)?;
        let head = strategy::prefix(coded, self.head_width)?;
        strategy::digits(&head)?;
        let sign = strategy::marker_window(coded, SIGNS, 0, self.sign_width)?;
        Ok(vec![head, sign])
    }

    fn star_folder(&self, designation: &str) -> Result<String> {
        let coded = strategy::strip_required_prefix(designation, self.lead)?;
        Ok(strategy::substitute(coded, &[(':', '-')]))
    }

    fn position_error(&self) -> Option<PositionError> {
        self.position_error
    }
}

/// Catalog numbered within declination zones: BD +12 1234, 4C +12.34.
/// The designation is `zone + separator + number`, the zone carrying its sign.
#[derive(Debug)]
pub struct ZoneCatalog {
    pub code: &'static str,
    pub name: &'static str,
    pub acronym: &'static str,
    pub category: Category,
    pub prefix: &'static str,
    pub separator: char,
    pub external: ExternalForm,
    pub layout: &'static [FieldSpec],
}

impl CatalogDescriptor for ZoneCatalog {
    fn catalog_code(&self) -> &'static str {
        self.code
    }

    fn catalog_name(&self) -> &'static str {
        self.name
    }

    fn acronym(&self) -> &'static str {
        self.acronym
    }

    fn category(&self) -> Category {
        self.category
    }

    fn name_prefix(&self) -> &'static str {
        self.prefix
    }

    fn layout(&self) -> &'static [FieldSpec] {
        self.layout
    }

    fn designation(&self, record: &FieldRecord) -> Result<String> {
        Ok(format!(
            "{}{}{}",
            record.get(field::ZONE)?,
            self.separator,
            record.get(field::NUMBER)?
        ))
    }

    fn external_name(&self, designation: &str, _attributes: &KeyValueBag) -> Result<String> {
        self.external.render(self.code, designation)
    }

    fn hierarchic_folders(&self, designation: &str) -> Result<Vec<String>> {
        let (zone, number) = strategy::split_at_marker(designation, &[self.separator])?;
        let zone_bucket = strategy::marker_window(zone, SIGNS, 0, 3)?;
        Ok(vec![zone_bucket, strategy::trailing_century(number)?])
    }

    fn star_folder(&self, designation: &str) -> Result<String> {
        strategy::safe_segment(designation)
    }
}

/// Second bucket a [`FieldCatalog`] derives from the number part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberSegment {
    Omitted,
    Century,
    Prefix(usize),
}

/// Catalog numbered within survey fields or plates: [A64] AB 01,
/// BPS CS 22892-052, LP 123-45. The designation is `field + separator + number`.
#[derive(Debug)]
pub struct FieldCatalog {
    pub code: &'static str,
    pub name: &'static str,
    pub acronym: &'static str,
    pub category: Category,
    pub prefix: &'static str,
    pub separator: char,
    pub number_segment: NumberSegment,
    pub external: ExternalForm,
    pub layout: &'static [FieldSpec],
}

impl CatalogDescriptor for FieldCatalog {
    fn catalog_code(&self) -> &'static str {
        self.code
    }

    fn catalog_name(&self) -> &'static str {
        self.name
    }

    fn acronym(&self) -> &'static str {
        self.acronym
    }

    fn category(&self) -> Category {
        self.category
    }

    fn name_prefix(&self) -> &'static str {
        self.prefix
    }

    fn layout(&self) -> &'static [FieldSpec] {
        self.layout
    }

    fn designation(&self, record: &FieldRecord) -> Result<String> {
        Ok(format!(
            "{}{}{}",
            record.key(0)?,
            self.separator,
            record.key(1)?
        ))
    }

    fn external_name(&self, designation: &str, _attributes: &KeyValueBag) -> Result<String> {
        self.external.render(self.code, designation)
    }

    fn hierarchic_folders(&self, designation: &str) -> Result<Vec<String>> {
        let (field_part, number) = strategy::split_at_marker(designation, &[self.separator])?;
        if field_part.is_empty() {
            return Err(CatalogError::malformed(designation, "empty field part"));
        }
        let mut folders = vec![strategy::safe_segment(field_part)?];
        match self.number_segment {
            NumberSegment::Omitted => {}
            NumberSegment::Century => folders.push(strategy::leading_century(number)?),
            NumberSegment::Prefix(n) => folders.push(strategy::prefix(number, n)?),
        }
        Ok(folders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::constants::label;

    static NUMBER_ONLY: [FieldSpec; 2] = [
        FieldSpec::key(field::NUMBER),
        FieldSpec::attribute(label::MAG_V),
    ];

    static CODED: [FieldSpec; 2] = [FieldSpec::key(field::RA_CODE), FieldSpec::key(field::DEC_CODE)];

    static ZONED: [FieldSpec; 2] = [FieldSpec::key(field::ZONE), FieldSpec::key(field::NUMBER)];

    static TEST_NUMBERED: NumberedCatalog = NumberedCatalog {
        code: "TN",
        name: "Test Numbered",
        acronym: "TN",
        category: Category::Others,
        prefix: "TN ",
        external: ExternalForm::Padded("TN"),
        layout: &NUMBER_ONLY,
        position_error: None,
    };

    static TEST_CODED: SkyCodedCatalog = SkyCodedCatalog {
        code: "TC",
        name: "Test Coded",
        acronym: "TC",
        category: Category::XRay,
        prefix: "TC ",
        lead: "J",
        head_width: 2,
        sign_width: 3,
        external: ExternalForm::Prefixed("TC "),
        layout: &CODED,
        position_error: None,
    };

    static TEST_ZONE: ZoneCatalog = ZoneCatalog {
        code: "TZ",
        name: "Test Zone",
        acronym: "TZ",
        category: Category::Star,
        prefix: "TZ",
        separator: ' ',
        external: ExternalForm::Dotted("TZ"),
        layout: &ZONED,
    };

    fn record(layout: &'static [FieldSpec], values: &[&str]) -> FieldRecord {
        FieldRecord::bind("test", layout, values).unwrap()
    }

    #[test]
    fn test_external_forms() {
        assert_eq!(ExternalForm::Prefixed("NGC").render("NGC", "224").unwrap(), "NGC224");
        assert_eq!(ExternalForm::Compact("BPS").render("BPS", "CS 22892-052").unwrap(), "BPSCS22892-052");
        assert_eq!(ExternalForm::Dotted("BD").render("BD", "+12 1234").unwrap(), "BD+12.1234");
        assert_eq!(ExternalForm::Padded("M").render("M", "7").unwrap(), "M007");
        assert_eq!(ExternalForm::Padded("Cr").render("Cr", "42a").unwrap(), "Cr042a");
        assert!(matches!(
            ExternalForm::None.render("USNO", "0900-1").unwrap_err(),
            CatalogError::NoExternalName { .. }
        ));
    }

    #[test]
    fn test_numbered_buckets_by_hundred() {
        let designation = TEST_NUMBERED.designation(&record(&NUMBER_ONLY, &["1234"])).unwrap();
        assert_eq!(designation, "1234");
        assert_eq!(TEST_NUMBERED.hierarchic_folders(&designation).unwrap(), vec!["1200"]);
        assert_eq!(TEST_NUMBERED.hierarchic_folders("99").unwrap(), vec!["0"]);
        assert!(TEST_NUMBERED.hierarchic_folders("X99").is_err());
    }

    #[test]
    fn test_sky_coded_buckets() {
        let designation = TEST_CODED
            .designation(&record(&CODED, &["123456", "+001234"]))
            .unwrap();
        assert_eq!(designation, "J123456+001234");
        assert_eq!(
            TEST_CODED.hierarchic_folders(&designation).unwrap(),
            vec!["12", "+00"]
        );
        assert_eq!(TEST_CODED.star_folder("J12:34:56+00").unwrap(), "12-34-56+00");
    }

    #[test]
    fn test_sky_coded_fails_fast() {
        // missing lead
        assert!(TEST_CODED.hierarchic_folders("123456+001234").is_err());
        // missing declination sign
        assert!(TEST_CODED.hierarchic_folders("J123456001234").is_err());
        // non-numeric hour
        assert!(TEST_CODED.hierarchic_folders("JAB3456+001234").is_err());
    }

    #[test]
    fn test_zone_buckets() {
        let designation = TEST_ZONE.designation(&record(&ZONED, &["-05", "1234"])).unwrap();
        assert_eq!(designation, "-05 1234");
        assert_eq!(
            TEST_ZONE.hierarchic_folders(&designation).unwrap(),
            vec!["-05", "1200"]
        );
        assert_eq!(TEST_ZONE.star_folder(&designation).unwrap(), "-05_1234");
        assert!(TEST_ZONE.hierarchic_folders("05 1234").is_err());
    }
}
