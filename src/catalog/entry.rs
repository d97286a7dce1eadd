use std::fmt;

use crate::catalog::descriptor::CatalogDescriptor;
use crate::common::{CatalogError, Result};
use crate::domain::{Accuracy, Category, FieldRecord, KeyValueBag, Position, PositionError};

/// A catalog record in canonical form: designation, attribute bag and
/// position, bound to the descriptor whose rules derive its names and folders.
///
/// Derivations read only the current field state, so an entry rehydrated via
/// [`CatalogEntry::empty`] and the setters behaves exactly like a freshly
/// constructed one.
#[derive(Clone)]
pub struct CatalogEntry {
    descriptor: &'static dyn CatalogDescriptor,
    designation: String,
    attributes: KeyValueBag,
    position: Option<Position>,
    accuracy: Accuracy,
}

impl CatalogEntry {
    /// Entry with no fields set, used for rehydration.
    pub fn empty(descriptor: &'static dyn CatalogDescriptor) -> Self {
        Self {
            descriptor,
            designation: String::new(),
            attributes: KeyValueBag::new(),
            position: None,
            accuracy: Accuracy::default(),
        }
    }

    /// Build an entry from the catalog's ordered raw fields. The position is
    /// left for the caller to set.
    pub fn construct<S: AsRef<str>>(
        descriptor: &'static dyn CatalogDescriptor,
        values: &[S],
    ) -> Result<Self> {
        let record = FieldRecord::bind(descriptor.catalog_code(), descriptor.layout(), values)?;
        let designation = descriptor.designation(&record)?;
        let attributes = descriptor.attributes(&record)?;
        Ok(Self {
            descriptor,
            designation,
            attributes,
            position: None,
            accuracy: Accuracy::default(),
        })
    }

    /// Like [`construct`](Self::construct), with an already parsed position.
    pub fn construct_at<S: AsRef<str>>(
        descriptor: &'static dyn CatalogDescriptor,
        values: &[S],
        position: Position,
        accuracy: Accuracy,
    ) -> Result<Self> {
        let mut entry = Self::construct(descriptor, values)?;
        entry.set_position(position, accuracy);
        Ok(entry)
    }

    pub fn descriptor(&self) -> &'static dyn CatalogDescriptor {
        self.descriptor
    }

    pub fn catalog_code(&self) -> &'static str {
        self.descriptor.catalog_code()
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn attributes(&self) -> &KeyValueBag {
        &self.attributes
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn accuracy(&self) -> Accuracy {
        self.accuracy
    }

    pub fn set_designation(&mut self, designation: impl Into<String>) {
        self.designation = designation.into();
    }

    pub fn set_attributes(&mut self, attributes: KeyValueBag) {
        self.attributes = attributes;
    }

    pub fn set_position(&mut self, position: Position, accuracy: Accuracy) {
        self.position = Some(position);
        self.accuracy = accuracy;
    }

    pub fn category(&self) -> Category {
        self.descriptor.category()
    }

    /// Designation with the catalog's display prefix.
    pub fn display_name(&self) -> String {
        format!("{}{}", self.descriptor.name_prefix(), self.designation)
    }

    pub fn external_name(&self) -> Result<String> {
        self.derivable()?;
        self.descriptor
            .external_name(&self.designation, &self.attributes)
    }

    /// `[category folder, catalog folder, catalog-specific segments...]`.
    pub fn folder_path(&self) -> Result<Vec<String>> {
        self.derivable()?;
        let mut path = vec![
            self.category().folder_name().to_string(),
            self.descriptor.catalog_folder_code(),
        ];
        path.extend(self.descriptor.hierarchic_folders(&self.designation)?);
        Ok(path)
    }

    pub fn star_folder(&self) -> Result<String> {
        self.derivable()?;
        self.descriptor.star_folder(&self.designation)
    }

    pub fn position_error(&self, defaults: &PositionError) -> PositionError {
        self.descriptor.position_error().unwrap_or(*defaults)
    }

    fn derivable(&self) -> Result<()> {
        if self.designation.trim().is_empty() {
            return Err(CatalogError::malformed(&self.designation, "empty designation"));
        }
        Ok(())
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("catalog", &self.descriptor.catalog_code())
            .field("designation", &self.designation)
            .field("attributes", &self.attributes)
            .field("position", &self.position)
            .field("accuracy", &self.accuracy)
            .finish()
    }
}

impl PartialEq for CatalogEntry {
    fn eq(&self, other: &Self) -> bool {
        self.catalog_code() == other.catalog_code()
            && self.designation == other.designation
            && self.attributes == other.attributes
            && self.position == other.position
            && self.accuracy == other.accuracy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalogs::others::A64;
    use crate::catalog::catalogs::star::HIP;
    use crate::catalog::catalogs::xray::ROSAT_BRIGHT;

    #[test]
    fn test_construct_populates_designation_and_attributes() {
        let entry = CatalogEntry::construct(&A64, &["AB", "01", "12.3", "G5"]).unwrap();
        assert_eq!(entry.designation(), "AB 01");
        assert_eq!(entry.display_name(), "[A64] AB 01");
        let labels: Vec<&str> = entry.attributes().keys().collect();
        assert_eq!(labels, vec!["Mag(V)", "Spectrum"]);
        assert!(entry.position().is_none());
    }

    #[test]
    fn test_empty_entry_refuses_to_derive() {
        let entry = CatalogEntry::empty(&HIP);
        assert!(matches!(
            entry.folder_path(),
            Err(CatalogError::MalformedDesignation { .. })
        ));
        assert!(entry.star_folder().is_err());
    }

    #[test]
    fn test_populated_empty_entry_matches_constructed() {
        let constructed = CatalogEntry::construct(&HIP, &["71683", "-0.01"]).unwrap();
        let mut rehydrated = CatalogEntry::empty(&HIP);
        rehydrated.set_designation(constructed.designation());
        rehydrated.set_attributes(constructed.attributes().clone());

        assert_eq!(rehydrated, constructed);
        assert_eq!(rehydrated.folder_path().unwrap(), constructed.folder_path().unwrap());
        assert_eq!(
            rehydrated.external_name().unwrap(),
            constructed.external_name().unwrap()
        );
    }

    #[test]
    fn test_position_error_override_and_default() {
        let defaults = PositionError::default();
        let hip = CatalogEntry::construct(&HIP, &["1"]).unwrap();
        assert_eq!(hip.position_error(&defaults), defaults);

        let rosat = CatalogEntry::construct(&ROSAT_BRIGHT, &["123456.7", "+123456"]).unwrap();
        assert_eq!(rosat.position_error(&defaults), PositionError::new(15.0, 60.0));
    }
}
