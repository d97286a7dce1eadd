//! Generic stored form of a catalog entry.
//!
//! Only the canonical fields are stored. Names and folders are derived again
//! after loading, through the catalog's descriptor.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogEntry, DescriptorRegistry};
use crate::common::Result;
use crate::domain::{Accuracy, KeyValueBag, Position};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedEntry {
    pub catalog: String,
    pub designation: String,
    #[serde(default)]
    pub attributes: KeyValueBag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default)]
    pub accuracy: Accuracy,
}

impl PersistedEntry {
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            catalog: entry.catalog_code().to_string(),
            designation: entry.designation().to_string(),
            attributes: entry.attributes().clone(),
            position: entry.position(),
            accuracy: entry.accuracy(),
        }
    }

    /// Rebuild the entry: empty instance from the registry, then the stored
    /// fields.
    pub fn rehydrate(&self, registry: &DescriptorRegistry) -> Result<CatalogEntry> {
        let mut entry = registry.instantiate_empty(&self.catalog)?;
        entry.set_designation(self.designation.clone());
        entry.set_attributes(self.attributes.clone());
        if let Some(position) = self.position {
            entry.set_position(position, self.accuracy);
        }
        Ok(entry)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::CatalogError;
    use serde_json::json;

    #[test]
    fn test_rehydrated_entry_derives_the_same() {
        let registry = DescriptorRegistry::builtin();
        let original = registry
            .construct("GCVS", &["SS", "Cyg", "UGSS", "7.7", "12.4"])
            .unwrap();
        let stored = PersistedEntry::from_entry(&original).to_json().unwrap();
        let restored = PersistedEntry::from_json(&stored)
            .unwrap()
            .rehydrate(registry)
            .unwrap();

        assert_eq!(restored, original);
        assert_eq!(restored.folder_path().unwrap(), original.folder_path().unwrap());
        assert_eq!(restored.external_name().unwrap(), original.external_name().unwrap());
    }

    #[test]
    fn test_json_shape() {
        let mut entry = DescriptorRegistry::builtin()
            .construct("HIP", &["71683", "-0.01"])
            .unwrap();
        entry.set_position(Position::new(219.9, -60.83), Accuracy::TenthArcsecond);

        let value: serde_json::Value =
            serde_json::from_str(&PersistedEntry::from_entry(&entry).to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "catalog": "HIP",
                "designation": "71683",
                "attributes": [{"key": "Mag(V)", "value": "-0.01"}],
                "position": {"ra_deg": 219.9, "dec_deg": -60.83},
                "accuracy": "tenth_arcsecond"
            })
        );
    }

    #[test]
    fn test_unknown_catalog_is_not_rehydrated() {
        let stored = PersistedEntry::from_json(r#"{"catalog":"GONE","designation":"1"}"#).unwrap();
        assert!(matches!(
            stored.rehydrate(DescriptorRegistry::builtin()),
            Err(CatalogError::UnknownCatalog { .. })
        ));
    }
}
