use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::{debug, info};

use super::catalogs::BUILTIN;
use super::descriptor::{CatalogDescriptor, CatalogSummary};
use super::entry::CatalogEntry;
use crate::common::{CatalogError, Result};
use crate::domain::Category;
use crate::metrics::registry::RegistryMetrics;

static BUILTIN_REGISTRY: Lazy<DescriptorRegistry> = Lazy::new(|| {
    match DescriptorRegistry::from_descriptors(BUILTIN.iter().copied()) {
        Ok(registry) => registry,
        Err(e) => panic!("built-in catalog table is inconsistent: {}", e),
    }
});

/// Lookup table from catalog code to descriptor.
pub struct DescriptorRegistry {
    descriptors: Vec<&'static dyn CatalogDescriptor>,
    by_code: HashMap<&'static str, usize>,
    by_acronym: HashMap<String, usize>,
}

impl DescriptorRegistry {
    /// Build a registry, keeping registration order. Codes must be unique and
    /// acronyms unique ignoring case.
    pub fn from_descriptors<I>(descriptors: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'static dyn CatalogDescriptor>,
    {
        let mut registry = Self {
            descriptors: Vec::new(),
            by_code: HashMap::new(),
            by_acronym: HashMap::new(),
        };
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }
        info!(catalogs = registry.len(), "catalog registry built");
        Ok(registry)
    }

    /// Process-wide registry of the compiled-in catalogs.
    pub fn builtin() -> &'static DescriptorRegistry {
        &BUILTIN_REGISTRY
    }

    fn register(&mut self, descriptor: &'static dyn CatalogDescriptor) -> Result<()> {
        let code = descriptor.catalog_code();
        if self.by_code.contains_key(code) {
            return Err(CatalogError::DuplicateRegistration(format!(
                "catalog code '{}'",
                code
            )));
        }
        let acronym = descriptor.acronym().to_lowercase();
        if self.by_acronym.contains_key(&acronym) {
            return Err(CatalogError::DuplicateRegistration(format!(
                "acronym '{}' of catalog '{}'",
                descriptor.acronym(),
                code
            )));
        }

        let index = self.descriptors.len();
        self.descriptors.push(descriptor);
        self.by_code.insert(code, index);
        self.by_acronym.insert(acronym, index);
        Ok(())
    }

    /// Descriptor registered under an exact catalog code.
    pub fn resolve(&self, code: &str) -> Result<&'static dyn CatalogDescriptor> {
        match self.by_code.get(code) {
            Some(&index) => Ok(self.descriptors[index]),
            None => {
                RegistryMetrics::record_lookup_miss("code");
                debug!(code, "no catalog registered for code");
                Err(CatalogError::UnknownCatalog {
                    code: code.to_string(),
                })
            }
        }
    }

    /// Descriptor for a user-typed acronym, trimmed and matched ignoring case.
    pub fn resolve_acronym(&self, acronym: &str) -> Result<&'static dyn CatalogDescriptor> {
        let key = acronym.trim().to_lowercase();
        match self.by_acronym.get(&key) {
            Some(&index) => Ok(self.descriptors[index]),
            None => {
                RegistryMetrics::record_lookup_miss("acronym");
                debug!(acronym, "no catalog registered for acronym");
                Err(CatalogError::UnknownCatalog {
                    code: acronym.to_string(),
                })
            }
        }
    }

    /// Entry with no fields set, ready to be populated from a persisted form.
    pub fn instantiate_empty(&self, code: &str) -> Result<CatalogEntry> {
        Ok(CatalogEntry::empty(self.resolve(code)?))
    }

    /// Resolve the catalog and build an entry from its raw ordered fields.
    pub fn construct<S: AsRef<str>>(&self, code: &str, values: &[S]) -> Result<CatalogEntry> {
        CatalogEntry::construct(self.resolve(code)?, values)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &'static dyn CatalogDescriptor> + '_ {
        self.descriptors.iter().copied()
    }

    pub fn summaries(&self) -> Vec<CatalogSummary> {
        self.descriptors().map(CatalogSummary::of).collect()
    }

    pub fn in_category(&self, category: Category) -> Vec<&'static dyn CatalogDescriptor> {
        self.descriptors()
            .filter(|d| d.category() == category)
            .collect()
    }
}
