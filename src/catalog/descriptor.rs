use crate::catalog::strategy;
use crate::common::{CatalogError, Result};
use crate::domain::{Category, FieldRecord, FieldSpec, KeyValueBag, PositionError};

/// Rule set of one catalog: how a raw record becomes a designation and how a
/// designation is named and placed.
///
/// Implementations are stateless and registered once as `&'static` values, so
/// every method must depend only on its arguments.
pub trait CatalogDescriptor: Send + Sync {
    /// Globally unique key, used for registry lookup and persisted entries.
    fn catalog_code(&self) -> &'static str;

    fn catalog_name(&self) -> &'static str;

    /// Short name users type into pickers.
    fn acronym(&self) -> &'static str {
        self.catalog_code()
    }

    fn category(&self) -> Category;

    /// Literal prepended to the designation for display.
    fn name_prefix(&self) -> &'static str {
        ""
    }

    /// Folder alias of the catalog code, second segment of every folder path.
    fn catalog_folder_code(&self) -> String {
        strategy::file_safe(self.catalog_code())
    }

    /// Ordered raw columns of the catalog's published format.
    fn layout(&self) -> &'static [FieldSpec];

    /// Canonical designation built from the key columns.
    fn designation(&self, record: &FieldRecord) -> Result<String>;

    /// Attribute bag in layout order.
    fn attributes(&self, record: &FieldRecord) -> Result<KeyValueBag> {
        Ok(layout_attributes(record, |_, value| value.to_string()))
    }

    /// Designation in VSNET format. Catalogs without a mapping keep the default.
    fn external_name(&self, _designation: &str, _attributes: &KeyValueBag) -> Result<String> {
        Err(CatalogError::NoExternalName {
            catalog: self.catalog_code().to_string(),
        })
    }

    /// Folder segments below `[category folder, catalog folder]`.
    fn hierarchic_folders(&self, designation: &str) -> Result<Vec<String>>;

    /// Leaf (file-level) name of an entry.
    fn star_folder(&self, designation: &str) -> Result<String> {
        strategy::safe_segment(designation)
    }

    /// Catalog-specific matching tolerance; `None` uses the configured defaults.
    fn position_error(&self) -> Option<PositionError> {
        None
    }
}

/// Attribute columns of a record in layout order, blank values skipped.
/// `transform` receives the label and the raw value.
pub fn layout_attributes<F>(record: &FieldRecord, transform: F) -> KeyValueBag
where
    F: Fn(&str, &str) -> String,
{
    let mut bag = KeyValueBag::new();
    for (spec, value) in record.iter().filter(|(spec, _)| !spec.is_key()) {
        bag.push_nonempty(spec.name, &transform(spec.name, value));
    }
    bag
}

/// Summary row for catalog pickers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CatalogSummary {
    pub code: &'static str,
    pub name: &'static str,
    pub acronym: &'static str,
    pub category: Category,
}

impl CatalogSummary {
    pub fn of(descriptor: &dyn CatalogDescriptor) -> Self {
        Self {
            code: descriptor.catalog_code(),
            name: descriptor.catalog_name(),
            acronym: descriptor.acronym(),
            category: descriptor.category(),
        }
    }
}
