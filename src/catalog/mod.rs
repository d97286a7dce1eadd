//! Catalog descriptors and the registry that resolves them.

pub mod catalogs;
pub mod descriptor;
pub mod entry;
pub mod families;
pub mod registry;
pub mod strategy;

pub use descriptor::{CatalogDescriptor, CatalogSummary};
pub use entry::CatalogEntry;
pub use registry::DescriptorRegistry;
