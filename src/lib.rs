pub mod catalog;
pub mod common;
pub mod config;
pub mod domain;
pub mod logging;
pub mod metrics;
pub mod pipeline;

pub use catalog::{CatalogDescriptor, CatalogEntry, CatalogSummary, DescriptorRegistry};
pub use common::{CatalogError, Result};
