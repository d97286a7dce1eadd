// Common constants and the error type shared across the crate

pub mod constants;
pub mod error;

pub use error::{CatalogError, Result};
