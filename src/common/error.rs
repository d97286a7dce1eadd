use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown catalog: {code}")]
    UnknownCatalog { code: String },

    #[error("Malformed designation '{designation}': {reason}")]
    MalformedDesignation { designation: String, reason: String },

    #[error("Missing override attribute: {key}")]
    MissingOverrideAttribute { key: String },

    #[error("No external name mapping for catalog {catalog}")]
    NoExternalName { catalog: String },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Catalog {catalog} takes at most {expected} fields, got {actual}")]
    TooManyFields {
        catalog: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate catalog registration: {0}")]
    DuplicateRegistration(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input at line {line}: {reason}")]
    InvalidInput { line: usize, reason: String },

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    pub(crate) fn malformed(designation: &str, reason: impl Into<String>) -> Self {
        CatalogError::MalformedDesignation {
            designation: designation.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether an ingestion loop should skip the record instead of rejecting it.
    pub fn is_skippable(&self) -> bool {
        matches!(self, CatalogError::UnknownCatalog { .. })
    }

    /// Short stable label used for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::UnknownCatalog { .. } => "unknown_catalog",
            CatalogError::MalformedDesignation { .. } => "malformed_designation",
            CatalogError::MissingOverrideAttribute { .. } => "missing_override_attribute",
            CatalogError::NoExternalName { .. } => "no_external_name",
            CatalogError::MissingField(_) => "missing_field",
            CatalogError::TooManyFields { .. } => "too_many_fields",
            CatalogError::DuplicateRegistration(_) => "duplicate_registration",
            CatalogError::Config(_) => "config",
            CatalogError::InvalidInput { .. } => "invalid_input",
            CatalogError::Json(_) => "json",
            CatalogError::Toml(_) => "toml",
            CatalogError::Io(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_unknown_catalog_is_skippable() {
        let unknown = CatalogError::UnknownCatalog { code: "XYZ".to_string() };
        assert!(unknown.is_skippable());

        let malformed = CatalogError::malformed("J12", "missing declination sign");
        assert!(!malformed.is_skippable());
        assert_eq!(malformed.kind(), "malformed_designation");
    }

    #[test]
    fn test_malformed_message_names_designation() {
        let err = CatalogError::malformed("ABC", "no digits");
        assert_eq!(err.to_string(), "Malformed designation 'ABC': no digits");
    }
}
