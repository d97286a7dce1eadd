use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::constants::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
use crate::common::{CatalogError, Result};
use crate::domain::PositionError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Matching tolerance for catalogs that do not declare their own.
    pub position_error: PositionError,
    pub logging: LoggingConfig,
    pub ingest: IngestConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: PathBuf,
    pub file_name: String,
    /// Filter used when `RUST_LOG` is not set.
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            file_name: "sky_catalog.log".to_string(),
            default_filter: "sky_catalog=info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub parallel: bool,
    /// Worker threads for parallel ingestion; rayon's default when unset.
    pub threads: Option<usize>,
}

impl Config {
    /// Load from `SKY_CATALOG_CONFIG`, else `catalog.toml` in the working
    /// directory, else built-in defaults.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load_from(path);
        }
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return Self::load_from(default_path);
        }
        Ok(Self::default())
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let pe = &self.position_error;
        if pe.typical_arcsec <= 0.0 || pe.max_arcsec < pe.typical_arcsec {
            return Err(CatalogError::Config(format!(
                "position_error needs 0 < typical ({}) <= max ({})",
                pe.typical_arcsec, pe.max_arcsec
            )));
        }
        if self.ingest.threads == Some(0) {
            return Err(CatalogError::Config("ingest.threads must be positive".to_string()));
        }
        Ok(())
    }
}
