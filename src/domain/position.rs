use serde::{Deserialize, Serialize};

/// Equatorial position as handed over by the coordinate parser, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub ra_deg: f64,
    pub dec_deg: f64,
}

impl Position {
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        Self { ra_deg, dec_deg }
    }
}

/// Precision tier of a stored coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accuracy {
    Arcminute,
    TenthArcminute,
    #[default]
    Arcsecond,
    /// 100 milliarcseconds.
    TenthArcsecond,
    HundredthArcsecond,
    Milliarcsecond,
}

/// Cross-matching tolerance of a catalog, in arcseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionError {
    pub typical_arcsec: f64,
    pub max_arcsec: f64,
}

impl PositionError {
    pub const fn new(typical_arcsec: f64, max_arcsec: f64) -> Self {
        Self {
            typical_arcsec,
            max_arcsec,
        }
    }
}

impl Default for PositionError {
    fn default() -> Self {
        Self::new(5.0, 15.0)
    }
}
