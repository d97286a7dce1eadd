/// Attribute labels used in the key-value bag of catalog entries.
/// Labels are part of the display contract, so every descriptor uses these
/// constants instead of spelling the strings out.
pub mod label {
    pub const MAG_V: &str = "Mag(V)";
    pub const MAG_B: &str = "Mag(B)";
    pub const MAG_R: &str = "Mag(R)";
    pub const MAG_J: &str = "Mag(J)";
    pub const MAG_H: &str = "Mag(H)";
    pub const MAG_K: &str = "Mag(K)";
    pub const MAG_BT: &str = "Mag(BT)";
    pub const MAG_VT: &str = "Mag(VT)";
    pub const MAG_PG: &str = "Mag(pg)";
    pub const MAX: &str = "Max";
    pub const MIN: &str = "Min";
    pub const TYPE: &str = "Type";
    pub const PERIOD: &str = "Period";
    pub const SPECTRUM: &str = "Spectrum";
    pub const COLOR_BV: &str = "B-V";
    pub const REDSHIFT: &str = "z";
    pub const COUNT_RATE: &str = "Count Rate";
    pub const HARDNESS: &str = "HR1";
    pub const FLUX: &str = "Flux";
    pub const FLUX_12: &str = "F12";
    pub const FLUX_25: &str = "F25";
    pub const FLUX_60: &str = "F60";
    pub const FLUX_100: &str = "F100";
    pub const FLUX_1400: &str = "S1.4GHz";
    pub const SIZE: &str = "Size";
    pub const MORPHOLOGY: &str = "Morphology";
    pub const PROPER_MOTION: &str = "PM";
    pub const REMARKS: &str = "Remarks";
    pub const IBVS: &str = "IBVS";
    pub const VSNET_NAME: &str = "VSNET-Name";
}

/// Names of the key columns catalogs use to build designations.
pub mod field {
    pub const NUMBER: &str = "number";
    pub const NAME: &str = "name";
    pub const RA_CODE: &str = "ra_code";
    pub const DEC_CODE: &str = "dec_code";
    pub const ZONE: &str = "zone";
    pub const FIELD: &str = "field";
    pub const AREA: &str = "area";
    pub const PLATE: &str = "plate";
    pub const SURVEY: &str = "survey";
    pub const REGION: &str = "region";
    pub const COMPONENT: &str = "component";
    pub const VARIABLE: &str = "variable";
    pub const CONSTELLATION: &str = "constellation";
    pub const GLON: &str = "glon";
    pub const GLAT: &str = "glat";
    pub const SEQUENCE: &str = "sequence";
    pub const IDENTIFIER: &str = "identifier";
}

/// Literal prefix of IBVS cross-references as they appear in raw catalog columns.
pub const IBVS_PREFIX: &str = "IBVS";

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "SKY_CATALOG_CONFIG";

/// Configuration file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "catalog.toml";
