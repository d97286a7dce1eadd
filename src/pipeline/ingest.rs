//! Batch ingestion: turn raw catalog records into placed entries.
//!
//! One bad record never aborts a batch. Records naming an unknown catalog are
//! skipped; any other failure rejects that record only. The report lists
//! outcomes in input order whether or not the batch ran in parallel.

use std::io::BufRead;
use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::{CatalogEntry, DescriptorRegistry};
use crate::common::{CatalogError, Result};
use crate::domain::{Accuracy, Category, Position, PositionError};
use crate::metrics::IngestMetrics;

/// One input line: a catalog code and its raw fields in layout order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub catalog: String,
    pub fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<Accuracy>,
}

/// Everything derived for one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub index: usize,
    pub catalog: String,
    pub designation: String,
    pub display_name: String,
    /// `None` when VSNET has no naming convention for the catalog.
    pub external_name: Option<String>,
    pub category: Category,
    pub folder_path: Vec<String>,
    pub star_folder: String,
    pub position_error: PositionError,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skipped {
    pub index: usize,
    pub catalog: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rejected {
    pub index: usize,
    pub catalog: String,
    pub kind: &'static str,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngestReport {
    pub placed: Vec<Placement>,
    pub skipped: Vec<Skipped>,
    pub rejected: Vec<Rejected>,
}

impl IngestReport {
    pub fn total(&self) -> usize {
        self.placed.len() + self.skipped.len() + self.rejected.len()
    }
}

pub struct Ingestor<'a> {
    registry: &'a DescriptorRegistry,
    defaults: PositionError,
    parallel: bool,
    threads: Option<usize>,
}

impl<'a> Ingestor<'a> {
    pub fn new(registry: &'a DescriptorRegistry) -> Self {
        Self {
            registry,
            defaults: PositionError::default(),
            parallel: false,
            threads: None,
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Dedicated worker count for parallel runs; the global rayon pool is used
    /// when unset.
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    /// Tolerance reported for catalogs without their own.
    pub fn with_defaults(mut self, defaults: PositionError) -> Self {
        self.defaults = defaults;
        self
    }

    /// Resolve, construct and derive one record.
    pub fn place(&self, index: usize, record: &RawRecord) -> Result<Placement> {
        let descriptor = self.registry.resolve(&record.catalog)?;
        let mut entry = CatalogEntry::construct(descriptor, &record.fields)?;
        if let Some(position) = record.position {
            entry.set_position(position, record.accuracy.unwrap_or_default());
        }

        let external_name = match entry.external_name() {
            Ok(name) => Some(name),
            Err(CatalogError::NoExternalName { .. }) => None,
            Err(e) => return Err(e),
        };

        Ok(Placement {
            index,
            catalog: descriptor.catalog_code().to_string(),
            designation: entry.designation().to_string(),
            display_name: entry.display_name(),
            external_name,
            category: entry.category(),
            folder_path: entry.folder_path()?,
            star_folder: entry.star_folder()?,
            position_error: entry.position_error(&self.defaults),
        })
    }

    pub fn run(&self, records: &[RawRecord]) -> Result<IngestReport> {
        let started = Instant::now();
        let outcomes = if self.parallel {
            self.place_parallel(records)?
        } else {
            records
                .iter()
                .enumerate()
                .map(|(i, r)| self.place(i, r))
                .collect()
        };

        let mut report = IngestReport::default();
        for (index, (record, outcome)) in records.iter().zip(outcomes).enumerate() {
            match outcome {
                Ok(placement) => {
                    IngestMetrics::record_placed(placement.category);
                    report.placed.push(placement);
                }
                Err(e) if e.is_skippable() => {
                    IngestMetrics::record_skipped();
                    debug!(index, catalog = %record.catalog, "skipping record of unknown catalog");
                    report.skipped.push(Skipped {
                        index,
                        catalog: record.catalog.clone(),
                    });
                }
                Err(e) => {
                    IngestMetrics::record_rejected(e.kind());
                    warn!(index, catalog = %record.catalog, error = %e, "rejected record");
                    report.rejected.push(Rejected {
                        index,
                        catalog: record.catalog.clone(),
                        kind: e.kind(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let elapsed = started.elapsed().as_secs_f64();
        IngestMetrics::record_batch(records.len(), elapsed);
        info!(
            placed = report.placed.len(),
            skipped = report.skipped.len(),
            rejected = report.rejected.len(),
            parallel = self.parallel,
            elapsed_secs = elapsed,
            "ingestion batch finished"
        );
        Ok(report)
    }

    fn place_parallel(&self, records: &[RawRecord]) -> Result<Vec<Result<Placement>>> {
        let place_all = || {
            records
                .par_iter()
                .enumerate()
                .map(|(i, r)| self.place(i, r))
                .collect::<Vec<_>>()
        };
        match self.threads {
            Some(threads) => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("ingest-{i}"))
                    .build()
                    .map_err(|e| CatalogError::Config(format!("ingest thread pool: {}", e)))?;
                Ok(pool.install(place_all))
            }
            None => Ok(place_all()),
        }
    }
}

/// Parse JSON-lines input. Blank lines are ignored; a malformed line fails the
/// whole read with its line number.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|e| CatalogError::InvalidInput {
            line: number + 1,
            reason: e.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn raw(catalog: &str, fields: &[&str]) -> RawRecord {
        RawRecord {
            catalog: catalog.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
            position: None,
            accuracy: None,
        }
    }

    fn batch() -> Vec<RawRecord> {
        vec![
            raw("[A64]", &["AB", "01", "12.3", "G5"]),
            raw("NOT-A-CATALOG", &["1"]),
            raw("USNO-A2.0", &["0900", "01234567"]),
            raw("1RXS", &["123456.7", "123456"]),
            raw("HIP", &["71683"]),
        ]
    }

    #[test]
    fn test_place_derives_everything() {
        let ingestor = Ingestor::new(DescriptorRegistry::builtin());
        let placement = ingestor
            .place(0, &raw("[A64]", &["AB", "01", "12.3", "G5"]))
            .unwrap();
        assert_eq!(placement.designation, "AB 01");
        assert_eq!(placement.display_name, "[A64] AB 01");
        assert_eq!(placement.external_name.as_deref(), Some("[A64]AB.01"));
        assert_eq!(placement.folder_path, vec!["others", "[A64]", "AB"]);
        assert_eq!(placement.star_folder, "AB_01");
        assert_eq!(placement.position_error, PositionError::default());
    }

    #[test]
    fn test_run_sorts_outcomes() {
        let report = Ingestor::new(DescriptorRegistry::builtin())
            .run(&batch())
            .unwrap();
        assert_eq!(report.total(), 5);

        let placed: Vec<usize> = report.placed.iter().map(|p| p.index).collect();
        assert_eq!(placed, vec![0, 2, 4]);
        assert_eq!(report.placed[1].external_name, None);

        assert_eq!(report.skipped, vec![Skipped { index: 1, catalog: "NOT-A-CATALOG".to_string() }]);

        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].index, 3);
        assert_eq!(report.rejected[0].kind, "malformed_designation");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let records: Vec<RawRecord> = batch().into_iter().cycle().take(200).collect();
        let registry = DescriptorRegistry::builtin();
        let sequential = Ingestor::new(registry).run(&records).unwrap();
        let parallel = Ingestor::new(registry).parallel(true).run(&records).unwrap();
        let pooled = Ingestor::new(registry)
            .parallel(true)
            .threads(Some(2))
            .run(&records)
            .unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(sequential, pooled);
    }

    #[test]
    fn test_configured_defaults_apply() {
        let defaults = PositionError::new(3.0, 9.0);
        let ingestor = Ingestor::new(DescriptorRegistry::builtin()).with_defaults(defaults);
        assert_eq!(ingestor.place(0, &raw("HIP", &["1"])).unwrap().position_error, defaults);
        assert_eq!(
            ingestor.place(0, &raw("3C", &["273"])).unwrap().position_error,
            PositionError::new(60.0, 180.0)
        );
    }

    #[test]
    fn test_read_records_from_json_lines() {
        let input = concat!(
            r#"{"catalog":"HIP","fields":["71683","-0.01"]}"#,
            "\n\n",
            r#"{"catalog":"GCVS","fields":["SS","Cyg"],"position":{"ra_deg":325.68,"dec_deg":43.59},"accuracy":"tenth_arcsecond"}"#,
            "\n",
        );
        let records = read_records(Cursor::new(input)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].accuracy, Some(Accuracy::TenthArcsecond));

        let err = read_records(Cursor::new("\n{\"catalog\":\"HIP\"}\n{not json}\n")).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput { line: 2, .. }));
    }
}
