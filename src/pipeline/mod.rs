//! Batch processing on top of the registry: ingestion of raw records and the
//! stored form of entries.

pub mod ingest;
pub mod persist;

pub use ingest::{read_records, IngestReport, Ingestor, Placement, RawRecord};
pub use persist::PersistedEntry;
