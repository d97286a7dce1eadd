//! Ingestion batch metrics.

use crate::domain::Category;
use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};

pub struct IngestMetrics;

impl IngestMetrics {
    pub fn record_placed(category: Category) {
        ::metrics::counter!(
            phase_metric!(counter, "ingest", "placed"),
            "category" => category.folder_name()
        )
        .increment(1);
    }

    /// Record for a catalog the registry does not know.
    pub fn record_skipped() {
        ::metrics::counter!(phase_metric!(counter, "ingest", "skipped")).increment(1);
    }

    pub fn record_rejected(error_kind: &'static str) {
        ::metrics::counter!(
            phase_metric!(counter, "ingest", "rejected"),
            "kind" => error_kind
        )
        .increment(1);
    }

    pub fn record_batch(records: usize, duration_secs: f64) {
        ::metrics::histogram!(phase_metric!(histogram, "ingest", "batch_size"))
            .record(records as f64);
        ::metrics::histogram!(phase_metric!(histogram, "ingest", "batch_duration_seconds"))
            .record(duration_secs);
    }
}

impl PhaseMetrics for IngestMetrics {
    fn register_metrics() {
        use ::metrics::{counter, histogram};

        let _ = counter!(phase_metric!(counter, "ingest", "placed"));
        let _ = counter!(phase_metric!(counter, "ingest", "skipped"));
        let _ = counter!(phase_metric!(counter, "ingest", "rejected"));
        let _ = histogram!(phase_metric!(histogram, "ingest", "batch_size"));
        let _ = histogram!(phase_metric!(histogram, "ingest", "batch_duration_seconds"));
    }

    fn phase_name() -> &'static str {
        "ingest"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: phase_metric!(counter, "ingest", "placed"),
                metric_type: MetricType::Counter,
                help: "Records whose names and folders were derived",
                labels: vec!["category"],
            },
            MetricDoc {
                name: phase_metric!(counter, "ingest", "skipped"),
                metric_type: MetricType::Counter,
                help: "Records naming an unregistered catalog",
                labels: vec![],
            },
            MetricDoc {
                name: phase_metric!(counter, "ingest", "rejected"),
                metric_type: MetricType::Counter,
                help: "Records that failed construction or derivation",
                labels: vec!["kind"],
            },
            MetricDoc {
                name: phase_metric!(histogram, "ingest", "batch_size"),
                metric_type: MetricType::Histogram,
                help: "Records per ingestion batch",
                labels: vec![],
            },
            MetricDoc {
                name: phase_metric!(histogram, "ingest", "batch_duration_seconds"),
                metric_type: MetricType::Histogram,
                help: "Wall time of an ingestion batch",
                labels: vec![],
            },
        ]
    }
}
