//! Catalog registry lookup metrics.

use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};

pub struct RegistryMetrics;

impl RegistryMetrics {
    /// `lookup` is the key kind that missed: "code" or "acronym".
    pub fn record_lookup_miss(lookup: &'static str) {
        ::metrics::counter!(
            phase_metric!(counter, "registry", "misses"),
            "lookup" => lookup
        )
        .increment(1);
    }
}

impl PhaseMetrics for RegistryMetrics {
    fn register_metrics() {
        let _ = ::metrics::counter!(phase_metric!(counter, "registry", "misses"));
    }

    fn phase_name() -> &'static str {
        "registry"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![MetricDoc {
            name: phase_metric!(counter, "registry", "misses"),
            metric_type: MetricType::Counter,
            help: "Catalog lookups that found no descriptor",
            labels: vec!["lookup"],
        }]
    }
}
