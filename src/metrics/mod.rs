//! Metrics for the catalog registry and the ingestion batch.
//!
//! Each phase owns a submodule with its metric names and recording helpers.
//! Recording goes through the `metrics` facade, so without an installed
//! recorder every call is a no-op.

pub mod ingest;
pub mod registry;

pub use ingest::IngestMetrics;
pub use registry::RegistryMetrics;

use std::collections::HashMap;
use std::sync::{Once, OnceLock};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::{debug, info, warn};

static INIT: Once = Once::new();
static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install an in-process Prometheus recorder and register every phase metric.
///
/// Idempotent. No HTTP listener is started; the snapshot is read back with
/// [`render`].
pub fn init_metrics() {
    INIT.call_once(|| match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            if HANDLE.set(handle).is_err() {
                warn!("metrics handle already stored");
            }
            register_all_metrics();
            info!("prometheus recorder installed");
        }
        Err(e) => warn!("failed to install prometheus recorder: {}", e),
    });
}

/// Prometheus text snapshot of everything recorded so far, if a recorder was
/// installed by [`init_metrics`].
pub fn render() -> Option<String> {
    HANDLE.get().map(|handle| handle.render())
}

/// Per-phase metric set.
pub trait PhaseMetrics {
    /// Pre-register the phase's metrics so they appear in snapshots at zero.
    fn register_metrics();

    fn phase_name() -> &'static str;

    fn metrics_documentation() -> Vec<MetricDoc>;
}

#[derive(Debug, Clone)]
pub struct MetricDoc {
    pub name: &'static str,
    pub metric_type: MetricType,
    pub help: &'static str,
    pub labels: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricType {
    Counter,
    Histogram,
}

/// Metric name following `sky_catalog_{phase}_{name}[_total]`.
macro_rules! phase_metric {
    (counter, $phase:literal, $name:literal) => {
        concat!("sky_catalog_", $phase, "_", $name, "_total")
    };
    (histogram, $phase:literal, $name:literal) => {
        concat!("sky_catalog_", $phase, "_", $name)
    };
}

pub(crate) use phase_metric;

/// Register all phases, warning on a name defined by two of them.
pub fn register_all_metrics() -> usize {
    let mut all = HashMap::new();
    register_phase::<IngestMetrics>(&mut all);
    register_phase::<RegistryMetrics>(&mut all);
    info!(metrics = all.len(), "registered catalog metrics");
    all.len()
}

fn register_phase<T: PhaseMetrics>(all: &mut HashMap<&'static str, MetricDoc>) {
    T::register_metrics();
    for doc in T::metrics_documentation() {
        debug!(phase = T::phase_name(), metric = doc.name, "registering metric");
        if all.contains_key(doc.name) {
            warn!(
                phase = T::phase_name(),
                metric = doc.name,
                "metric name defined twice"
            );
        } else {
            all.insert(doc.name, doc);
        }
    }
}
