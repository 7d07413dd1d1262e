//! Metrics for catalog loading and view rendering
//!
//! Each phase owns its metrics in a dedicated submodule. Without an installed
//! recorder every call is a no-op, so the pure pipeline and the tests never need
//! a metrics backend.

pub mod catalog;
pub mod showcase;

pub use catalog::CatalogMetrics;
pub use showcase::ShowcaseMetrics;

use std::net::SocketAddr;
use std::sync::Once;
use tracing::{debug, info, warn};

use crate::config::MetricsConfig;

static INIT: Once = Once::new();

/// Install the Prometheus exporter when enabled. Idempotent.
pub fn init_metrics(config: &MetricsConfig) {
    if !config.enabled {
        return;
    }
    INIT.call_once(|| {
        let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
        let builder = metrics_exporter_prometheus::PrometheusBuilder::new().with_http_listener(addr);
        match builder.install() {
            Ok(()) => {
                CatalogMetrics::register_metrics();
                ShowcaseMetrics::register_metrics();
                describe_phase::<CatalogMetrics>();
                describe_phase::<ShowcaseMetrics>();
                info!("Prometheus exporter listening on http://{}/metrics", addr);
            }
            Err(e) => {
                warn!("Prometheus exporter install failed (possibly already installed): {}", e);
            }
        }
    });
}

/// Publish the help text of every series a phase documents
pub fn describe_phase<P: PhaseMetrics>() {
    for doc in P::metrics_documentation() {
        match doc.metric_type {
            MetricType::Counter => ::metrics::describe_counter!(doc.name, doc.help),
            MetricType::Histogram => ::metrics::describe_histogram!(doc.name, doc.help),
        }
        debug!(phase = P::phase_name(), metric = doc.name, "described metric");
    }
}

/// Trait for phase-specific metrics collections
pub trait PhaseMetrics {
    /// Pre-register so the series appear before first use
    fn register_metrics();

    fn phase_name() -> &'static str;

    fn metrics_documentation() -> Vec<MetricDoc>;
}

/// Documentation for a single metric
#[derive(Debug, Clone)]
pub struct MetricDoc {
    pub name: &'static str,
    pub metric_type: MetricType,
    pub help: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MetricType {
    Counter,
    Histogram,
}

/// Naming convention: pasta_{phase}_{metric_name}[_total]
macro_rules! phase_metric {
    (counter, $phase:literal, $name:literal) => {
        concat!("pasta_", $phase, "_", $name, "_total")
    };
    (histogram, $phase:literal, $name:literal) => {
        concat!("pasta_", $phase, "_", $name)
    };
}

pub(crate) use phase_metric;
