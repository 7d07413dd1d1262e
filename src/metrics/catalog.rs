//! Catalog load metrics

use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};

pub struct CatalogMetrics;

impl CatalogMetrics {
    pub fn record_catalog_loaded(records: usize, located: usize) {
        ::metrics::counter!(phase_metric!(counter, "catalog", "records_loaded")).increment(records as u64);
        ::metrics::counter!(phase_metric!(counter, "catalog", "records_without_location"))
            .increment(records.saturating_sub(located) as u64);
    }

    pub fn record_notes_unavailable() {
        ::metrics::counter!(phase_metric!(counter, "catalog", "notes_unavailable")).increment(1);
    }
}

impl PhaseMetrics for CatalogMetrics {
    fn register_metrics() {
        let _ = ::metrics::counter!(phase_metric!(counter, "catalog", "records_loaded"));
        let _ = ::metrics::counter!(phase_metric!(counter, "catalog", "records_without_location"));
        let _ = ::metrics::counter!(phase_metric!(counter, "catalog", "notes_unavailable"));
    }

    fn phase_name() -> &'static str {
        "catalog"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: phase_metric!(counter, "catalog", "records_loaded"),
                metric_type: MetricType::Counter,
                help: "Catalog records loaded at startup",
            },
            MetricDoc {
                name: phase_metric!(counter, "catalog", "records_without_location"),
                metric_type: MetricType::Counter,
                help: "Loaded records without a usable latitude/longitude pair",
            },
            MetricDoc {
                name: phase_metric!(counter, "catalog", "notes_unavailable"),
                metric_type: MetricType::Counter,
                help: "Startup loads that fell back to empty nutrition notes",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_documentation() {
        CatalogMetrics::register_metrics();
        let docs = CatalogMetrics::metrics_documentation();
        assert_eq!(docs.len(), 3);
        for doc in docs {
            assert!(doc.name.starts_with("pasta_catalog_"));
        }
    }
}
