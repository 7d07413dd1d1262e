//! Per-interaction view metrics

use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};

pub struct ShowcaseMetrics;

impl ShowcaseMetrics {
    /// One pipeline run for a render pass
    pub fn record_render(result_size: usize) {
        ::metrics::counter!(phase_metric!(counter, "showcase", "renders")).increment(1);
        ::metrics::histogram!(phase_metric!(histogram, "showcase", "result_size")).record(result_size as f64);
        if result_size == 0 {
            ::metrics::counter!(phase_metric!(counter, "showcase", "empty_results")).increment(1);
        }
    }

    pub fn record_rejected_criteria() {
        ::metrics::counter!(phase_metric!(counter, "showcase", "rejected_criteria")).increment(1);
    }
}

impl PhaseMetrics for ShowcaseMetrics {
    fn register_metrics() {
        let _ = ::metrics::counter!(phase_metric!(counter, "showcase", "renders"));
        let _ = ::metrics::counter!(phase_metric!(counter, "showcase", "empty_results"));
        let _ = ::metrics::counter!(phase_metric!(counter, "showcase", "rejected_criteria"));
        let _ = ::metrics::histogram!(phase_metric!(histogram, "showcase", "result_size"));
    }

    fn phase_name() -> &'static str {
        "showcase"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: phase_metric!(counter, "showcase", "renders"),
                metric_type: MetricType::Counter,
                help: "Showcase render passes",
            },
            MetricDoc {
                name: phase_metric!(counter, "showcase", "empty_results"),
                metric_type: MetricType::Counter,
                help: "Render passes where no record matched",
            },
            MetricDoc {
                name: phase_metric!(counter, "showcase", "rejected_criteria"),
                metric_type: MetricType::Counter,
                help: "Requests rejected for unparseable criteria",
            },
            MetricDoc {
                name: phase_metric!(histogram, "showcase", "result_size"),
                metric_type: MetricType::Histogram,
                help: "Records shown per render pass",
            },
        ]
    }
}
