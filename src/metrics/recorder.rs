//! Metrics recording implementation using Prometheus.

use prometheus::{
    register_counter_vec_with_registry, CounterVec, Encoder, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// Trait for recording application metrics.
pub trait MetricsRecorder: Clone + Send + Sync + 'static {
    /// Records a resolved navigation attempt and its outcome
    /// ("allowed" or "redirected").
    fn record_navigation(&self, route: &str, outcome: &str);

    /// Records a session store operation ("restore", "login", "logout").
    fn record_session_operation(&self, operation: &str);
}

/// Prometheus metrics collector.
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,

    navigations_total: CounterVec,
    session_operations_total: CounterVec,
}

impl Metrics {
    /// Creates a new metrics instance with a Prometheus registry.
    pub fn new() -> Self {
        let registry = Arc::new(Registry::new());

        let navigations_total = register_counter_vec_with_registry!(
            Opts::new("navigations_total", "Total number of navigation attempts"),
            &["route", "outcome"],
            registry.clone()
        )
        .expect("Failed to register navigations_total");

        let session_operations_total = register_counter_vec_with_registry!(
            Opts::new(
                "session_operations_total",
                "Total number of session store operations"
            ),
            &["operation"],
            registry.clone()
        )
        .expect("Failed to register session_operations_total");

        Metrics {
            registry,
            navigations_total,
            session_operations_total,
        }
    }

    /// Renders all collected metrics in Prometheus text format.
    pub fn render(&self) -> String {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .expect("Failed to encode metrics");
        String::from_utf8(buffer).expect("Metrics text is not valid UTF-8")
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder for Metrics {
    fn record_navigation(&self, route: &str, outcome: &str) {
        self.navigations_total
            .with_label_values(&[route, outcome])
            .inc();
    }

    fn record_session_operation(&self, operation: &str) {
        self.session_operations_total
            .with_label_values(&[operation])
            .inc();
    }
}
