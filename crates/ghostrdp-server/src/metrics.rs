//! # Metrics Module
//!
//! Prometheus metrics for the ghost-rdp backend: HTTP request counts and latency,
//! plus entity gauges refreshed whenever the dashboard aggregate is computed.

use ghostrdp_models::models::DashboardStats;
use ghostrdp_utils::logging::prelude::*;
use once_cell::sync::Lazy;
use prometheus::{
    CounterVec, Encoder, HistogramOpts, HistogramVec, IntGaugeVec, Opts, Registry, TextEncoder,
};

/// Global Prometheus registry for all backend metrics
pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// HTTP request counter
/// Labels: endpoint, method, status
pub static HTTP_REQUESTS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    let opts = Opts::new(
        "ghostrdp_http_requests_total",
        "Total number of HTTP requests by endpoint and status",
    );
    let counter = CounterVec::new(opts, &["endpoint", "method", "status"])
        .expect("Failed to create HTTP requests counter");
    REGISTRY
        .register(Box::new(counter.clone()))
        .expect("Failed to register HTTP requests counter");
    counter
});

/// HTTP request duration histogram
/// Labels: endpoint, method
pub static HTTP_REQUEST_DURATION_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    let opts = HistogramOpts::new(
        "ghostrdp_http_request_duration_seconds",
        "HTTP request latency distribution in seconds",
    )
    .buckets(vec![
        0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
    ]);
    let histogram = HistogramVec::new(opts, &["endpoint", "method"])
        .expect("Failed to create HTTP request duration histogram");
    REGISTRY
        .register(Box::new(histogram.clone()))
        .expect("Failed to register HTTP request duration histogram");
    histogram
});

/// Entity counts as of the last dashboard read
/// Labels: entity
pub static ENTITY_COUNT: Lazy<IntGaugeVec> = Lazy::new(|| {
    let opts = Opts::new(
        "ghostrdp_entities",
        "Row counts observed by the last dashboard aggregate",
    );
    let gauge =
        IntGaugeVec::new(opts, &["entity"]).expect("Failed to create entity count gauge");
    REGISTRY
        .register(Box::new(gauge.clone()))
        .expect("Failed to register entity count gauge");
    gauge
});

/// Forces registration of every metric so the exposition lists them before first use.
pub fn init() {
    Lazy::force(&HTTP_REQUESTS_TOTAL);
    Lazy::force(&HTTP_REQUEST_DURATION_SECONDS);
    Lazy::force(&ENTITY_COUNT);
}

/// Records one handled HTTP request.
pub fn record_http_request(endpoint: &str, method: &str, status: u16, duration_seconds: f64) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[endpoint, method, &status.to_string()])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[endpoint, method])
        .observe(duration_seconds);
}

/// Publishes the counts of a freshly computed dashboard aggregate.
pub fn update_entity_counts(stats: &DashboardStats) {
    ENTITY_COUNT.with_label_values(&["users"]).set(stats.user_count);
    ENTITY_COUNT.with_label_values(&["tasks"]).set(stats.task_count);
    ENTITY_COUNT
        .with_label_values(&["open_tickets"])
        .set(stats.open_ticket_count);
    ENTITY_COUNT
        .with_label_values(&["wg_peers"])
        .set(stats.wg_peer_count);
}

/// Encodes all registered metrics in Prometheus text format
///
/// # Returns
///
/// Returns a String containing all metrics in Prometheus exposition format.
/// An encoding failure is logged and yields whatever was written before it.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = vec![];
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        error!("Failed to encode metrics: {}", e);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}
