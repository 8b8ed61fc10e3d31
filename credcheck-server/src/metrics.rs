//! Prometheus metrics collection for the credcheck server

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use std::time::Instant;

/// Initialize all metric descriptions
pub fn init_metrics() {
    // Counters
    describe_counter!(
        "credcheck_login_attempts_total",
        "Total number of login attempts, labelled by outcome"
    );
    describe_counter!(
        "credcheck_rejected_bodies_total",
        "Login requests whose body could not be decoded"
    );

    // Histograms
    describe_histogram!(
        "credcheck_login_latency_seconds",
        "Login handling latency in seconds"
    );

    // Gauges
    describe_gauge!(
        "credcheck_known_users",
        "Number of records in the credential store"
    );
}

/// Record a login attempt
pub fn record_login(outcome: &str, latency_seconds: f64) {
    counter!("credcheck_login_attempts_total", "outcome" => outcome.to_string()).increment(1);
    histogram!("credcheck_login_latency_seconds").record(latency_seconds);
}

/// Record a login body the JSON extractor refused
pub fn record_rejected_body() {
    counter!("credcheck_rejected_bodies_total").increment(1);
}

/// Update the credential store gauge
pub fn update_known_users(count: usize) {
    gauge!("credcheck_known_users").set(count as f64);
}

/// Timer for measuring operation latency
pub struct LatencyTimer {
    start: Instant,
}

impl LatencyTimer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for LatencyTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Storage for Prometheus handle
static PROMETHEUS_HANDLE: std::sync::OnceLock<metrics_exporter_prometheus::PrometheusHandle> =
    std::sync::OnceLock::new();

/// Initialize Prometheus exporter and install it as the global recorder
pub fn init_prometheus() -> anyhow::Result<()> {
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    let handle = builder.install_recorder()?;
    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| anyhow::anyhow!("Failed to set Prometheus handle"))?;
    Ok(())
}

/// Render metrics in Prometheus text format, if the exporter is installed
pub fn get_prometheus_metrics() -> Option<String> {
    PROMETHEUS_HANDLE.get().map(|handle| handle.render())
}
