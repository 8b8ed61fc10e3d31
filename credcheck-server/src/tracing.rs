//! Logging and OpenTelemetry tracing setup for the credcheck server

use crate::config::LogFormat;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    runtime,
    trace::{self, RandomIdGenerator, Sampler},
    Resource,
};
use std::time::Duration;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info,credcheck=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize console-only logging
pub fn init_console_logging(format: LogFormat) -> anyhow::Result<()> {
    match format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter())
            .try_init(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}

/// Initialize OpenTelemetry with OTLP exporter
pub fn init_telemetry(service_name: &str) -> anyhow::Result<opentelemetry_sdk::trace::Tracer> {
    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:4317".to_string());

    let resource = Resource::new(vec![
        KeyValue::new("service.name", service_name.to_string()),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(endpoint)
        .with_timeout(Duration::from_secs(3));

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(exporter)
        .with_trace_config(
            trace::config()
                .with_sampler(sampler_from_arg(
                    std::env::var("OTEL_TRACES_SAMPLER_ARG").ok().as_deref(),
                ))
                .with_id_generator(RandomIdGenerator::default())
                .with_resource(resource),
        )
        .install_batch(runtime::Tokio)?;

    Ok(tracer)
}

/// Map a sampler ratio argument to a sampler. Unparseable or absent means sample everything.
fn sampler_from_arg(arg: Option<&str>) -> Sampler {
    let sample_rate = arg.and_then(|s| s.parse::<f64>().ok()).unwrap_or(1.0);

    if sample_rate >= 1.0 {
        Sampler::AlwaysOn
    } else if sample_rate <= 0.0 {
        Sampler::AlwaysOff
    } else {
        Sampler::TraceIdRatioBased(sample_rate)
    }
}

/// Initialize the complete tracing stack (console + OpenTelemetry)
pub fn init_tracing_stack(service_name: &str, format: LogFormat) -> anyhow::Result<()> {
    let tracer = init_telemetry(service_name)?;
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let (text_layer, json_layer) = match format {
        LogFormat::Text => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_thread_ids(true)
                    .with_thread_names(true),
            ),
            None,
        ),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };

    Registry::default()
        .with(env_filter())
        .with(text_layer)
        .with(json_layer)
        .with(otel_layer)
        .try_init()?;

    Ok(())
}

/// Shutdown OpenTelemetry provider
pub fn shutdown_telemetry() {
    opentelemetry::global::shutdown_tracer_provider();
}

/// Create a span for one login attempt. The password is never a field.
pub fn create_login_span(username: Option<&str>) -> tracing::Span {
    tracing::info_span!(
        "login_request",
        username = username.unwrap_or("<missing>"),
        outcome = tracing::field::Empty,
        latency_ms = tracing::field::Empty,
        otel.kind = "server",
        otel.status_code = tracing::field::Empty,
    )
}

/// Record the outcome of a login attempt on its span
pub fn record_outcome(span: &tracing::Span, outcome: &str, latency_ms: f64) {
    span.record("outcome", outcome);
    span.record("latency_ms", latency_ms);
    span.record("otel.status_code", "OK");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::subscriber::with_default;

    #[test]
    fn test_sampler_always_on() {
        assert!(matches!(sampler_from_arg(Some("1.0")), Sampler::AlwaysOn));
        assert!(matches!(sampler_from_arg(Some("2.0")), Sampler::AlwaysOn));
    }

    #[test]
    fn test_sampler_always_off() {
        assert!(matches!(sampler_from_arg(Some("0.0")), Sampler::AlwaysOff));
        assert!(matches!(sampler_from_arg(Some("-0.5")), Sampler::AlwaysOff));
    }

    #[test]
    fn test_sampler_ratio_based() {
        assert!(matches!(
            sampler_from_arg(Some("0.5")),
            Sampler::TraceIdRatioBased(_)
        ));
        assert!(matches!(
            sampler_from_arg(Some("0.001")),
            Sampler::TraceIdRatioBased(_)
        ));
    }

    #[test]
    fn test_sampler_defaults_to_always_on() {
        assert!(matches!(sampler_from_arg(None), Sampler::AlwaysOn));
        assert!(matches!(sampler_from_arg(Some("invalid")), Sampler::AlwaysOn));
    }

    #[test]
    fn test_shutdown_telemetry() {
        shutdown_telemetry();
    }

    #[test]
    fn test_create_login_span() {
        let subscriber = Registry::default();
        with_default(subscriber, || {
            let span = create_login_span(Some("user1"));
            assert_eq!(span.metadata().unwrap().name(), "login_request");
            let _guard = span.enter();
        });
    }

    #[test]
    fn test_create_login_span_without_username() {
        let subscriber = Registry::default();
        with_default(subscriber, || {
            let span = create_login_span(None);
            assert_eq!(span.metadata().unwrap().name(), "login_request");
        });
    }

    #[test]
    fn test_record_outcome() {
        let subscriber = Registry::default();
        with_default(subscriber, || {
            let span = create_login_span(Some("user1"));
            record_outcome(&span, "success", 0.4);
            record_outcome(&span, "failure", 0.2);
        });
    }
}
