//! credcheck HTTP Server binary

use credcheck_server::{AppState, ServerConfig};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;

    if config.otel_enabled {
        credcheck_server::tracing::init_tracing_stack("credcheck-server", config.log_format)?;
        info!("OpenTelemetry tracing enabled");
    } else {
        credcheck_server::tracing::init_console_logging(config.log_format)?;
    }

    info!("Starting credcheck server v{}", env!("CARGO_PKG_VERSION"));

    credcheck_server::metrics::init_prometheus()?;
    credcheck_server::metrics::init_metrics();

    let checker = Arc::new(config.build_checker()?);
    match &config.credentials_file {
        Some(path) => info!(
            "Using {} credentials from {}",
            checker.store().len(),
            path.display()
        ),
        None => info!("Using {} built-in credentials", checker.store().len()),
    }
    credcheck_server::metrics::update_known_users(checker.store().len());

    let app = credcheck_server::app(AppState::new(checker));

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    let port = listener.local_addr()?.port();
    info!("Server running at http://localhost:{}/", port);

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal, shutting down gracefully...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    if config.otel_enabled {
        info!("Flushing OpenTelemetry traces...");
        credcheck_server::tracing::shutdown_telemetry();
    }

    info!("Server shutdown complete");
    Ok(())
}
