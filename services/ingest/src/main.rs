//! fleet-event-stream ingestion service
//!
//! Accepts vehicle telemetry events over HTTP, validates and processes them,
//! and exposes processing counts plus Prometheus metrics on a separate port.

use std::sync::Arc;

use anyhow::Result;
use fleet_ingest::{
    api, config,
    metrics::PrometheusMetrics,
    processor::{EventProcessor, TracingHooks},
    state::AppState,
};
use tokio::sync::watch;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = config::Config::from_env()?;

    // Initialize tracing (prefer RUST_LOG, fallback to FLEET_LOG_LEVEL)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting fleet-event-stream ingestion service");
    info!(
        api_addr = %config.api_addr(),
        metrics_addr = %config.metrics_addr(),
        "Configuration loaded"
    );

    let metrics = Arc::new(PrometheusMetrics::new()?);
    let processor = Arc::new(EventProcessor::new(
        Arc::new(TracingHooks),
        metrics.clone(),
    ));
    let state = AppState::with_request_timeout(processor, metrics.clone(), config.request_timeout);

    let app = api::create_router(state);
    let metrics_app = api::create_metrics_router(metrics);

    let listener = tokio::net::TcpListener::bind(config.api_addr()).await?;
    info!(addr = %config.api_addr(), "API server listening");

    let metrics_listener = tokio::net::TcpListener::bind(config.metrics_addr()).await?;
    info!(addr = %config.metrics_addr(), "Metrics server listening");

    // Create shutdown channel for graceful shutdown
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let mut server_handle = tokio::spawn({
        let shutdown_rx = shutdown_rx.clone();
        async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(wait_for_shutdown(shutdown_rx, "API"))
                .await
        }
    });

    let metrics_handle = tokio::spawn(async move {
        axum::serve(metrics_listener, metrics_app)
            .with_graceful_shutdown(wait_for_shutdown(shutdown_rx, "Metrics"))
            .await
    });

    // Wait for shutdown signal (Ctrl+C / SIGTERM) or an early server exit
    let server_exited = tokio::select! {
        _ = shutdown_signal() => {
            info!("Received shutdown signal");
            false
        }
        result = &mut server_handle => {
            match result {
                Ok(Ok(())) => info!("API server exited"),
                Ok(Err(e)) => error!(error = %e, "API server error"),
                Err(e) => error!(error = %e, "API server task panicked"),
            }
            true
        }
    };

    // Signal shutdown to both servers
    let _ = shutdown_tx.send(true);

    info!("Waiting for servers to shut down...");
    if !server_exited
        && tokio::time::timeout(config.shutdown_timeout, server_handle)
            .await
            .is_err()
    {
        warn!("API server did not shut down in time");
    }

    if tokio::time::timeout(config.shutdown_timeout, metrics_handle)
        .await
        .is_err()
    {
        warn!("Metrics server did not shut down in time");
    }

    info!("Servers stopped gracefully");
    Ok(())
}

async fn wait_for_shutdown(mut shutdown_rx: watch::Receiver<bool>, server: &'static str) {
    loop {
        if *shutdown_rx.borrow() {
            break;
        }
        if shutdown_rx.changed().await.is_err() {
            break;
        }
    }
    info!(server, "Server shutting down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
