//! Courier API server binary entrypoint.
//!
//! Wires configuration → gateway client → dispatch queue → worker → router.
//! The worker owns the queue's receiving half; on shutdown the producer
//! handles are dropped so the worker drains outstanding tasks and stops.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use courier_common::config::AppConfig;
use courier_dispatch::{DispatchWorker, task_queue};
use courier_gateway::{BridgeGateway, StatusProxy};

use courier_api::routes::create_router;
use courier_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("courier_api=debug,courier_dispatch=debug,tower_http=debug")
        }))
        .init();

    tracing::info!("Starting Courier API server...");

    // Load configuration
    let config = AppConfig::from_env()?;

    // Gateway client and status proxy share the bridge base URL
    let gateway = Arc::new(BridgeGateway::new(
        config.gateway_base_url.clone(),
        Duration::from_secs(config.gateway_send_timeout_secs),
    )?);
    let proxy = StatusProxy::new(
        config.gateway_base_url.clone(),
        Duration::from_secs(config.gateway_status_timeout_secs),
        Duration::from_secs(config.gateway_qr_timeout_secs),
    );

    // Dispatch queue and the single worker that drains it
    let (queue, rx) = task_queue();
    let worker = DispatchWorker::new(
        gateway,
        rx,
        Duration::from_millis(config.send_delay_ms),
    );
    let worker_handle = tokio::spawn(worker.run());
    tracing::info!("Dispatch worker spawned");

    // Build application state and router
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    let state = AppState::new(queue, proxy, config);
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    tracing::info!("API server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Every producer handle is gone once the router is dropped; the worker
    // drains what is left in the queue and exits.
    tracing::info!("Shutting down, draining dispatch queue...");
    worker_handle.await?;

    tracing::info!("Courier API server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    } else {
        tracing::info!("Received shutdown signal, stopping gracefully...");
    }
}
