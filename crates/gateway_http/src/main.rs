//! Input gateway server
//!
//! Main entry point for the gateway service.

use std::sync::Arc;

use gateway_http::{client::ResolverClient, routes, state::AppState};
use infrastructure::{AppConfig, DEFAULT_GATEWAY_PORT, init_telemetry};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load("ceptemp-gateway", DEFAULT_GATEWAY_PORT)?;

    let _telemetry_guard = init_telemetry(&config.telemetry)?;

    let resolver = ResolverClient::new(&config.resolver)
        .map_err(|e| anyhow::anyhow!("Failed to initialize resolver client: {e}"))?;

    let state = AppState {
        resolver: Arc::new(resolver),
    };

    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!(
        addr = %addr,
        resolver = %config.resolver.base_url,
        "Input gateway listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway shutdown complete");

    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
