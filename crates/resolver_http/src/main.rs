//! Temperature resolver server
//!
//! Main entry point for the resolver service.

use std::sync::Arc;

use infrastructure::{AppConfig, DEFAULT_RESOLVER_PORT, init_telemetry};
use integration_viacep::ViaCepClient;
use integration_weatherapi::WeatherApiClient;
use resolver_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load("ceptemp-resolver", DEFAULT_RESOLVER_PORT)?;

    let _telemetry_guard = init_telemetry(&config.telemetry)?;

    // A resolver without a weather API key cannot serve a single request;
    // refuse to start rather than fail every call.
    let weather_config = config
        .weather
        .to_client_config()
        .ok_or_else(|| anyhow::anyhow!("weather.api_key is required (CEPTEMP_WEATHER__API_KEY)"))?;

    let zip_lookup = ViaCepClient::new(config.viacep.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize ViaCEP client: {e}"))?;
    let weather = WeatherApiClient::new(weather_config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize weather client: {e}"))?;

    let state = AppState {
        zip_lookup: Arc::new(zip_lookup),
        weather: Arc::new(weather),
    };

    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!(
        addr = %addr,
        viacep = %config.viacep.base_url,
        weather = %config.weather.base_url,
        "Temperature resolver listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Resolver shutdown complete");

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
