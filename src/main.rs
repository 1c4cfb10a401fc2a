// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::forecast_service::ForecastService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::openweather::OpenWeatherSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{forecast_json, forecast_page, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Create forecast source (infrastructure layer)
    let source = Arc::new(OpenWeatherSource::new(&app_config.openweather, &app_config.location));
    if source.usable_api_key().is_none() {
        tracing::warn!("No OpenWeather API key configured; forecast requests will be refused");
    }

    // Create services (application layer)
    let forecast_service = ForecastService::new(
        source,
        app_config.thresholds,
        app_config.openweather.forecast_days,
    );

    let state = Arc::new(AppState {
        forecast_service,
        location_name: app_config.location.name.clone(),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(forecast_page))
        .route("/api/forecast", get(forecast_json))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = app_config
        .server
        .bind_address
        .parse()
        .with_context(|| format!("invalid server.bind_address {:?}", app_config.server.bind_address))?;
    tracing::info!(
        "Starting hikecast for {} ({}, {}) on {}",
        app_config.location.name,
        app_config.location.latitude,
        app_config.location.longitude,
        addr
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
