mod api;
mod app;
mod config;
mod domain;
mod error;
mod estimator;
mod logging;
mod middleware;
mod routes;
mod services;
mod wizard;

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use estimator::PricingConfig;
use services::{EstimatorClient, Evaluator};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting paint estimator"
    );

    // Load the pricing table once; everything else borrows it
    let pricing = match &settings.pricing_config_path {
        Some(path) => {
            let pricing = PricingConfig::from_file(path)?;
            tracing::info!(path = %path, "Pricing table loaded from file");
            pricing
        }
        None => {
            tracing::info!("Using built-in pricing table");
            PricingConfig::default()
        }
    };
    let pricing = Arc::new(pricing);

    // Wizard sessions evaluate in-process unless pointed at a remote evaluator
    let evaluator = match &settings.estimator_url {
        Some(url) => {
            let client = EstimatorClient::new(url, settings.estimator_timeout_seconds)?;

            // Optionally check evaluator health (non-blocking)
            tokio::spawn({
                let client = client.clone();
                async move {
                    match client.health_check().await {
                        Ok(()) => tracing::info!("Remote estimator is healthy"),
                        Err(e) => tracing::warn!(error = %e, "Remote estimator health check failed"),
                    }
                }
            });

            tracing::info!(base_url = client.base_url(), "Wizard sessions evaluate remotely");
            Evaluator::Remote(client)
        }
        None => Evaluator::Local(pricing.clone()),
    };

    // Create application state
    let state = app::AppState::new(settings.clone(), pricing, evaluator);

    if state.service_area.is_unrestricted() {
        tracing::info!("No service area configured - accepting any postal code");
    }

    // Sweep idle wizard sessions
    state.sessions.spawn_sweeper(Duration::from_secs(60));

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
