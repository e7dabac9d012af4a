mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use energy_offers_sdk::config::env_or_default;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    tracing::info!("loading energy catalog");
    let sdk = energy_offers_sdk::AsyncEnergyOffersSdk::builder()
        .from_env()
        .build()
        .await?;

    let state = Arc::new(AppState { sdk });

    let app = Router::new()
        .route("/api/countries", get(routes::countries::list_countries))
        .route(
            "/api/countries/{country}/offers",
            get(routes::countries::country_offers),
        )
        .route("/api/providers", get(routes::providers::list_providers))
        .route("/api/offers", get(routes::offers::list_offers))
        .route("/api/offers/{id}", get(routes::offers::get_offer))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = env_or_default("BIND_ADDR", "0.0.0.0:3000");
    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
