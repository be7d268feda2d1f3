// Phishdeck backend server
// Decision: Missing required configuration is fatal at boot — the process
// never serves traffic half-configured

mod api;
mod auth;
mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Json, Router};
use phishdeck_gophish::GophishClient;
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::ProxyState;
use crate::storage::Database;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phishdeck_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("phishdeck-server starting...");

    // Database
    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL environment variable required")?;
    let db = Database::from_url(&database_url)
        .await
        .context("Failed to connect to database")?;
    db.run_migrations()
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Connected to database");

    // Authentication
    let auth_config = auth::AuthConfig::from_env()?;
    let db = Arc::new(db);
    let auth_state = auth::AuthState::new(auth_config, db.clone());

    // Upstream client
    let gophish = Arc::new(GophishClient::from_env().context("GoPhish client configuration")?);
    let proxy_state = ProxyState {
        gophish,
        auth: auth_state.clone(),
    };

    let app = Router::new()
        .route("/health", get(health))
        .merge(auth::routes(auth_state))
        .merge(api::campaigns::routes(proxy_state.clone()))
        .merge(api::groups::routes(proxy_state.clone()))
        .merge(api::pages::routes(proxy_state.clone()))
        .merge(api::profiles::routes(proxy_state.clone()))
        .merge(api::templates::routes(proxy_state.clone()))
        .merge(api::users::routes(proxy_state.clone()))
        .merge(api::settings::routes(proxy_state))
        .layer(TraceLayer::new_for_http());

    // CORS only when the UI is served from a different origin
    let cors_origins: Vec<HeaderValue> = std::env::var("CORS_ALLOWED_ORIGINS")
        .ok()
        .filter(|s| !s.is_empty())
        .map(|s| s.split(',').filter_map(|s| s.trim().parse().ok()).collect())
        .unwrap_or_default();

    let app = if cors_origins.is_empty() {
        tracing::info!("CORS not configured (same-origin requests only)");
        app
    } else {
        tracing::info!(origins = ?cors_origins, "CORS origins configured");
        app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(cors_origins))
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
    };

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
