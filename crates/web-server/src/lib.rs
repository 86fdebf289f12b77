//! # Masterkey Web Server
//!
//! The HTTP API the intake and dashboard pages talk to: one
//! compute-and-persist endpoint plus one latest-result endpoint per
//! calculator, lead registration, and the admin aggregation views.
//!
//! The engine itself is synchronous and stateless; the only asynchrony here
//! is the database.

use axum::{
    routing::{get, post},
    Router,
};
use configuration::Config;
use database::DbRepository;
use metrics::MetricsEngine;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub repo: DbRepository,
    pub engine: MetricsEngine,
}

/// The main function to configure and run the web server.
///
/// Builds the engine from the loaded tuning tables (rejecting inconsistent
/// configuration before binding the socket), connects the pool, and serves.
pub async fn run_server(addr: SocketAddr, config: Config) -> anyhow::Result<()> {
    let engine = MetricsEngine::new(config.metrics)?;

    let db_pool = database::connect().await?;
    let repo = DbRepository::new(db_pool);

    let app_state = Arc::new(AppState { repo, engine });

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        // Lead capture
        .route("/api/businesses", post(handlers::register_business))
        .route("/api/businesses/:business_id", get(handlers::get_business))
        // Calculators: compute-and-persist plus latest stored result
        .route("/api/metrics/loss-audit", post(handlers::run_loss_audit))
        .route(
            "/api/metrics/loss-audit/:business_id",
            get(handlers::latest_loss_audit),
        )
        .route("/api/metrics/night-loss", post(handlers::run_night_loss))
        .route(
            "/api/metrics/night-loss/:business_id",
            get(handlers::latest_night_loss),
        )
        .route("/api/metrics/ai-threat", post(handlers::run_ai_threat))
        .route(
            "/api/metrics/ai-threat/:business_id",
            get(handlers::latest_ai_threat),
        )
        .route("/api/metrics/visibility", post(handlers::run_visibility))
        .route(
            "/api/metrics/visibility/:business_id",
            get(handlers::latest_visibility),
        )
        .route("/api/metrics/export", post(handlers::run_export))
        .route(
            "/api/metrics/export/:business_id",
            get(handlers::latest_export),
        )
        // Admin aggregation
        .route("/api/admin/leads", get(handlers::list_leads))
        .route("/api/admin/summary", get(handlers::lead_summary))
        .with_state(app_state)
        .layer(cors)
        // Log every incoming request.
        .layer(TraceLayer::new_for_http());

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
