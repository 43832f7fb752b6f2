use axum::{Router, http::Method, routing::get};
use calculator::PaymentCalculator;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub calculator: PaymentCalculator,
}

/// Builds the router with every endpoint, CORS and request tracing attached.
pub fn build_router(calculator: PaymentCalculator) -> Router {
    let app_state = Arc::new(AppState { calculator });

    // The browser front end is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/calculatefinance/", get(handlers::calculate_finance))
        .route("/calculatefinance", get(handlers::calculate_finance))
        .route("/calculatelease/", get(handlers::calculate_lease))
        .route("/calculatelease", get(handlers::calculate_lease))
        .route("/api/quotes/finance", get(handlers::finance_quote))
        .route("/api/quotes/lease", get(handlers::lease_quote))
        .route("/api/apr", get(handlers::apr_for_credit_score))
        .fallback(handlers::not_found)
        .with_state(app_state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Binds `addr` and serves until Ctrl-C.
///
/// Tracing must already be initialised by the caller.
pub async fn run_server(addr: &str, calculator: PaymentCalculator) -> anyhow::Result<()> {
    let app = build_router(calculator);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        std::future::pending::<()>().await;
    }
}
