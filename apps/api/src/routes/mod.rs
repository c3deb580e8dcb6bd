pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::resume::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_payload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio API
        .route(
            "/api/v1/portfolios/normalize",
            post(handlers::handle_normalize),
        )
        // Resume API
        .route("/api/v1/resumes/ats", post(handlers::handle_generate_ats))
        .route(
            "/api/v1/resumes/ats/preview",
            post(handlers::handle_preview),
        )
        .fallback(not_found)
        .layer(body_limit)
        .with_state(state)
}
