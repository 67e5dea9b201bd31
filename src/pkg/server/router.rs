use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::{Router, routing::get};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::state::AppState;

pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::students::form))
        .route(
            "/students",
            get(handlers::students::list).post(handlers::students::submit),
        )
        .route("/students/{id}", get(handlers::students::detail))
        .route("/portfolio", get(handlers::portfolio::gallery))
        .route("/uploads", post(handlers::uploads::create))
        .route("/uploads/{name}", get(handlers::uploads::retrieve))
        .route(
            "/api/students",
            get(handlers::students::list_json).delete(handlers::students::clear),
        )
        .route("/api/students/{id}", get(handlers::students::retrieve_json))
        .route("/api/portfolio", get(handlers::portfolio::list))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .layer(DefaultBodyLimit::max(state.max_request_bytes))
        .with_state(state)
}
