use axum::Router;
use axum::routing::{get, post};

pub mod predict;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route(
            "/predict",
            post(predict::predict).options(predict::preflight),
        )
}
