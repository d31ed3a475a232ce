//! HTTP routes for ice breaker generation.

use axum::{routing::post, Router};

use super::handlers::{generate_ice_breakers, GenerationHandlers};

pub fn generation_routes(handlers: GenerationHandlers) -> Router {
    Router::new()
        .route("/", post(generate_ice_breakers))
        .with_state(handlers)
}
