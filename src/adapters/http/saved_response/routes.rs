//! HTTP routes for saved responses.

use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers::{delete_response, list_responses, save_response, SavedResponseHandlers};

pub fn saved_response_routes(handlers: SavedResponseHandlers) -> Router {
    Router::new()
        .route("/", get(list_responses).post(save_response))
        .route("/:id", delete(delete_response))
        .with_state(handlers)
}
