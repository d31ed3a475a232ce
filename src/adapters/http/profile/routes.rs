//! HTTP routes for saved profile endpoints.

use axum::{
    routing::{get, patch, put},
    Router,
};

use super::handlers::{
    create_profile, delete_profile, get_profile, list_profiles, rename_profile,
    update_profile_answers, ProfileHandlers,
};

/// Creates the profile router with all endpoints.
pub fn profile_routes(handlers: ProfileHandlers) -> Router {
    Router::new()
        .route("/", get(list_profiles).post(create_profile))
        .route("/:id", get(get_profile).delete(delete_profile))
        .route("/:id/answers", put(update_profile_answers))
        .route("/:id/name", patch(rename_profile))
        .with_state(handlers)
}
