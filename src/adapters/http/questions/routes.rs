//! HTTP routes for the question catalog.

use axum::{routing::get, Router};

use super::handlers::{list_questions, QuestionHandlers};

pub fn question_routes(handlers: QuestionHandlers) -> Router {
    Router::new()
        .route("/", get(list_questions))
        .with_state(handlers)
}
