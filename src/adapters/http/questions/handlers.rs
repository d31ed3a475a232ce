//! HTTP handlers for the question catalog.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::domain::questions::QuestionCatalog;

use super::dto::{QuestionListResponse, QuestionResponse};

#[derive(Clone)]
pub struct QuestionHandlers {
    catalog: Arc<QuestionCatalog>,
}

impl QuestionHandlers {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }
}

/// GET /api/questions - List the catalog
pub async fn list_questions(
    State(handlers): State<QuestionHandlers>,
) -> Json<QuestionListResponse> {
    Json(QuestionListResponse {
        questions: handlers
            .catalog
            .definitions()
            .iter()
            .map(QuestionResponse::from)
            .collect(),
    })
}
