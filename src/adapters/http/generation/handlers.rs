//! HTTP handlers for ice breaker generation.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::OptionalAuth;
use crate::application::handlers::generation::{
    GenerateIceBreakersCommand, GenerateIceBreakersHandler,
};
use crate::domain::generation::GenerationError;

use super::dto::{
    GenerateIceBreakersRequest, GenerateIceBreakersResponse, GENERATION_FAILED_MESSAGE,
};

#[derive(Clone)]
pub struct GenerationHandlers {
    generate_handler: Arc<GenerateIceBreakersHandler>,
}

impl GenerationHandlers {
    pub fn new(generate_handler: Arc<GenerateIceBreakersHandler>) -> Self {
        Self { generate_handler }
    }
}

/// POST /api/ice-breakers - Generate up to three ice breakers
pub async fn generate_ice_breakers(
    State(handlers): State<GenerationHandlers>,
    auth: OptionalAuth,
    Json(req): Json<GenerateIceBreakersRequest>,
) -> Response {
    let cmd = GenerateIceBreakersCommand {
        answers: req.answers,
        first_time: req.is_first_time,
        user_id: auth.user_id(),
    };

    match handlers.generate_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(GenerateIceBreakersResponse {
                ice_breakers: result.ice_breakers,
            }),
        )
            .into_response(),
        Err(e) => handle_generation_error(e),
    }
}

fn handle_generation_error(error: GenerationError) -> Response {
    match &error {
        GenerationError::Failed { reason } => {
            tracing::error!(reason = %reason, "Ice breaker generation failed");
            ErrorResponse::message(GENERATION_FAILED_MESSAGE)
                .into_response_with(StatusCode::BAD_GATEWAY)
        }
        GenerationError::AlreadyGenerating => ErrorResponse::new(error.code(), error.message())
            .into_response_with(StatusCode::CONFLICT),
    }
}
