//! HTTP handlers for saved responses.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{invalid_id, status_for, ErrorResponse};
use crate::adapters::http::middleware::OptionalAuth;
use crate::application::handlers::saved_response::{
    DeleteResponseCommand, DeleteResponseHandler, ListResponsesHandler, ListResponsesQuery,
    SaveResponseCommand, SaveResponseHandler,
};
use crate::domain::foundation::SavedResponseId;
use crate::domain::saved_response::SavedResponseError;
use crate::ports::SavedResponseRepository;

use super::dto::{SaveResponseRequest, SavedResponseListResponse, SavedResponseResponse};

#[derive(Clone)]
pub struct SavedResponseHandlers {
    save_handler: Arc<SaveResponseHandler>,
    list_handler: Arc<ListResponsesHandler>,
    delete_handler: Arc<DeleteResponseHandler>,
}

impl SavedResponseHandlers {
    pub fn new(repository: Arc<dyn SavedResponseRepository>) -> Self {
        Self {
            save_handler: Arc::new(SaveResponseHandler::new(repository.clone())),
            list_handler: Arc::new(ListResponsesHandler::new(repository.clone())),
            delete_handler: Arc::new(DeleteResponseHandler::new(repository)),
        }
    }
}

/// POST /api/responses - Favourite an ice breaker
pub async fn save_response(
    State(handlers): State<SavedResponseHandlers>,
    auth: OptionalAuth,
    Json(req): Json<SaveResponseRequest>,
) -> Response {
    let cmd = SaveResponseCommand {
        user_id: auth.user_id(),
        text: req.text,
    };

    match handlers.save_handler.handle(cmd).await {
        Ok(saved) => {
            (StatusCode::CREATED, Json(SavedResponseResponse::from(saved))).into_response()
        }
        Err(e) => handle_saved_response_error(e),
    }
}

/// GET /api/responses - List the caller's saved responses
pub async fn list_responses(
    State(handlers): State<SavedResponseHandlers>,
    auth: OptionalAuth,
) -> Response {
    let query = ListResponsesQuery {
        user_id: auth.user_id(),
    };

    match handlers.list_handler.handle(query).await {
        Ok(responses) => {
            (StatusCode::OK, Json(SavedResponseListResponse::from(responses))).into_response()
        }
        Err(e) => handle_saved_response_error(e),
    }
}

/// DELETE /api/responses/:id - Remove a saved response
pub async fn delete_response(
    State(handlers): State<SavedResponseHandlers>,
    auth: OptionalAuth,
    Path(response_id): Path<String>,
) -> Response {
    let Ok(response_id) = response_id.parse::<SavedResponseId>() else {
        return invalid_id("response");
    };

    let cmd = DeleteResponseCommand {
        user_id: auth.user_id(),
        response_id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_saved_response_error(e),
    }
}

fn handle_saved_response_error(error: SavedResponseError) -> Response {
    if let SavedResponseError::Infrastructure(msg) = &error {
        tracing::error!(error = %msg, "Saved response store failure");
    }
    ErrorResponse::new(error.code(), error.message()).into_response_with(status_for(error.code()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response =
            handle_saved_response_error(SavedResponseError::NotFound(SavedResponseId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unauthenticated_maps_to_401() {
        let response = handle_saved_response_error(SavedResponseError::Unauthenticated);
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
