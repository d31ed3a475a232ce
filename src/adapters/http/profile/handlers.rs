//! HTTP handlers for saved profile endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{invalid_id, status_for, ErrorResponse};
use crate::adapters::http::middleware::OptionalAuth;
use crate::application::handlers::profile::{
    DeleteProfileCommand, DeleteProfileHandler, GetProfileHandler, GetProfileQuery,
    ListProfilesHandler, ListProfilesQuery, RenameProfileCommand, RenameProfileHandler,
    SaveProfileCommand, SaveProfileHandler, UpdateProfileAnswersCommand,
    UpdateProfileAnswersHandler,
};
use crate::domain::foundation::ProfileId;
use crate::domain::profile::ProfileError;
use crate::ports::ProfileRepository;

use super::dto::{
    CreateProfileRequest, ProfileListResponse, ProfileResponse, RenameProfileRequest,
    UpdateAnswersRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ProfileHandlers {
    save_handler: Arc<SaveProfileHandler>,
    update_answers_handler: Arc<UpdateProfileAnswersHandler>,
    rename_handler: Arc<RenameProfileHandler>,
    get_handler: Arc<GetProfileHandler>,
    list_handler: Arc<ListProfilesHandler>,
    delete_handler: Arc<DeleteProfileHandler>,
}

impl ProfileHandlers {
    /// Wires every profile handler to one repository.
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self {
            save_handler: Arc::new(SaveProfileHandler::new(repository.clone())),
            update_answers_handler: Arc::new(UpdateProfileAnswersHandler::new(repository.clone())),
            rename_handler: Arc::new(RenameProfileHandler::new(repository.clone())),
            get_handler: Arc::new(GetProfileHandler::new(repository.clone())),
            list_handler: Arc::new(ListProfilesHandler::new(repository.clone())),
            delete_handler: Arc::new(DeleteProfileHandler::new(repository)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/profiles - Save answers under a name
pub async fn create_profile(
    State(handlers): State<ProfileHandlers>,
    auth: OptionalAuth,
    Json(req): Json<CreateProfileRequest>,
) -> Response {
    let cmd = SaveProfileCommand {
        user_id: auth.user_id(),
        name: req.name,
        answers: req.answers,
    };

    match handlers.save_handler.handle(cmd).await {
        Ok(profile) => (StatusCode::CREATED, Json(ProfileResponse::from(profile))).into_response(),
        Err(e) => handle_profile_error(e),
    }
}

/// GET /api/profiles - List the caller's profiles
pub async fn list_profiles(
    State(handlers): State<ProfileHandlers>,
    auth: OptionalAuth,
) -> Response {
    let query = ListProfilesQuery {
        user_id: auth.user_id(),
    };

    match handlers.list_handler.handle(query).await {
        Ok(profiles) => (StatusCode::OK, Json(ProfileListResponse::from(profiles))).into_response(),
        Err(e) => handle_profile_error(e),
    }
}

/// GET /api/profiles/:id - Load one profile
pub async fn get_profile(
    State(handlers): State<ProfileHandlers>,
    auth: OptionalAuth,
    Path(profile_id): Path<String>,
) -> Response {
    let Ok(profile_id) = profile_id.parse::<ProfileId>() else {
        return invalid_id("profile");
    };

    let query = GetProfileQuery {
        user_id: auth.user_id(),
        profile_id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(profile) => (StatusCode::OK, Json(ProfileResponse::from(profile))).into_response(),
        Err(e) => handle_profile_error(e),
    }
}

/// PUT /api/profiles/:id/answers - Overwrite a profile's answers
pub async fn update_profile_answers(
    State(handlers): State<ProfileHandlers>,
    auth: OptionalAuth,
    Path(profile_id): Path<String>,
    Json(req): Json<UpdateAnswersRequest>,
) -> Response {
    let Ok(profile_id) = profile_id.parse::<ProfileId>() else {
        return invalid_id("profile");
    };

    let cmd = UpdateProfileAnswersCommand {
        user_id: auth.user_id(),
        profile_id,
        answers: req.answers,
    };

    match handlers.update_answers_handler.handle(cmd).await {
        Ok(profile) => (StatusCode::OK, Json(ProfileResponse::from(profile))).into_response(),
        Err(e) => handle_profile_error(e),
    }
}

/// PATCH /api/profiles/:id/name - Rename a profile
pub async fn rename_profile(
    State(handlers): State<ProfileHandlers>,
    auth: OptionalAuth,
    Path(profile_id): Path<String>,
    Json(req): Json<RenameProfileRequest>,
) -> Response {
    let Ok(profile_id) = profile_id.parse::<ProfileId>() else {
        return invalid_id("profile");
    };

    let cmd = RenameProfileCommand {
        user_id: auth.user_id(),
        profile_id,
        new_name: req.name,
    };

    match handlers.rename_handler.handle(cmd).await {
        Ok(profile) => (StatusCode::OK, Json(ProfileResponse::from(profile))).into_response(),
        Err(e) => handle_profile_error(e),
    }
}

/// DELETE /api/profiles/:id - Delete a profile
pub async fn delete_profile(
    State(handlers): State<ProfileHandlers>,
    auth: OptionalAuth,
    Path(profile_id): Path<String>,
) -> Response {
    let Ok(profile_id) = profile_id.parse::<ProfileId>() else {
        return invalid_id("profile");
    };

    let cmd = DeleteProfileCommand {
        user_id: auth.user_id(),
        profile_id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_profile_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_profile_error(error: ProfileError) -> Response {
    if let ProfileError::Infrastructure(msg) = &error {
        tracing::error!(error = %msg, "Profile store failure");
    }
    ErrorResponse::new(error.code(), error.message()).into_response_with(status_for(error.code()))
}
