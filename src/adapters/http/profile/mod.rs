//! HTTP adapter for saved profile endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateProfileRequest, ProfileListResponse, ProfileResponse, RenameProfileRequest,
    UpdateAnswersRequest,
};
pub use handlers::ProfileHandlers;
pub use routes::profile_routes;
