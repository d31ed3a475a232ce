//! HTTP adapter for saved (favourited) ice breakers.

mod dto;
mod handlers;
mod routes;

pub use dto::{SaveResponseRequest, SavedResponseListResponse, SavedResponseResponse};
pub use handlers::SavedResponseHandlers;
pub use routes::saved_response_routes;
