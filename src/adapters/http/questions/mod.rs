//! HTTP adapter for the read-only question catalog.

mod dto;
mod handlers;
mod routes;

pub use dto::{QuestionListResponse, QuestionResponse};
pub use handlers::QuestionHandlers;
pub use routes::question_routes;
