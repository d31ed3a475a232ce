//! HTTP adapter for ice breaker generation.

mod dto;
mod handlers;
mod routes;

pub use dto::{GenerateIceBreakersRequest, GenerateIceBreakersResponse, GENERATION_FAILED_MESSAGE};
pub use handlers::GenerationHandlers;
pub use routes::generation_routes;
