//! Ice breaker generation handlers.

mod completion_gateway;
mod generate_ice_breakers;

pub use completion_gateway::CompletionGateway;
pub use generate_ice_breakers::{
    GenerateIceBreakersCommand, GenerateIceBreakersHandler, GenerateIceBreakersResult,
};
