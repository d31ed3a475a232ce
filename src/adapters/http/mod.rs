//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own dto / handlers / routes module; `router` nests
//! them under `/api` behind the auth middleware.

pub mod error;
pub mod generation;
pub mod middleware;
pub mod profile;
pub mod questions;
pub mod router;
pub mod saved_response;

pub use error::ErrorResponse;
pub use router::{build_router, AppDependencies};
