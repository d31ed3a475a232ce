//! In-memory adapters for tests and database-less local runs.

mod profile_repository;
mod saved_response_repository;

pub use profile_repository::InMemoryProfileRepository;
pub use saved_response_repository::InMemorySavedResponseRepository;
