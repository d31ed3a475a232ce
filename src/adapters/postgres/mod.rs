//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresProfileRepository` - `saved_profiles` table
//! - `PostgresSavedResponseRepository` - `saved_responses` table

mod profile_repository;
mod saved_response_repository;

pub use profile_repository::PostgresProfileRepository;
pub use saved_response_repository::PostgresSavedResponseRepository;
