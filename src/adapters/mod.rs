//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - OpenAI chat completions and a scriptable mock
//! - `auth` - HS256 JWT session validation and a mock validator
//! - `http` - axum REST API
//! - `memory` - in-memory repositories for tests and local runs
//! - `postgres` - sqlx-backed repositories

pub mod ai;
pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
