//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, auth, errors)
//! - `questions` - Question catalog and the answers collected against it
//! - `generation` - Prompt builder, completion extractor and form state
//! - `profile` - Named answer sets saved per user
//! - `saved_response` - Favourited ice breakers

pub mod foundation;
pub mod generation;
pub mod profile;
pub mod questions;
pub mod saved_response;
