//! Profile module - named, persisted answer sets.

mod aggregate;
mod errors;

pub use aggregate::{Profile, MAX_NAME_LENGTH};
pub use errors::ProfileError;
