//! Saved response module - favourited ice breakers.

mod aggregate;
mod errors;

pub use aggregate::SavedResponse;
pub use errors::SavedResponseError;
