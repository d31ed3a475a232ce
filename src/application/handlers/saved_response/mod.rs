//! Saved response command and query handlers.

mod delete_response;
mod list_responses;
mod save_response;

pub use delete_response::{DeleteResponseCommand, DeleteResponseHandler};
pub use list_responses::{ListResponsesHandler, ListResponsesQuery};
pub use save_response::{SaveResponseCommand, SaveResponseHandler};
