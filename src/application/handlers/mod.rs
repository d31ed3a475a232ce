//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod generation;
pub mod profile;
pub mod saved_response;

pub use generation::{
    CompletionGateway, GenerateIceBreakersCommand, GenerateIceBreakersHandler,
    GenerateIceBreakersResult,
};
pub use profile::{
    DeleteProfileCommand, DeleteProfileHandler, GetProfileHandler, GetProfileQuery,
    ListProfilesHandler, ListProfilesQuery, RenameProfileCommand, RenameProfileHandler,
    SaveProfileCommand, SaveProfileHandler, UpdateProfileAnswersCommand,
    UpdateProfileAnswersHandler,
};
pub use saved_response::{
    DeleteResponseCommand, DeleteResponseHandler, ListResponsesHandler, ListResponsesQuery,
    SaveResponseCommand, SaveResponseHandler,
};
