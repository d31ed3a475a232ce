//! Profile command and query handlers.

mod delete_profile;
mod get_profile;
mod list_profiles;
mod rename_profile;
mod save_profile;
mod update_profile_answers;

pub use delete_profile::{DeleteProfileCommand, DeleteProfileHandler};
pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use list_profiles::{ListProfilesHandler, ListProfilesQuery};
pub use rename_profile::{RenameProfileCommand, RenameProfileHandler};
pub use save_profile::{SaveProfileCommand, SaveProfileHandler};
pub use update_profile_answers::{UpdateProfileAnswersCommand, UpdateProfileAnswersHandler};
