//! DeleteProfileHandler - Command handler for deleting profiles.

use std::sync::Arc;

use crate::domain::foundation::{ProfileId, UserId};
use crate::domain::profile::ProfileError;
use crate::ports::ProfileRepository;

/// Command to delete a profile.
#[derive(Debug, Clone)]
pub struct DeleteProfileCommand {
    pub user_id: Option<UserId>,
    pub profile_id: ProfileId,
}

/// Handler for deleting profiles.
pub struct DeleteProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl DeleteProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    /// Deletes only rows the caller owns; anything else reads as not found.
    pub async fn handle(&self, cmd: DeleteProfileCommand) -> Result<(), ProfileError> {
        let user_id = cmd.user_id.ok_or(ProfileError::Unauthenticated)?;

        if !self.repository.delete(&cmd.profile_id, &user_id).await? {
            return Err(ProfileError::not_found(cmd.profile_id));
        }

        tracing::info!(profile_id = %cmd.profile_id, user_id = %user_id, "Profile deleted");
        Ok(())
    }
}
