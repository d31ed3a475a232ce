//! ListProfilesHandler - Query handler for a user's saved profiles.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::profile::{Profile, ProfileError};
use crate::ports::ProfileRepository;

/// Query for all profiles of the caller, newest first.
#[derive(Debug, Clone)]
pub struct ListProfilesQuery {
    pub user_id: Option<UserId>,
}

/// Handler for listing profiles.
pub struct ListProfilesHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl ListProfilesHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListProfilesQuery) -> Result<Vec<Profile>, ProfileError> {
        let user_id = query.user_id.ok_or(ProfileError::Unauthenticated)?;
        Ok(self.repository.list_by_user(&user_id).await?)
    }
}
