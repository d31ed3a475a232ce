//! GetProfileHandler - Query handler for loading one profile.

use std::sync::Arc;

use crate::domain::foundation::{ProfileId, UserId};
use crate::domain::profile::{Profile, ProfileError};
use crate::ports::ProfileRepository;

/// Query to load a profile by ID.
#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub user_id: Option<UserId>,
    pub profile_id: ProfileId,
}

/// Handler for loading a profile.
pub struct GetProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl GetProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<Profile, ProfileError> {
        let user_id = query.user_id.ok_or(ProfileError::Unauthenticated)?;

        let profile = self
            .repository
            .find_by_id(&query.profile_id)
            .await?
            .ok_or_else(|| ProfileError::not_found(query.profile_id))?;

        if !profile.is_owner(&user_id) {
            return Err(ProfileError::Forbidden);
        }

        Ok(profile)
    }
}
