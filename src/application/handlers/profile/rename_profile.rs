//! RenameProfileHandler - Command handler for renaming profiles.

use std::sync::Arc;

use crate::domain::foundation::{ProfileId, UserId};
use crate::domain::profile::{Profile, ProfileError};
use crate::ports::ProfileRepository;

/// Command to rename a profile.
#[derive(Debug, Clone)]
pub struct RenameProfileCommand {
    pub user_id: Option<UserId>,
    pub profile_id: ProfileId,
    pub new_name: String,
}

/// Handler for renaming profiles.
pub struct RenameProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl RenameProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RenameProfileCommand) -> Result<Profile, ProfileError> {
        let user_id = cmd.user_id.ok_or(ProfileError::Unauthenticated)?;

        // 1. Load and authorize
        let mut profile = self
            .repository
            .find_by_id(&cmd.profile_id)
            .await?
            .ok_or_else(|| ProfileError::not_found(cmd.profile_id))?;
        if !profile.is_owner(&user_id) {
            return Err(ProfileError::Forbidden);
        }

        // 2. Apply rename
        let old_name = profile.rename(&cmd.new_name)?;

        // 3. Persist
        self.repository.update(&profile).await?;

        tracing::info!(
            profile_id = %profile.id(),
            %old_name,
            new_name = %profile.name(),
            "Profile renamed"
        );
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProfileRepository;
    use crate::domain::questions::AnswerSet;

    fn owner() -> UserId {
        UserId::new("owner").unwrap()
    }

    async fn seeded() -> (Arc<InMemoryProfileRepository>, ProfileId) {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let profile =
            Profile::new(ProfileId::new(), owner(), "Original", AnswerSet::new()).unwrap();
        repo.insert(&profile).await.unwrap();
        (repo, *profile.id())
    }

    #[tokio::test]
    async fn renames_profile_successfully() {
        let (repo, id) = seeded().await;
        let handler = RenameProfileHandler::new(repo.clone());

        let renamed = handler
            .handle(RenameProfileCommand {
                user_id: Some(owner()),
                profile_id: id,
                new_name: " Renamed ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(renamed.name(), "Renamed");
        assert_eq!(repo.find_by_id(&id).await.unwrap().unwrap().name(), "Renamed");
    }

    #[tokio::test]
    async fn fails_with_empty_name() {
        let (repo, id) = seeded().await;
        let handler = RenameProfileHandler::new(repo.clone());

        let result = handler
            .handle(RenameProfileCommand {
                user_id: Some(owner()),
                profile_id: id,
                new_name: String::new(),
            })
            .await;

        assert!(matches!(result, Err(ProfileError::ValidationFailed { .. })));
        assert_eq!(repo.find_by_id(&id).await.unwrap().unwrap().name(), "Original");
    }

    #[tokio::test]
    async fn fails_when_unauthenticated() {
        let (repo, id) = seeded().await;
        let handler = RenameProfileHandler::new(repo);

        let result = handler
            .handle(RenameProfileCommand {
                user_id: None,
                profile_id: id,
                new_name: "New".to_string(),
            })
            .await;

        assert_eq!(result, Err(ProfileError::Unauthenticated));
    }
}
