//! SaveProfileHandler - Command handler for saving a new profile.

use std::sync::Arc;

use crate::domain::foundation::{ProfileId, UserId};
use crate::domain::profile::{Profile, ProfileError};
use crate::domain::questions::AnswerSet;
use crate::ports::ProfileRepository;

/// Command to save the current answers under a name.
#[derive(Debug, Clone)]
pub struct SaveProfileCommand {
    pub user_id: Option<UserId>,
    pub name: String,
    pub answers: AnswerSet,
}

/// Handler for saving profiles.
pub struct SaveProfileHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl SaveProfileHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SaveProfileCommand) -> Result<Profile, ProfileError> {
        let user_id = cmd.user_id.ok_or(ProfileError::Unauthenticated)?;

        let profile = Profile::new(ProfileId::new(), user_id, &cmd.name, cmd.answers)?;
        self.repository.insert(&profile).await?;

        tracing::info!(
            profile_id = %profile.id(),
            user_id = %profile.user_id(),
            answers = profile.answers().len(),
            "Profile saved"
        );
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProfileRepository;

    fn user() -> UserId {
        UserId::new("user-123").unwrap()
    }

    #[tokio::test]
    async fn saves_profile_that_round_trips() {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let handler = SaveProfileHandler::new(repo.clone());
        let answers: AnswerSet = [("yourAge", "29")].into_iter().collect();

        let saved = handler
            .handle(SaveProfileCommand {
                user_id: Some(user()),
                name: "Alex".to_string(),
                answers: answers.clone(),
            })
            .await
            .unwrap();

        let loaded = repo.find_by_id(saved.id()).await.unwrap().unwrap();
        assert_eq!(loaded.answers(), &answers);
        assert_eq!(loaded.name(), "Alex");
    }

    #[tokio::test]
    async fn unauthenticated_save_creates_nothing() {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let handler = SaveProfileHandler::new(repo.clone());

        let result = handler
            .handle(SaveProfileCommand {
                user_id: None,
                name: "Alex".to_string(),
                answers: AnswerSet::new(),
            })
            .await;

        assert_eq!(result, Err(ProfileError::Unauthenticated));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let handler = SaveProfileHandler::new(repo.clone());

        let result = handler
            .handle(SaveProfileCommand {
                user_id: Some(user()),
                name: "  ".to_string(),
                answers: AnswerSet::new(),
            })
            .await;

        assert!(matches!(result, Err(ProfileError::ValidationFailed { .. })));
        assert!(repo.is_empty().await);
    }
}
