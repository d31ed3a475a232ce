//! UpdateProfileAnswersHandler - overwrites a profile's answers.

use std::sync::Arc;

use crate::domain::foundation::{ProfileId, UserId};
use crate::domain::profile::{Profile, ProfileError};
use crate::domain::questions::AnswerSet;
use crate::ports::ProfileRepository;

/// Command to replace a profile's answers with the current form state.
#[derive(Debug, Clone)]
pub struct UpdateProfileAnswersCommand {
    pub user_id: Option<UserId>,
    pub profile_id: ProfileId,
    pub answers: AnswerSet,
}

/// Handler for updating profile answers.
pub struct UpdateProfileAnswersHandler {
    repository: Arc<dyn ProfileRepository>,
}

impl UpdateProfileAnswersHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateProfileAnswersCommand) -> Result<Profile, ProfileError> {
        let user_id = cmd.user_id.ok_or(ProfileError::Unauthenticated)?;

        let mut profile = self
            .repository
            .find_by_id(&cmd.profile_id)
            .await?
            .ok_or_else(|| ProfileError::not_found(cmd.profile_id))?;
        if !profile.is_owner(&user_id) {
            return Err(ProfileError::Forbidden);
        }

        profile.replace_answers(cmd.answers);
        self.repository.update(&profile).await?;

        tracing::info!(
            profile_id = %profile.id(),
            answers = profile.answers().len(),
            "Profile answers updated"
        );
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProfileRepository;

    async fn seeded() -> (Arc<InMemoryProfileRepository>, Profile) {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let profile = Profile::new(
            ProfileId::new(),
            UserId::new("owner").unwrap(),
            "Alex",
            [("vibe", "calm")].into_iter().collect(),
        )
        .unwrap();
        repo.insert(&profile).await.unwrap();
        (repo, profile)
    }

    #[tokio::test]
    async fn replaces_answers_wholesale() {
        let (repo, profile) = seeded().await;
        let handler = UpdateProfileAnswersHandler::new(repo.clone());
        let answers: AnswerSet = [("yourAge", "29")].into_iter().collect();

        handler
            .handle(UpdateProfileAnswersCommand {
                user_id: Some(UserId::new("owner").unwrap()),
                profile_id: *profile.id(),
                answers: answers.clone(),
            })
            .await
            .unwrap();

        let stored = repo.find_by_id(profile.id()).await.unwrap().unwrap();
        assert_eq!(stored.answers(), &answers);
        assert_eq!(stored.name(), "Alex");
    }

    #[tokio::test]
    async fn other_user_is_forbidden() {
        let (repo, profile) = seeded().await;
        let handler = UpdateProfileAnswersHandler::new(repo.clone());

        let result = handler
            .handle(UpdateProfileAnswersCommand {
                user_id: Some(UserId::new("intruder").unwrap()),
                profile_id: *profile.id(),
                answers: AnswerSet::new(),
            })
            .await;

        assert_eq!(result, Err(ProfileError::Forbidden));
        let stored = repo.find_by_id(profile.id()).await.unwrap().unwrap();
        assert_eq!(stored.answers().get("vibe"), Some("calm"));
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let handler = UpdateProfileAnswersHandler::new(Arc::new(InMemoryProfileRepository::new()));
        let id = ProfileId::new();

        let result = handler
            .handle(UpdateProfileAnswersCommand {
                user_id: Some(UserId::new("owner").unwrap()),
                profile_id: id,
                answers: AnswerSet::new(),
            })
            .await;

        assert_eq!(result, Err(ProfileError::NotFound(id)));
    }
}
