//! SaveResponseHandler - favourites one generated ice breaker.

use std::sync::Arc;

use crate::domain::foundation::{SavedResponseId, UserId};
use crate::domain::saved_response::{SavedResponse, SavedResponseError};
use crate::ports::SavedResponseRepository;

/// Command to save an ice breaker.
#[derive(Debug, Clone)]
pub struct SaveResponseCommand {
    pub user_id: Option<UserId>,
    pub text: String,
}

/// Handler for saving responses.
pub struct SaveResponseHandler {
    repository: Arc<dyn SavedResponseRepository>,
}

impl SaveResponseHandler {
    pub fn new(repository: Arc<dyn SavedResponseRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SaveResponseCommand,
    ) -> Result<SavedResponse, SavedResponseError> {
        let user_id = cmd.user_id.ok_or(SavedResponseError::Unauthenticated)?;

        let response = SavedResponse::new(SavedResponseId::new(), user_id, &cmd.text)?;
        self.repository.insert(&response).await?;

        tracing::info!(
            response_id = %response.id(),
            user_id = %response.user_id(),
            "Response saved"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySavedResponseRepository;

    #[tokio::test]
    async fn saves_trimmed_text() {
        let repo = Arc::new(InMemorySavedResponseRepository::new());
        let user = UserId::new("user-123").unwrap();

        let saved = SaveResponseHandler::new(repo.clone())
            .handle(SaveResponseCommand {
                user_id: Some(user.clone()),
                text: "  Have you been here before?  ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(saved.text(), "Have you been here before?");
        assert_eq!(repo.count_by_user(&user).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn unauthenticated_save_creates_nothing() {
        let repo = Arc::new(InMemorySavedResponseRepository::new());

        let result = SaveResponseHandler::new(repo.clone())
            .handle(SaveResponseCommand {
                user_id: None,
                text: "Hi".to_string(),
            })
            .await;

        assert_eq!(result, Err(SavedResponseError::Unauthenticated));
        assert!(repo
            .list_by_user(&UserId::new("anyone").unwrap())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn blank_text_is_rejected() {
        let repo = Arc::new(InMemorySavedResponseRepository::new());

        let result = SaveResponseHandler::new(repo)
            .handle(SaveResponseCommand {
                user_id: Some(UserId::new("user-123").unwrap()),
                text: "\n".to_string(),
            })
            .await;

        assert!(matches!(result, Err(SavedResponseError::ValidationFailed { .. })));
    }
}
