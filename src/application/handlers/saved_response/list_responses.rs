//! ListResponsesHandler - Query handler for a user's saved responses.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::saved_response::{SavedResponse, SavedResponseError};
use crate::ports::SavedResponseRepository;

/// Query for all saved responses of the caller, newest first.
#[derive(Debug, Clone)]
pub struct ListResponsesQuery {
    pub user_id: Option<UserId>,
}

pub struct ListResponsesHandler {
    repository: Arc<dyn SavedResponseRepository>,
}

impl ListResponsesHandler {
    pub fn new(repository: Arc<dyn SavedResponseRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListResponsesQuery,
    ) -> Result<Vec<SavedResponse>, SavedResponseError> {
        let user_id = query.user_id.ok_or(SavedResponseError::Unauthenticated)?;
        Ok(self.repository.list_by_user(&user_id).await?)
    }
}
