//! DeleteResponseHandler - removes one saved response.

use std::sync::Arc;

use crate::domain::foundation::{SavedResponseId, UserId};
use crate::domain::saved_response::SavedResponseError;
use crate::ports::SavedResponseRepository;

/// Command to delete a saved response.
#[derive(Debug, Clone)]
pub struct DeleteResponseCommand {
    pub user_id: Option<UserId>,
    pub response_id: SavedResponseId,
}

pub struct DeleteResponseHandler {
    repository: Arc<dyn SavedResponseRepository>,
}

impl DeleteResponseHandler {
    pub fn new(repository: Arc<dyn SavedResponseRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteResponseCommand) -> Result<(), SavedResponseError> {
        let user_id = cmd.user_id.ok_or(SavedResponseError::Unauthenticated)?;

        if !self.repository.delete(&cmd.response_id, &user_id).await? {
            return Err(SavedResponseError::not_found(cmd.response_id));
        }

        tracing::info!(
            response_id = %cmd.response_id,
            user_id = %user_id,
            "Saved response deleted"
        );
        Ok(())
    }
}
