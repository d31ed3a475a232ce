//! SavedResponseRepository port for favourited ice breakers.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SavedResponseId, UserId};
use crate::domain::saved_response::SavedResponse;

/// Repository for saved responses. Rows are never updated.
#[async_trait]
pub trait SavedResponseRepository: Send + Sync {
    /// Insert a new saved response.
    async fn insert(&self, response: &SavedResponse) -> Result<(), DomainError>;

    /// Find a saved response by id, regardless of owner.
    async fn find_by_id(&self, id: &SavedResponseId) -> Result<Option<SavedResponse>, DomainError>;

    /// All saved responses of a user, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<SavedResponse>, DomainError>;

    /// Delete a response owned by `user_id`. Returns whether a row was removed.
    async fn delete(&self, id: &SavedResponseId, user_id: &UserId) -> Result<bool, DomainError>;

    /// Number of responses a user has saved.
    async fn count_by_user(&self, user_id: &UserId) -> Result<u64, DomainError>;
}
