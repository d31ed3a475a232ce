//! In-memory SavedResponseRepository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SavedResponseId, UserId};
use crate::domain::saved_response::SavedResponse;
use crate::ports::SavedResponseRepository;

/// Saved responses kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemorySavedResponseRepository {
    responses: Arc<RwLock<Vec<SavedResponse>>>,
}

impl InMemorySavedResponseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SavedResponseRepository for InMemorySavedResponseRepository {
    async fn insert(&self, response: &SavedResponse) -> Result<(), DomainError> {
        self.responses.write().await.push(response.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SavedResponseId) -> Result<Option<SavedResponse>, DomainError> {
        Ok(self
            .responses
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<SavedResponse>, DomainError> {
        let mut owned: Vec<SavedResponse> = self
            .responses
            .read()
            .await
            .iter()
            .rev()
            .filter(|r| r.is_owner(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(owned)
    }

    async fn delete(&self, id: &SavedResponseId, user_id: &UserId) -> Result<bool, DomainError> {
        let mut responses = self.responses.write().await;
        let before = responses.len();
        responses.retain(|r| !(r.id() == id && r.is_owner(user_id)));
        Ok(responses.len() < before)
    }

    async fn count_by_user(&self, user_id: &UserId) -> Result<u64, DomainError> {
        Ok(self
            .responses
            .read()
            .await
            .iter()
            .filter(|r| r.is_owner(user_id))
            .count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_row() {
        let repo = InMemorySavedResponseRepository::new();
        let mut saved = Vec::new();
        for text in ["one", "two", "three"] {
            let response = SavedResponse::new(SavedResponseId::new(), user("alice"), text).unwrap();
            repo.insert(&response).await.unwrap();
            saved.push(*response.id());
        }

        assert!(repo.delete(&saved[1], &user("alice")).await.unwrap());

        let remaining: HashSet<SavedResponseId> = repo
            .list_by_user(&user("alice"))
            .await
            .unwrap()
            .iter()
            .map(|r| *r.id())
            .collect();
        assert_eq!(repo.count_by_user(&user("alice")).await.unwrap(), 2);
        assert_eq!(remaining, HashSet::from([saved[0], saved[2]]));
    }

    #[tokio::test]
    async fn count_is_per_user() {
        let repo = InMemorySavedResponseRepository::new();
        repo.insert(&SavedResponse::new(SavedResponseId::new(), user("alice"), "hi").unwrap())
            .await
            .unwrap();
        repo.insert(&SavedResponse::new(SavedResponseId::new(), user("bob"), "yo").unwrap())
            .await
            .unwrap();

        assert_eq!(repo.count_by_user(&user("alice")).await.unwrap(), 1);
        assert_eq!(repo.count_by_user(&user("carol")).await.unwrap(), 0);
    }
}
