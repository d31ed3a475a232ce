//! In-memory ProfileRepository.
//!
//! Used by tests and for running the server without a database.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, UserId};
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

/// Profiles kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<Vec<Profile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored profiles across all users.
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn insert(&self, profile: &Profile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        if profiles.iter().any(|p| p.id() == profile.id()) {
            return Err(DomainError::database(format!(
                "duplicate key value violates unique constraint: {}",
                profile.id()
            )));
        }
        profiles.push(profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &Profile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        let stored = profiles
            .iter_mut()
            .find(|p| p.id() == profile.id() && p.user_id() == profile.user_id())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ProfileNotFound,
                    format!("Profile not found: {}", profile.id()),
                )
            })?;
        *stored = profile.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<Profile>, DomainError> {
        Ok(self
            .profiles
            .read()
            .await
            .iter()
            .find(|p| p.id() == id)
            .cloned())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Profile>, DomainError> {
        let mut owned: Vec<Profile> = self
            .profiles
            .read()
            .await
            .iter()
            .rev()
            .filter(|p| p.is_owner(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(owned)
    }

    async fn delete(&self, id: &ProfileId, user_id: &UserId) -> Result<bool, DomainError> {
        let mut profiles = self.profiles.write().await;
        let before = profiles.len();
        profiles.retain(|p| !(p.id() == id && p.is_owner(user_id)));
        Ok(profiles.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questions::AnswerSet;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn profile(owner: &str, name: &str) -> Profile {
        Profile::new(ProfileId::new(), user(owner), name, AnswerSet::new()).unwrap()
    }

    #[tokio::test]
    async fn list_is_newest_first_and_owner_scoped() {
        let repo = InMemoryProfileRepository::new();
        let first = profile("alice", "First");
        let second = profile("alice", "Second");
        repo.insert(&first).await.unwrap();
        repo.insert(&profile("bob", "Other")).await.unwrap();
        repo.insert(&second).await.unwrap();

        let listed = repo.list_by_user(&user("alice")).await.unwrap();

        let names: Vec<&str> = listed.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn delete_requires_matching_owner() {
        let repo = InMemoryProfileRepository::new();
        let p = profile("alice", "Mine");
        repo.insert(&p).await.unwrap();

        assert!(!repo.delete(p.id(), &user("bob")).await.unwrap());
        assert!(repo.delete(p.id(), &user("alice")).await.unwrap());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn update_unknown_profile_is_not_found() {
        let repo = InMemoryProfileRepository::new();
        let err = repo.update(&profile("alice", "Ghost")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProfileNotFound);
    }
}
