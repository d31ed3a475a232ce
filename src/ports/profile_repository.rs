//! ProfileRepository port for saved profile persistence.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProfileId, UserId};
use crate::domain::profile::Profile;

/// Repository for named answer sets.
///
/// Writes are scoped by the owner recorded on the profile; deletes take the
/// caller's id and only remove rows that caller owns.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Insert a new profile.
    async fn insert(&self, profile: &Profile) -> Result<(), DomainError>;

    /// Persist name and answers of an existing profile.
    ///
    /// Returns `ProfileNotFound` if no row with that id and owner exists.
    async fn update(&self, profile: &Profile) -> Result<(), DomainError>;

    /// Find a profile by id, regardless of owner.
    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<Profile>, DomainError>;

    /// All profiles of a user, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Profile>, DomainError>;

    /// Delete a profile owned by `user_id`. Returns whether a row was removed.
    async fn delete(&self, id: &ProfileId, user_id: &UserId) -> Result<bool, DomainError>;
}
