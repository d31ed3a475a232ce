//! Profile aggregate.
//!
//! A profile is a named snapshot of the form's answers, owned by one user.
//! Name and answers change independently; ownership never changes.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProfileId, Timestamp, UserId, ValidationError};
use crate::domain::questions::AnswerSet;

/// Maximum length for a profile name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Profile aggregate - a saved answer set.
///
/// # Invariants
///
/// - `name` is trimmed, 1-100 characters
/// - `user_id` is fixed at creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    id: ProfileId,
    user_id: UserId,
    name: String,
    answers: AnswerSet,
    created_at: Timestamp,
}

impl Profile {
    /// Create a new profile.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `TooLong` if the name is invalid
    pub fn new(
        id: ProfileId,
        user_id: UserId,
        name: &str,
        answers: AnswerSet,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            user_id,
            name: Self::validate_name(name)?,
            answers,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute a profile from persistence (no validation).
    pub fn reconstitute(
        id: ProfileId,
        user_id: UserId,
        name: String,
        answers: AnswerSet,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            answers,
            created_at,
        }
    }

    pub fn id(&self) -> &ProfileId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Checks if the given user owns this profile.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Rename the profile, returning the old name.
    pub fn rename(&mut self, new_name: &str) -> Result<String, ValidationError> {
        let name = Self::validate_name(new_name)?;
        Ok(std::mem::replace(&mut self.name, name))
    }

    /// Replace the stored answers wholesale.
    pub fn replace_answers(&mut self, answers: AnswerSet) {
        self.answers = answers;
    }

    fn validate_name(name: &str) -> Result<String, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let length = trimmed.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(ValidationError::too_long("name", MAX_NAME_LENGTH, length));
        }
        Ok(trimmed.to_string())
    }
}
