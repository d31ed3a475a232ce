//! Saved response entity.
//!
//! One favourited ice breaker. Immutable once created; the only operation
//! after creation is deletion.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SavedResponseId, Timestamp, UserId, ValidationError};

/// A single ice breaker the user chose to keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedResponse {
    id: SavedResponseId,
    user_id: UserId,
    text: String,
    created_at: Timestamp,
}

impl SavedResponse {
    /// Create a new saved response from the ice breaker text.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the text is blank
    pub fn new(id: SavedResponseId, user_id: UserId, text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        Ok(Self {
            id,
            user_id,
            text: text.to_string(),
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitute from persistence (no validation).
    pub fn reconstitute(
        id: SavedResponseId,
        user_id: UserId,
        text: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            text,
            created_at,
        }
    }

    pub fn id(&self) -> &SavedResponseId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}
