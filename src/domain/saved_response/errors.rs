//! Saved response error types.

use crate::domain::foundation::{DomainError, ErrorCode, SavedResponseId, ValidationError};

/// Saved response errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedResponseError {
    /// No authenticated user.
    Unauthenticated,
    /// Response was not found.
    NotFound(SavedResponseId),
    /// Response belongs to another user.
    Forbidden,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl SavedResponseError {
    pub fn not_found(id: SavedResponseId) -> Self {
        SavedResponseError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SavedResponseError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SavedResponseError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SavedResponseError::Unauthenticated => ErrorCode::Unauthenticated,
            SavedResponseError::NotFound(_) => ErrorCode::SavedResponseNotFound,
            SavedResponseError::Forbidden => ErrorCode::Forbidden,
            SavedResponseError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SavedResponseError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SavedResponseError::Unauthenticated => "Not authenticated".to_string(),
            SavedResponseError::NotFound(id) => format!("Saved response not found: {}", id),
            SavedResponseError::Forbidden => "Permission denied".to_string(),
            SavedResponseError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SavedResponseError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SavedResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SavedResponseError {}

impl From<ValidationError> for SavedResponseError {
    fn from(err: ValidationError) -> Self {
        SavedResponseError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for SavedResponseError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Unauthenticated => SavedResponseError::Unauthenticated,
            ErrorCode::Forbidden => SavedResponseError::Forbidden,
            ErrorCode::ValidationFailed => SavedResponseError::validation("unknown", err.message),
            _ => SavedResponseError::Infrastructure(err.message),
        }
    }
}
