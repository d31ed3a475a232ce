//! Profile-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, ValidationError};

/// Profile-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// No authenticated user.
    Unauthenticated,
    /// Profile was not found.
    NotFound(ProfileId),
    /// Profile belongs to another user.
    Forbidden,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ProfileError {
    pub fn not_found(id: ProfileId) -> Self {
        ProfileError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ProfileError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ProfileError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ProfileError::Unauthenticated => ErrorCode::Unauthenticated,
            ProfileError::NotFound(_) => ErrorCode::ProfileNotFound,
            ProfileError::Forbidden => ErrorCode::Forbidden,
            ProfileError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ProfileError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ProfileError::Unauthenticated => "Not authenticated".to_string(),
            ProfileError::NotFound(id) => format!("Profile not found: {}", id),
            ProfileError::Forbidden => "Permission denied".to_string(),
            ProfileError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ProfileError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ProfileError {}

impl From<ValidationError> for ProfileError {
    fn from(err: ValidationError) -> Self {
        ProfileError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for ProfileError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Unauthenticated => ProfileError::Unauthenticated,
            ErrorCode::Forbidden => ProfileError::Forbidden,
            ErrorCode::ValidationFailed => ProfileError::validation("unknown", err.message),
            _ => ProfileError::Infrastructure(err.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_matches_client_message() {
        assert_eq!(ProfileError::Unauthenticated.to_string(), "Not authenticated");
        assert_eq!(ProfileError::Unauthenticated.code(), ErrorCode::Unauthenticated);
    }

    #[test]
    fn validation_error_keeps_field() {
        let err: ProfileError = ValidationError::empty_field("name").into();
        assert!(matches!(err, ProfileError::ValidationFailed { ref field, .. } if field == "name"));
    }

    #[test]
    fn store_error_surfaces_verbatim() {
        let err: ProfileError = DomainError::database("connection refused").into();
        assert_eq!(err, ProfileError::Infrastructure("connection refused".to_string()));
    }
}
