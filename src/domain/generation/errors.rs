//! Generation-specific error types.

use crate::domain::foundation::ErrorCode;

/// Errors raised by the generation flow.
///
/// Provider failures are collapsed into one opaque `Failed` variant. Short or
/// empty completions are not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The completion call failed (transport, status, or body).
    Failed { reason: String },
    /// A generation is already in progress for this form session.
    AlreadyGenerating,
}

impl GenerationError {
    pub fn failed(reason: impl Into<String>) -> Self {
        GenerationError::Failed {
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            GenerationError::Failed { .. } => ErrorCode::GenerationFailed,
            GenerationError::AlreadyGenerating => ErrorCode::ValidationFailed,
        }
    }

    /// Message safe to show to callers. The failure reason stays internal.
    pub fn message(&self) -> String {
        match self {
            GenerationError::Failed { .. } => "generation failed".to_string(),
            GenerationError::AlreadyGenerating => "A generation is already in progress".to_string(),
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for GenerationError {}
