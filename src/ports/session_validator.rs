//! Session validation port for access token validation.
//!
//! Provider-agnostic contract for turning a bearer token into a user
//! identity. The HS256 validator and the test mock both implement it.
//!
//! All implementations MUST validate:
//! - **Signature**: token was signed by the identity provider
//! - **Audience (aud)**: token was issued for this application
//! - **Expiry (exp)**: token is not expired

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// # Contract
///
/// - `AuthError::InvalidToken` for malformed tokens or bad signatures
/// - `AuthError::TokenExpired` for expired tokens
/// - `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
