//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Text-completion service
//! - `SessionValidator` - Bearer token validation
//! - `ProfileRepository` - Saved profile persistence
//! - `SavedResponseRepository` - Favourited ice breaker persistence

mod ai_provider;
mod profile_repository;
mod saved_response_repository;
mod session_validator;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, Message, MessageRole,
    ProviderInfo, TokenUsage,
};
pub use profile_repository::ProfileRepository;
pub use saved_response_repository::SavedResponseRepository;
pub use session_validator::SessionValidator;
