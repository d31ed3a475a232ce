//! Generation module - prompt rendering, completion parsing and form state.

mod errors;
mod extractor;
mod prompt;
mod session;

pub use errors::GenerationError;
pub use extractor::extract_ice_breakers;
pub use prompt::{
    AnswerInput, AnsweredQuestion, GenerationRequest, PromptBuilder, RenderedPrompt,
    DEFAULT_TEMPERATURE, FIRST_TIME_TEMPERATURE, ICE_BREAKER_COUNT, SYSTEM_INSTRUCTION,
};
pub use session::{FormSession, GenerationStatus};
