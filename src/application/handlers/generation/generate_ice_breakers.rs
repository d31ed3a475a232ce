//! GenerateIceBreakersHandler - runs the prompt, completion and extraction
//! pipeline.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::CompletionGateway;
use crate::domain::foundation::UserId;
use crate::domain::generation::{
    extract_ice_breakers, AnswerInput, FormSession, GenerationError, GenerationRequest,
    PromptBuilder, ICE_BREAKER_COUNT,
};
use crate::domain::questions::QuestionCatalog;
use crate::ports::AIProvider;

/// Command to generate ice breakers from answers.
#[derive(Debug, Clone, Default)]
pub struct GenerateIceBreakersCommand {
    pub answers: BTreeMap<String, AnswerInput>,
    pub first_time: bool,
    /// Caller identity, used for logging only.
    pub user_id: Option<UserId>,
}

/// Result of a generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateIceBreakersResult {
    /// At most three ice breakers; fewer when the model produced fewer.
    pub ice_breakers: Vec<String>,
    /// Temperature the completion was requested with.
    pub temperature: f32,
}

/// Handler for generating ice breakers.
pub struct GenerateIceBreakersHandler {
    gateway: CompletionGateway,
    catalog: Arc<QuestionCatalog>,
}

impl GenerateIceBreakersHandler {
    /// Creates a handler using the standard question catalog.
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self::with_catalog(provider, Arc::new(QuestionCatalog::standard().clone()))
    }

    pub fn with_catalog(provider: Arc<dyn AIProvider>, catalog: Arc<QuestionCatalog>) -> Self {
        Self {
            gateway: CompletionGateway::new(provider),
            catalog,
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub async fn handle(
        &self,
        cmd: GenerateIceBreakersCommand,
    ) -> Result<GenerateIceBreakersResult, GenerationError> {
        let request = GenerationRequest::from_inputs(cmd.answers, &self.catalog, cmd.first_time);
        self.run(&request, cmd.user_id.as_ref()).await
    }

    /// Generates from a form session's current answers, driving its
    /// `Idle -> Generating -> Idle` transitions. The session is back to idle
    /// whether generation succeeds or fails.
    pub async fn generate_for_session(
        &self,
        session: &mut FormSession,
        first_time: bool,
    ) -> Result<Vec<String>, GenerationError> {
        session.begin()?;

        let request = GenerationRequest::from_answers(
            session.collector.answers(),
            &self.catalog,
            first_time,
        );
        let outcome = self.run(&request, None).await;
        session.finish();

        let result = outcome?;
        session.ice_breakers = result.ice_breakers.clone();
        Ok(result.ice_breakers)
    }

    async fn run(
        &self,
        request: &GenerationRequest,
        user_id: Option<&UserId>,
    ) -> Result<GenerateIceBreakersResult, GenerationError> {
        let prompt = PromptBuilder::render(request);
        let raw = self.gateway.complete(&prompt).await?;
        let ice_breakers = extract_ice_breakers(&raw);

        if ice_breakers.len() < ICE_BREAKER_COUNT {
            tracing::warn!(
                parsed = ice_breakers.len(),
                "Completion yielded fewer ice breakers than requested"
            );
        }
        tracing::info!(
            user_id = user_id.map(UserId::as_str),
            answered = request.answers.len(),
            first_time = request.first_time,
            temperature = prompt.temperature,
            count = ice_breakers.len(),
            "Ice breakers generated"
        );

        Ok(GenerateIceBreakersResult {
            ice_breakers,
            temperature: prompt.temperature,
        })
    }
}
