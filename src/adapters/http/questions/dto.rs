//! HTTP DTOs for the question catalog.

use serde::Serialize;

use crate::domain::questions::{QuestionDefinition, QuestionRole};

/// One question as shown on the form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: String,
    pub text: String,
    pub prompt: String,
    pub role: QuestionRole,
    pub temperature: f32,
}

impl From<&QuestionDefinition> for QuestionResponse {
    fn from(def: &QuestionDefinition) -> Self {
        Self {
            id: def.id.clone(),
            text: def.text.clone(),
            prompt: def.prompt.clone(),
            role: def.role,
            temperature: def.temperature,
        }
    }
}

/// Catalog in display order.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionResponse>,
}
