//! Question catalog - the fixed, ordered set of questions shown on the form.
//!
//! Each question belongs to one of two roles: `Speaker` questions describe the
//! user who wants to start the conversation, `Target` questions describe the
//! person being approached. The prompt builder relies on this split to phrase
//! the instruction from the right point of view.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whose trait a question describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionRole {
    /// The user asking for ice breakers.
    Speaker,
    /// The person the user wants to talk to.
    Target,
}

/// A single question on the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionDefinition {
    /// Identifier, unique within the catalog. Used as the answer key.
    pub id: String,
    /// Text displayed to the user.
    pub text: String,
    /// Guidance appended next to the answer in the model instruction.
    pub prompt: String,
    /// Whose trait the answer describes.
    pub role: QuestionRole,
    /// Sampling temperature hint in `[0, 1]`.
    pub temperature: f32,
}

impl QuestionDefinition {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        prompt: impl Into<String>,
        role: QuestionRole,
        temperature: f32,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            prompt: prompt.into(),
            role,
            temperature,
        }
    }
}

/// Errors raised while assembling a catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("duplicate question id '{0}'")]
    DuplicateId(String),

    #[error("question '{id}' has temperature {temperature}, expected a value in [0, 1]")]
    TemperatureOutOfRange { id: String, temperature: f32 },
}

/// Ordered, read-only collection of question definitions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QuestionCatalog {
    questions: Vec<QuestionDefinition>,
}

static STANDARD_CATALOG: Lazy<QuestionCatalog> = Lazy::new(|| {
    use QuestionRole::{Speaker, Target};

    let q = QuestionDefinition::new;
    QuestionCatalog {
        questions: vec![
            q(
                "feeling",
                "How's the other person feeling?",
                "Match the tone to how they are feeling right now",
                Target,
                0.6,
            ),
            q(
                "situation",
                "What's the situation?",
                "Make the opener fit the setting we are both in",
                Target,
                0.6,
            ),
            q(
                "comeAcross",
                "How would you like to come across?",
                "Phrase every opener so I come across this way",
                Speaker,
                0.7,
            ),
            q(
                "theirAge",
                "What's their age?",
                "Keep references appropriate for their age",
                Target,
                0.5,
            ),
            q(
                "yourAge",
                "What's your age?",
                "Keep my voice natural for my age",
                Speaker,
                0.5,
            ),
            q(
                "zodiac",
                "What's their zodiac sign?",
                "A light, playful nod to their sign is welcome",
                Target,
                0.8,
            ),
            q(
                "origin",
                "Where are they from?",
                "Curiosity about where they are from can work",
                Target,
                0.5,
            ),
            q(
                "hobbies",
                "What are their hobbies?",
                "Build on their hobbies",
                Target,
                0.7,
            ),
            q(
                "loves",
                "What do they love?",
                "Lean into what they love",
                Target,
                0.7,
            ),
            q(
                "dislikes",
                "What do they dislike?",
                "Steer clear of what they dislike",
                Target,
                0.5,
            ),
            q(
                "mbti",
                "What's their MBTI type?",
                "Suit the opener to their personality type",
                Target,
                0.5,
            ),
            q(
                "books",
                "What are their favorite books?",
                "Their reading taste can spark a question",
                Target,
                0.7,
            ),
            q(
                "music",
                "What's their favorite music?",
                "Their taste in music is fair game",
                Target,
                0.7,
            ),
            q(
                "humor",
                "How would you describe their sense of humor?",
                "Match their sense of humor",
                Target,
                0.8,
            ),
            q(
                "previousTopics",
                "What topics have you chatted about before?",
                "Pick up threads from earlier conversations instead of repeating them",
                Target,
                0.6,
            ),
            q(
                "style",
                "What's their style?",
                "Their style can inspire a genuine compliment",
                Target,
                0.7,
            ),
            q(
                "passions",
                "What are they passionate about?",
                "Show genuine interest in their passions",
                Target,
                0.8,
            ),
            q(
                "vibe",
                "What's their vibe like?",
                "Match their overall vibe",
                Target,
                0.8,
            ),
            q(
                "preferredTopics",
                "What do you prefer to talk about?",
                "Steer toward topics I enjoy talking about",
                Speaker,
                0.6,
            ),
        ],
    }
});

impl QuestionCatalog {
    /// Builds a catalog, rejecting duplicate ids and out-of-range temperatures.
    pub fn new(questions: Vec<QuestionDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateId(question.id.clone()));
            }
            if !(0.0..=1.0).contains(&question.temperature) {
                return Err(CatalogError::TemperatureOutOfRange {
                    id: question.id.clone(),
                    temperature: question.temperature,
                });
            }
        }
        Ok(Self { questions })
    }

    /// The catalog served by the application.
    pub fn standard() -> &'static QuestionCatalog {
        &STANDARD_CATALOG
    }

    /// Looks up a definition by exact id.
    pub fn get(&self, id: &str) -> Option<&QuestionDefinition> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// All definitions in display order.
    pub fn definitions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    /// Definitions with the given role, in display order.
    pub fn by_role(&self, role: QuestionRole) -> impl Iterator<Item = &QuestionDefinition> {
        self.questions.iter().filter(move |q| q.role == role)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
