//! Caller-owned form state around the generation flow.

use serde::Serialize;

use super::errors::GenerationError;
use crate::domain::foundation::ProfileId;
use crate::domain::questions::{AnswerCollector, AnswerSet};

/// Whether a generation is currently outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    #[default]
    Idle,
    Generating,
}

/// One user's form: the answers being edited, which saved profile (if any)
/// they came from, and the latest generated ice breakers.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    pub collector: AnswerCollector,
    pub profile_id: Option<ProfileId>,
    pub profile_name: Option<String>,
    pub ice_breakers: Vec<String>,
    status: GenerationStatus,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    pub fn is_generating(&self) -> bool {
        self.status == GenerationStatus::Generating
    }

    /// `Idle -> Generating`. Rejected while a generation is outstanding.
    pub fn begin(&mut self) -> Result<(), GenerationError> {
        if self.is_generating() {
            return Err(GenerationError::AlreadyGenerating);
        }
        self.status = GenerationStatus::Generating;
        Ok(())
    }

    /// `Generating -> Idle`, on success and failure alike.
    pub fn finish(&mut self) {
        self.status = GenerationStatus::Idle;
    }

    /// Switches the form to a saved profile's answers.
    pub fn load_profile(&mut self, id: ProfileId, name: impl Into<String>, snapshot: AnswerSet) {
        self.collector.load(snapshot);
        self.profile_id = Some(id);
        self.profile_name = Some(name.into());
    }

    /// Drops the profile association and clears the answers.
    pub fn reset(&mut self) {
        self.collector.clear();
        self.profile_id = None;
        self.profile_name = None;
        self.ice_breakers.clear();
    }
}
