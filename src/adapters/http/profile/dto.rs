//! HTTP DTOs for saved profile endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::profile::Profile;
use crate::domain::questions::AnswerSet;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Save the current answers under a name.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    #[serde(default)]
    pub answers: AnswerSet,
}

/// Overwrite a profile's answers.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAnswersRequest {
    pub answers: AnswerSet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenameProfileRequest {
    pub name: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub answers: AnswerSet,
    pub created_at: String,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id().to_string(),
            name: profile.name().to_string(),
            created_at: profile.created_at().to_rfc3339(),
            answers: profile.answers().clone(),
        }
    }
}

/// Profiles newest first.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileListResponse {
    pub profiles: Vec<ProfileResponse>,
}

impl From<Vec<Profile>> for ProfileListResponse {
    fn from(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: profiles.into_iter().map(ProfileResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ProfileId, UserId};

    #[test]
    fn create_request_defaults_answers() {
        let req: CreateProfileRequest = serde_json::from_str(r#"{"name":"Alex"}"#).unwrap();
        assert_eq!(req.name, "Alex");
        assert!(req.answers.is_empty());
    }

    #[test]
    fn response_serializes_answers_as_object() {
        let answers: AnswerSet = [("hobbies", "climbing")].into_iter().collect();
        let profile = Profile::new(
            ProfileId::new(),
            UserId::new("user-123").unwrap(),
            "Alex",
            answers,
        )
        .unwrap();

        let json = serde_json::to_value(ProfileResponse::from(profile)).unwrap();

        assert_eq!(json["name"], "Alex");
        assert_eq!(json["answers"]["hobbies"], "climbing");
        assert!(json["createdAt"].is_string());
    }
}
