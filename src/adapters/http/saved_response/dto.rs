//! HTTP DTOs for saved responses.

use serde::{Deserialize, Serialize};

use crate::domain::saved_response::SavedResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct SaveResponseRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedResponseResponse {
    pub id: String,
    pub text: String,
    pub created_at: String,
}

impl From<SavedResponse> for SavedResponseResponse {
    fn from(response: SavedResponse) -> Self {
        Self {
            id: response.id().to_string(),
            text: response.text().to_string(),
            created_at: response.created_at().to_rfc3339(),
        }
    }
}

/// Saved responses newest first.
#[derive(Debug, Clone, Serialize)]
pub struct SavedResponseListResponse {
    pub responses: Vec<SavedResponseResponse>,
}

impl From<Vec<SavedResponse>> for SavedResponseListResponse {
    fn from(responses: Vec<SavedResponse>) -> Self {
        Self {
            responses: responses.into_iter().map(SavedResponseResponse::from).collect(),
        }
    }
}
