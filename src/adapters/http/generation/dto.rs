//! HTTP DTOs for ice breaker generation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::generation::AnswerInput;

/// Body returned to clients for any generation failure.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate ice breakers";

/// `{ "answers": { id: { value, prompt?, temperature? } }, "isFirstTime": bool }`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIceBreakersRequest {
    #[serde(default)]
    pub answers: BTreeMap<String, AnswerInput>,
    #[serde(default)]
    pub is_first_time: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIceBreakersResponse {
    pub ice_breakers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accepts_optional_overrides() {
        let json = r#"{
            "answers": {
                "hobbies": { "value": "climbing" },
                "custom": { "value": "x", "prompt": "Use this", "temperature": 0.9 }
            },
            "isFirstTime": true
        }"#;

        let req: GenerateIceBreakersRequest = serde_json::from_str(json).unwrap();

        assert!(req.is_first_time);
        assert_eq!(req.answers["hobbies"], AnswerInput::new("climbing"));
        assert_eq!(req.answers["custom"].prompt.as_deref(), Some("Use this"));
        assert_eq!(req.answers["custom"].temperature, Some(0.9));
    }

    #[test]
    fn first_time_defaults_to_false() {
        let req: GenerateIceBreakersRequest = serde_json::from_str(r#"{"answers":{}}"#).unwrap();
        assert!(!req.is_first_time);
    }

    #[test]
    fn response_uses_camel_case() {
        let body = GenerateIceBreakersResponse {
            ice_breakers: vec!["Hi".to_string()],
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({ "iceBreakers": ["Hi"] })
        );
    }
}
