use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

use crate::utils;

/// Finish reason the model reports when it declines on safety grounds.
pub const SAFETY_FINISH_REASON: &str = "SAFETY";

#[derive(Clone, Debug, Deserialize)]
pub struct HttpClientConfig {
    #[serde(
        default = "utils::default_generation_base_url",
        deserialize_with = "utils::deserialize_with_envsubst"
    )]
    pub base_url: String,
    #[serde(default = "utils::default_generation_model")]
    pub model: String,
    #[serde(
        default = "utils::default_api_key",
        deserialize_with = "utils::deserialize_with_envsubst"
    )]
    pub api_key: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub params: HashMap<String, String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: utils::default_generation_base_url(),
            model: utils::default_generation_model(),
            api_key: utils::default_api_key(),
            headers: HashMap::new(),
            params: HashMap::new(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Part>>,
}

impl Content {
    pub fn user(text: String) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: Some(vec![Part { text: Some(text) }]),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Text of the single prompt this request carries.
    pub fn prompt(&self) -> Option<&str> {
        self.contents
            .first()?
            .parts
            .as_ref()?
            .first()?
            .text
            .as_deref()
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
    pub prompt_feedback: Option<PromptFeedback>,
}

/// What a model response amounts to once its shape has been inspected.
#[derive(Debug, PartialEq)]
pub enum ModelOutcome {
    SafetyRejected,
    Malformed,
    Text(String),
}

impl GenerateContentResponse {
    pub fn into_outcome(self) -> ModelOutcome {
        let blocked = self
            .prompt_feedback
            .as_ref()
            .is_some_and(|feedback| feedback.block_reason.is_some());
        if blocked {
            return ModelOutcome::SafetyRejected;
        }

        let Some(candidate) = self
            .candidates
            .and_then(|candidates| candidates.into_iter().next())
        else {
            return ModelOutcome::Malformed;
        };
        if candidate.finish_reason.as_deref() == Some(SAFETY_FINISH_REASON) {
            return ModelOutcome::SafetyRejected;
        }

        let text = candidate
            .content
            .and_then(|content| content.parts)
            .and_then(|parts| parts.into_iter().next())
            .and_then(|part| part.text);
        match text {
            Some(text) if !text.is_empty() => ModelOutcome::Text(text),
            _ => ModelOutcome::Malformed,
        }
    }
}

#[derive(Debug)]
pub enum ModelClientError {
    /// The request never got a response.
    ApiConnection(String),
    /// The provider answered with a non-success status.
    ApiStatus { status: u16, body: String },
    /// The provider's response body wasn't the expected JSON.
    ResponseJson(String),
}

impl fmt::Display for ModelClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiConnection(err) => write!(f, "error connecting to model API: {err}"),
            Self::ApiStatus { status, body } => {
                write!(f, "model API responded with status {status}: {body}")
            }
            Self::ResponseJson(err) => write!(f, "error parsing model API response: {err}"),
        }
    }
}

impl std::error::Error for ModelClientError {}
