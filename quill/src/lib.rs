use bon::Builder;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body accepted by every generation endpoint. Only `content` is required;
/// the server fills in defaults for everything else.
#[derive(Builder, Clone, Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct GenerationRequest {
    /// Text to summarize or generate from.
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Tone of the output. For summaries one of short, medium, long, brief,
    /// or default. Defaults to "concise".
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    /// Writing style of the output. Defaults to "neutral".
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Where the output will be published, e.g. "blog" or "Instagram".
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct TextResponse {
    pub response: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct TitlesResponse {
    pub response: Vec<String>,
}

/// Body of every failed request.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct PingResponse {
    pub message: String,
    pub status: String,
    pub timestamp: String,
}
