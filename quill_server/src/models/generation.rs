use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use quill::GenerationRequest;
use tracing::debug;

use crate::{
    models::{
        client::GenerateContentRequest,
        errors::{ApiError, ErrorKind, INVALID_BODY_MESSAGE},
        prompts::{
            CaptionPrompt, ParagraphPrompt, Prompt, SummaryLength, SummaryPrompt, TitlePrompt,
        },
    },
    utils,
};

pub const DEFAULT_TONE: &str = "concise";
pub const DEFAULT_STYLE: &str = "neutral";
pub const DEFAULT_TITLE_CONTEXT: &str = "blog";
pub const DEFAULT_CAPTION_CONTEXT: &str = "Instagram";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EndpointKind {
    Summarize,
    Paragraph,
    Title,
    Caption,
}

impl EndpointKind {
    pub fn missing_content_message(&self) -> &'static str {
        match self {
            Self::Summarize => "Content is required for summarization.",
            Self::Paragraph => "Content is required for paragraph generation",
            Self::Title => "Content is required for title generation.",
            Self::Caption => "Content is required for caption generation",
        }
    }

    pub fn processing_error_message(&self) -> &'static str {
        match self {
            Self::Summarize => "Failed to generate summary. Please try again later.",
            Self::Paragraph => "Failed to generate a paragraph. Please try again later.",
            Self::Title => "Failed to generate a title. Please try again later.",
            Self::Caption => "Failed to generate a caption. Please try again later.",
        }
    }

    fn default_context(&self) -> &'static str {
        match self {
            Self::Caption => DEFAULT_CAPTION_CONTEXT,
            _ => DEFAULT_TITLE_CONTEXT,
        }
    }

    /// Check the required fields and fill in defaults for the optional ones.
    pub fn validate(&self, request: GenerationRequest) -> Result<ValidatedRequest, ApiError> {
        let GenerationRequest {
            content,
            tone,
            style,
            context,
        } = request;
        let content = content
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                ApiError::new(ErrorKind::InvalidRequest, self.missing_content_message())
            })?;
        Ok(ValidatedRequest {
            content,
            tone: tone.unwrap_or_else(|| DEFAULT_TONE.to_string()),
            style: style.unwrap_or_else(|| DEFAULT_STYLE.to_string()),
            context: context.unwrap_or_else(|| self.default_context().to_string()),
        })
    }

    pub fn to_generate_content_request(
        &self,
        request: &ValidatedRequest,
    ) -> GenerateContentRequest {
        let ValidatedRequest {
            content,
            tone,
            style,
            context,
        } = request;
        match self {
            Self::Summarize => SummaryPrompt {
                content,
                length: SummaryLength::from_tone(tone),
            }
            .to_generate_content_request(),
            Self::Paragraph => ParagraphPrompt {
                content,
                tone,
                style,
            }
            .to_generate_content_request(),
            Self::Title => TitlePrompt {
                content,
                tone,
                style,
                context,
            }
            .to_generate_content_request(),
            Self::Caption => CaptionPrompt {
                content,
                style,
                context,
            }
            .to_generate_content_request(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedRequest {
    pub content: String,
    pub tone: String,
    pub style: String,
    pub context: String,
}

/// Request body extractor. Reads the body regardless of content type so a
/// missing or unparsable body turns into a JSON `Invalid Request` error
/// instead of a plain-text rejection.
pub struct GenerationBody(pub GenerationRequest);

impl<S> FromRequest<S> for GenerationBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            debug!("unable to read request body: {err}");
            ApiError::new(ErrorKind::InvalidRequest, INVALID_BODY_MESSAGE)
        })?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(GenerationRequest::default()));
        }
        let request = serde_json::from_slice::<GenerationRequest>(&bytes).map_err(|err| {
            debug!("unable to parse request body: {err}");
            ApiError::new(ErrorKind::InvalidRequest, INVALID_BODY_MESSAGE)
        })?;
        Ok(Self(request))
    }
}

/// Parse generated titles. Only a non-empty JSON array of strings counts.
pub fn parse_titles(text: &str) -> Option<Vec<String>> {
    let titles = serde_json::from_str::<Vec<String>>(utils::extract_json(text)).ok()?;
    (!titles.is_empty()).then_some(titles)
}
