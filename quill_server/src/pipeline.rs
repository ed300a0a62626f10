use quill::GenerationRequest;
use tracing::{debug, error, info, warn};

use crate::{
    client::ModelClient,
    models::{
        client::{ModelClientError, ModelOutcome},
        errors::{ApiError, ErrorKind, UNEXPECTED_FORMAT_MESSAGE},
        generation::{EndpointKind, parse_titles},
    },
};

/// Validate the request, prompt the model once, and classify its response.
/// Returns the generated text exactly as the model produced it.
pub async fn generate(
    client: &ModelClient,
    kind: EndpointKind,
    request: GenerationRequest,
) -> Result<String, ApiError> {
    // Reject requests without content before anything reaches the model.
    let request = kind.validate(request).inspect_err(|_| {
        warn!("{kind:?} request is missing content");
    })?;
    let generate_content_request = kind.to_generate_content_request(&request);

    // A single call with no retries. Connection and status failures are
    // reported as internal errors while an unreadable body means the model's
    // output couldn't be processed.
    debug!("prompting model for {kind:?}");
    let response = client
        .generate(generate_content_request)
        .await
        .map_err(|err| {
            error!("{kind:?} generation failed: {err}");
            match err {
                ModelClientError::ResponseJson(_) => {
                    ApiError::new(ErrorKind::ProcessingError, kind.processing_error_message())
                }
                ModelClientError::ApiConnection(_) | ModelClientError::ApiStatus { .. } => {
                    ApiError::internal()
                }
            }
        })?;

    // Classify the response shape and hand back the text untouched.
    match response.into_outcome() {
        ModelOutcome::SafetyRejected => {
            info!("{kind:?} generation blocked by the safety filter");
            Err(ApiError::safety_filter())
        }
        ModelOutcome::Malformed => {
            warn!("{kind:?} generation returned no usable text");
            Err(ApiError::new(
                ErrorKind::ProcessingError,
                kind.processing_error_message(),
            ))
        }
        ModelOutcome::Text(text) => Ok(text),
    }
}

/// Same as [`generate`] for titles, with the text parsed as a JSON array.
pub async fn generate_titles(
    client: &ModelClient,
    request: GenerationRequest,
) -> Result<Vec<String>, ApiError> {
    let text = generate(client, EndpointKind::Title, request).await?;
    parse_titles(&text).ok_or_else(|| {
        warn!("generated titles aren't a non-empty JSON array of strings");
        ApiError::new(ErrorKind::ProcessingError, UNEXPECTED_FORMAT_MESSAGE)
    })
}
