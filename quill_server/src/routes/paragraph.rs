use axum::{extract::State, response::Json};
use quill::{ErrorResponse, GenerationRequest, TextResponse};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    client::ModelClient,
    models::{
        errors::ApiError,
        generation::{EndpointKind, GenerationBody},
        state::QuillState,
    },
    pipeline,
};

pub fn router(state: QuillState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(summarize))
        .routes(routes!(generate_paragraph))
        .with_state(state)
}

/// Summarize text.
///
/// The `tone` selects the summary length: short, medium, long, brief, or
/// default. Anything else is treated as default.
#[utoipa::path(
    post,
    path = "/pargraph/summery",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Successfully summarized content", body = TextResponse),
        (status = 400, description = "Content is missing or was blocked by the safety filter", body = ErrorResponse),
        (status = 500, description = "The model's response was unusable or the model API failed", body = ErrorResponse)
    )
)]
#[axum::debug_handler(state = QuillState)]
pub async fn summarize(
    State(client): State<ModelClient>,
    GenerationBody(request): GenerationBody,
) -> Result<Json<TextResponse>, ApiError> {
    let response = pipeline::generate(&client, EndpointKind::Summarize, request).await?;
    Ok(Json(TextResponse { response }))
}

/// Generate a single paragraph from content, with an optional tone and style.
#[utoipa::path(
    post,
    path = "/paragraph/generate",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Successfully generated a paragraph", body = TextResponse),
        (status = 400, description = "Content is missing or was blocked by the safety filter", body = ErrorResponse),
        (status = 500, description = "The model's response was unusable or the model API failed", body = ErrorResponse)
    )
)]
#[axum::debug_handler(state = QuillState)]
pub async fn generate_paragraph(
    State(client): State<ModelClient>,
    GenerationBody(request): GenerationBody,
) -> Result<Json<TextResponse>, ApiError> {
    let response = pipeline::generate(&client, EndpointKind::Paragraph, request).await?;
    Ok(Json(TextResponse { response }))
}
