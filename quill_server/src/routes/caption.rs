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
        .routes(routes!(generate_caption))
        .with_state(state)
}

/// Create a social media caption for some content.
///
/// Example request bodies:
/// - `{"content": "new product launch"}`
/// - `{"content": "our summer sale", "style": "playful", "context": "TikTok"}`
#[utoipa::path(
    post,
    path = "/generate",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Successfully generated a caption", body = TextResponse),
        (status = 400, description = "Content is missing or was blocked by the safety filter", body = ErrorResponse),
        (status = 500, description = "The model's response was unusable or the model API failed", body = ErrorResponse)
    )
)]
#[axum::debug_handler(state = QuillState)]
pub async fn generate_caption(
    State(client): State<ModelClient>,
    GenerationBody(request): GenerationBody,
) -> Result<Json<TextResponse>, ApiError> {
    let response = pipeline::generate(&client, EndpointKind::Caption, request).await?;
    Ok(Json(TextResponse { response }))
}
