use axum::{extract::State, response::Json};
use quill::{ErrorResponse, GenerationRequest, TitlesResponse};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    client::ModelClient,
    models::{errors::ApiError, generation::GenerationBody, state::QuillState},
    pipeline,
};

pub fn router(state: QuillState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(generate_titles))
        .with_state(state)
}

/// Suggest four titles for some content, each in a different format.
#[utoipa::path(
    post,
    path = "/generate",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Successfully generated titles", body = TitlesResponse),
        (status = 400, description = "Content is missing or was blocked by the safety filter", body = ErrorResponse),
        (status = 500, description = "The model's response was not a JSON array of titles or the model API failed", body = ErrorResponse)
    )
)]
#[axum::debug_handler(state = QuillState)]
pub async fn generate_titles(
    State(client): State<ModelClient>,
    GenerationBody(request): GenerationBody,
) -> Result<Json<TitlesResponse>, ApiError> {
    let response = pipeline::generate_titles(&client, request).await?;
    Ok(Json(TitlesResponse { response }))
}
