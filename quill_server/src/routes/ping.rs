use axum::response::Json;
use chrono::{SecondsFormat, Utc};
use quill::PingResponse;
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router() -> OpenApiRouter {
    OpenApiRouter::new().routes(routes!(ping))
}

/// Check that the server is up.
#[utoipa::path(
    get,
    path = "/ping",
    responses(
        (status = 200, description = "Server is up", body = PingResponse)
    )
)]
#[axum::debug_handler]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "Hello world".to_string(),
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
