use utoipa_axum::router::OpenApiRouter;

use crate::models::{errors::ApiError, state::QuillState};

pub mod caption;
pub mod paragraph;
pub mod ping;
pub mod title;

/// All generation endpoints, meant to be nested under `/api`.
pub fn api_router(state: QuillState) -> OpenApiRouter {
    OpenApiRouter::new()
        .merge(paragraph::router(state.clone()))
        .nest("/title", title::router(state.clone()))
        .nest("/caption", caption::router(state))
}

/// Fallback for any unmatched path or method.
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
