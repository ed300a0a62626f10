use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::models::{
    config::{API_KEY_HEADER, ServerConfig},
    errors::{ApiError, ErrorKind, UNAUTHORIZED_MESSAGE},
};

/// Reject requests without one of the configured API keys. Passes everything
/// through when no keys are configured.
pub async fn require_api_key(
    State(config): State<ServerConfig>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if config.api_keys.is_empty() {
        return Ok(next.run(request).await);
    }

    let authorized = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|key| config.api_keys.iter().any(|api_key| api_key == key));
    if authorized {
        Ok(next.run(request).await)
    } else {
        warn!("rejecting {} without a valid API key", request.uri().path());
        Err(ApiError::new(ErrorKind::Unauthorized, UNAUTHORIZED_MESSAGE))
    }
}
