use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use quill::ErrorResponse;
use std::fmt;

pub const HIGH_TRAFFIC_MESSAGE: &str = "An error occurred while processing your request. \
    Currently, we are experiencing a high volume of traffic. Please try to generate your \
    request one more time.";
pub const NOT_FOUND_MESSAGE: &str = "The requested API route does not exist.";
pub const SAFETY_FILTER_MESSAGE: &str = "The content was blocked by the model's safety \
    filter. Please revise your content and try again.";
pub const UNAUTHORIZED_MESSAGE: &str = "A valid API key is required.";
pub const UNEXPECTED_FORMAT_MESSAGE: &str =
    "The response was not in the expected format. Please try again later.";
pub const INVALID_BODY_MESSAGE: &str = "The request body must be a JSON object.";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ErrorKind {
    InvalidRequest,
    Unauthorized,
    SafetyFilterTriggered,
    ProcessingError,
    InternalServerError,
    NotFound,
}

impl ErrorKind {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest | Self::SafetyFilterTriggered => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::ProcessingError | Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::InvalidRequest => "Invalid Request",
            Self::Unauthorized => "Unauthorized",
            Self::SafetyFilterTriggered => "Safety Filter Triggered",
            Self::ProcessingError => "Processing Error",
            Self::InternalServerError => "Internal Server Error",
            Self::NotFound => "Not Found",
        };
        write!(f, "{repr}")
    }
}

/// An error that's rendered as a JSON `{error, message}` body with the
/// status belonging to its kind.
#[derive(Debug)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::new(ErrorKind::InternalServerError, HIGH_TRAFFIC_MESSAGE)
    }

    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound, NOT_FOUND_MESSAGE)
    }

    pub fn safety_filter() -> Self {
        Self::new(ErrorKind::SafetyFilterTriggered, SAFETY_FILTER_MESSAGE)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.kind.to_string(),
            message: self.message,
        };
        (self.kind.status(), Json(body)).into_response()
    }
}
