use std::any::Any;

use axum::{
    Router,
    http::{HeaderName, Method, header},
    middleware,
    response::{IntoResponse, Response},
};
use ctrlc::set_handler;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::error;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

mod auth;
mod client;
pub mod models;
pub mod pipeline;
pub mod routes;
mod utils;

pub use client::ModelClient;
use models::{
    config::{API_KEY_HEADER, QuillConfig},
    errors::ApiError,
    state::QuillState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Content Generation Server",
    description = "Endpoints for summarizing text and generating paragraphs, titles, and captions"
))]
struct ApiDoc;

/// Set up logging and signal handling, then build the shared state from the
/// environment and optional config file.
pub fn init() -> Result<QuillState, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    // Load .env up front so config values can reference its variables.
    dotenvy::dotenv().ok();
    let config = QuillConfig::from_env()?;
    QuillState::new(config)
}

/// Build the full application router: generation endpoints (also served
/// under `/v1`), docs, the JSON 404 fallback, and the middleware stack.
pub fn app(state: QuillState) -> Router {
    // Generation endpoints live under "/api" and are the only routes guarded
    // by the API key check. Their docs are split off so the layer can be
    // applied to the plain router.
    let (api_router, mut openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routes::api_router(state.clone()))
        .split_for_parts();
    let api_router =
        api_router.route_layer(middleware::from_fn_with_state(state, auth::require_api_key));

    // The health check stays open, but still belongs in the docs.
    let (ping_router, ping_openapi) = routes::ping::router().split_for_parts();
    openapi.merge(ping_openapi);

    // Every route is served both at the root and under "/v1". Anything
    // unmatched, including a known path with the wrong method, gets the JSON
    // 404 body.
    let router = ping_router.merge(api_router);
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(API_KEY_HEADER),
        ]);
    Router::new()
        .merge(router.clone())
        .nest("/v1", router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .fallback(routes::not_found)
        .method_not_allowed_fallback(routes::not_found)
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("handler panicked: {details}");
    ApiError::internal().into_response()
}
