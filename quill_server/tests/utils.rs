#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use quill_server::models::{
    client::HttpClientConfig,
    config::{QuillConfig, ServerConfig},
    state::QuillState,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const TEST_MODEL_API_KEY: &str = "test-model-key";

/// What the mock model API answers with.
#[derive(Clone)]
pub enum MockReply {
    Json(StatusCode, Value),
    Text(StatusCode, String),
}

#[derive(Clone, Default)]
struct MockState {
    reply: Option<MockReply>,
    requests: Arc<Mutex<Vec<Value>>>,
    api_keys: Arc<Mutex<Vec<String>>>,
}

/// A running stand-in for the model API that records every request it gets.
pub struct MockModel {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Value>>>,
    api_keys: Arc<Mutex<Vec<String>>>,
}

impl MockModel {
    pub fn hits(&self) -> usize {
        self.requests.lock().expect("mock lock poisoned").len()
    }

    pub fn last_request(&self) -> Option<Value> {
        self.requests
            .lock()
            .expect("mock lock poisoned")
            .last()
            .cloned()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_request().and_then(|request| {
            request["contents"][0]["parts"][0]["text"]
                .as_str()
                .map(String::from)
        })
    }

    pub fn last_api_key(&self) -> Option<String> {
        self.api_keys
            .lock()
            .expect("mock lock poisoned")
            .last()
            .cloned()
    }
}

async fn mock_generate(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(request): Json<Value>,
) -> Response {
    state
        .requests
        .lock()
        .expect("mock lock poisoned")
        .push(request);
    if let Some(key) = headers
        .get("x-goog-api-key")
        .and_then(|value| value.to_str().ok())
    {
        state
            .api_keys
            .lock()
            .expect("mock lock poisoned")
            .push(key.to_string());
    }
    match state.reply {
        Some(MockReply::Json(status, body)) => (status, Json(body)).into_response(),
        Some(MockReply::Text(status, body)) => (status, body).into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn spawn_mock_model(reply: MockReply) -> Result<MockModel, Box<dyn std::error::Error>> {
    let state = MockState {
        reply: Some(reply),
        ..MockState::default()
    };
    let model = MockModel {
        base_url: String::new(),
        requests: state.requests.clone(),
        api_keys: state.api_keys.clone(),
    };
    let router = Router::new()
        .route("/models/{model}", post(mock_generate))
        .with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, router).await });
    Ok(MockModel {
        base_url: format!("http://{addr}"),
        ..model
    })
}

/// Spawn the application against the given model API and return its base URL.
pub async fn spawn_server(
    model_base_url: &str,
    api_keys: Vec<String>,
) -> Result<String, Box<dyn std::error::Error>> {
    let config = QuillConfig {
        server: ServerConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            api_keys,
        },
        generation: HttpClientConfig {
            base_url: model_base_url.to_string(),
            api_key: TEST_MODEL_API_KEY.to_string(),
            ..HttpClientConfig::default()
        },
    };
    let state = QuillState::new(config)?;
    let router = quill_server::app(state);
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, router).await });
    Ok(format!("http://{addr}"))
}

/// Spawn a mock model that answers with `reply` and the application in front
/// of it.
pub async fn spawn(reply: MockReply) -> Result<(MockModel, String), Box<dyn std::error::Error>> {
    let model = spawn_mock_model(reply).await?;
    let server_url = spawn_server(&model.base_url, vec![]).await?;
    Ok((model, server_url))
}

/// A well-formed model response carrying `text`.
pub fn model_text(text: &str) -> MockReply {
    MockReply::Json(
        StatusCode::OK,
        json!({
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [{ "text": text }]
                    },
                    "finishReason": "STOP"
                }
            ]
        }),
    )
}

/// A model response where the model declined on safety grounds.
pub fn model_safety_block() -> MockReply {
    MockReply::Json(
        StatusCode::OK,
        json!({
            "candidates": [
                {
                    "finishReason": "SAFETY",
                    "safetyRatings": [
                        { "category": "HARM_CATEGORY_DANGEROUS_CONTENT", "probability": "HIGH" }
                    ]
                }
            ]
        }),
    )
}

pub const GENERATION_PATHS: [&str; 4] = [
    "/api/pargraph/summery",
    "/api/paragraph/generate",
    "/api/title/generate",
    "/api/caption/generate",
];
