use axum::extract::FromRef;

use crate::{
    client::ModelClient,
    models::config::{QuillConfig, ServerConfig},
};

#[derive(Clone)]
pub struct QuillState {
    pub server_config: ServerConfig,
    pub model_client: ModelClient,
}

impl QuillState {
    pub fn new(config: QuillConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let QuillConfig { server, generation } = config;
        let model_client = ModelClient::new(generation)?;
        Ok(Self {
            server_config: server,
            model_client,
        })
    }
}

impl FromRef<QuillState> for ModelClient {
    fn from_ref(state: &QuillState) -> ModelClient {
        state.model_client.clone()
    }
}

impl FromRef<QuillState> for ServerConfig {
    fn from_ref(state: &QuillState) -> ServerConfig {
        state.server_config.clone()
    }
}
