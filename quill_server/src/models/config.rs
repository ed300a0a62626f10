use serde::Deserialize;
use std::fs::File;

use crate::{models::client::HttpClientConfig, utils};

/// Header checked against `ServerConfig::api_keys`.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "utils::default_server_binding_addr")]
    pub bind_addr: String,
    /// Keys accepted in the `x-api-key` header. No keys means no check.
    #[serde(default)]
    pub api_keys: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: utils::default_server_binding_addr(),
            api_keys: vec![],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct QuillConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub generation: HttpClientConfig,
}

impl QuillConfig {
    /// Read the config file pointed to by `QUILL_CONFIG_PATH`, falling back to
    /// defaults when it isn't set.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config = match dotenvy::var("QUILL_CONFIG_PATH") {
            Ok(config_path) => {
                let config_file = File::open(config_path)?;
                serde_json::from_reader(config_file)?
            }
            Err(_) => Self::default(),
        };
        if config.generation.api_key.is_empty() {
            return Err("a model API key is required; set API_KEY or generation.api_key".into());
        }
        Ok(config)
    }
}
