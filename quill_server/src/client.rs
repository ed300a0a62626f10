use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::models::client::{
    GenerateContentRequest, GenerateContentResponse, HttpClientConfig, ModelClientError,
};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Handle to the generative model API. Built once at startup and cloned into
/// handlers; the underlying `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct ModelClient {
    config: HttpClientConfig,
    client: reqwest::Client,
}

impl ModelClient {
    pub async fn generate(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ModelClientError> {
        let base_url = self.config.base_url.trim_end_matches("/");
        let url = format!("{base_url}/models/{}:generateContent", self.config.model);
        debug!("sending generation request to model {}", self.config.model);
        let response = self
            .client
            .post(url)
            .query(&self.config.params)
            .json(&request)
            .send()
            .await
            .map_err(|err| ModelClientError::ApiConnection(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|err| format!("{err:?}"));
            return Err(ModelClientError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|err| ModelClientError::ResponseJson(err.to_string()))
    }

    pub fn new(config: HttpClientConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let mut header_map = HeaderMap::try_from(&config.headers)?;
        let mut api_key = HeaderValue::from_str(&config.api_key)?;
        api_key.set_sensitive(true);
        header_map.insert(API_KEY_HEADER, api_key);
        let client = reqwest::Client::builder()
            .default_headers(header_map)
            .build()?;
        Ok(Self { config, client })
    }
}
