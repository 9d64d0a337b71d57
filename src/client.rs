//! Client implementation for the Gemini AI API.

use async_trait::async_trait;

use crate::{
    config::Config,
    error::ApiError,
    models::{ModelParams, Request, Response},
};

/// Default API endpoint for Google's Generative AI service
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default API version
const DEFAULT_API_VERSION: &str = "v1beta";
/// Method name of the content generation endpoint
const GENERATE_CONTENT: &str = "generateContent";

/// Anything that can answer a `generateContent` request.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Sends one request and returns the decoded response.
    async fn generate_content(&self, request: Request) -> Result<Response, ApiError>;
}

/// A client for interacting with the Gemini AI API.
#[derive(Debug, Clone)]
pub struct GenerativeModel {
    api_key: String,
    params: ModelParams,
    base_url: String,
    client: reqwest::Client,
}

impl GenerativeModel {
    /// Creates a new GenerativeModel with the specified API key and model.
    ///
    /// # Arguments
    ///
    /// * `api_key` - The API key for authentication
    /// * `params` - The model parameters
    pub fn new(api_key: impl Into<String>, params: impl Into<ModelParams>) -> Self {
        Self {
            api_key: api_key.into(),
            params: params.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Creates a new GenerativeModel from loaded configuration.
    ///
    /// The API key is passed through as-is; an empty key is rejected by the
    /// service, not here.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.clone(), config.model.as_str()).with_base_url(&config.base_url)
    }

    /// Points the client at a different API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The model identifier requests are sent to.
    pub fn model(&self) -> &str {
        &self.params.model
    }

    fn build_url(&self, method: &str) -> String {
        format!(
            "{}/{}/models/{}:{}?key={}",
            self.base_url, DEFAULT_API_VERSION, self.params.model, method, self.api_key
        )
    }

    /// Makes a request to the Gemini AI API.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the service answers with a
    /// non-success status.
    async fn make_request(
        &self,
        url: &str,
        request: Request,
    ) -> Result<reqwest::Response, ApiError> {
        let response = self.client.post(url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ApiError::new(format!(
                "Request failed with status {}: {}",
                status, error_body
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl ContentGenerator for GenerativeModel {
    async fn generate_content(&self, request: Request) -> Result<Response, ApiError> {
        let url = self.build_url(GENERATE_CONTENT);
        log::debug!("Sending generateContent request to model {}", self.model());
        let body = self.make_request(&url, request).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
