//! Generation clients
//!
//! [`GenerationClient`] is the seam between prompt handling and transport.
//! [`HttpGenerationClient`] posts to the service; [`Generator`] validates
//! and composes prompts in front of any client.

use crate::config::ClientConfig;
use crate::envelope::Envelope;
use crate::error::{ClientError, Result};
use crate::params::GenerationParams;
use crate::prompt::compose_prompt;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body posted to the generate endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Trimmed user brief
    pub prompt: String,
    /// Production parameters
    pub params: GenerationParams,
}

impl GenerationRequest {
    /// Create request
    #[must_use]
    pub fn new(prompt: impl Into<String>, params: GenerationParams) -> Self {
        Self {
            prompt: prompt.into(),
            params,
        }
    }
}

/// Transport for generation requests
///
/// Dropping the returned future cancels the request.
#[async_trait::async_trait]
pub trait GenerationClient: Send + Sync {
    /// Send `request` and return the raw reply text
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// HTTP client for the generate endpoint
#[derive(Debug, Clone)]
pub struct HttpGenerationClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl HttpGenerationClient {
    /// Create client honouring the configured timeout
    ///
    /// # Errors
    /// Returns `ClientError::Config` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self { config, http })
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait::async_trait]
impl GenerationClient for HttpGenerationClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let url = self.config.generate_url();
        tracing::debug!(%url, generation_type = %request.params.generation_type, "posting generation request");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::transport(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ClientError::transport(&e))?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "generation endpoint returned an error");
        }
        Envelope::decode(status.as_u16(), &body)
    }
}

/// Validates prompts and forwards them to a [`GenerationClient`]
#[derive(Clone)]
pub struct Generator {
    client: Arc<dyn GenerationClient>,
    max_prompt_chars: usize,
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("max_prompt_chars", &self.max_prompt_chars)
            .finish_non_exhaustive()
    }
}

impl Generator {
    /// Create generator over the HTTP client
    ///
    /// # Errors
    /// Returns `ClientError::Config` if the HTTP client cannot be built.
    pub fn http(config: ClientConfig) -> Result<Self> {
        let max_prompt_chars = config.max_prompt_chars;
        Ok(Self::with_client(
            Arc::new(HttpGenerationClient::new(config)?),
            max_prompt_chars,
        ))
    }

    /// Create generator over a custom client
    #[must_use]
    pub fn with_client(client: Arc<dyn GenerationClient>, max_prompt_chars: usize) -> Self {
        Self {
            client,
            max_prompt_chars,
        }
    }

    /// Validated request for `prompt`
    ///
    /// # Errors
    /// Returns `EmptyPrompt` or `PromptTooLong` from prompt composition.
    pub fn request(&self, prompt: &str, params: GenerationParams) -> Result<GenerationRequest> {
        compose_prompt(prompt, &params, self.max_prompt_chars)?;
        Ok(GenerationRequest::new(prompt.trim(), params))
    }

    /// Generate a reply for `prompt`
    ///
    /// # Errors
    /// Returns validation errors before any request is sent, otherwise the
    /// client's error.
    pub async fn generate(&self, prompt: &str, params: GenerationParams) -> Result<String> {
        let request = self.request(prompt, params)?;
        let output = self.client.generate(&request).await?;
        tracing::debug!(chars = output.len(), "generation reply received");
        Ok(output)
    }
}
