//! Gemini provider implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::time::timeout;

use super::convert::{from_gemini_response, to_gemini_request};
use super::types::{GeminiConfig, GeminiResponse};
use crate::client::ModelClient;
use crate::error::{Error, Result};

const MAX_BACKOFF: Duration = Duration::from_secs(10);

/// Gemini provider
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::MissingApiKey("gemini".to_string()));
        }

        let client = Client::new();
        Ok(Self { config, client })
    }

    /// Create provider from environment
    pub fn from_env() -> Result<Self> {
        Self::new(GeminiConfig::from_env()?)
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = self.config.generate_url();
        let body = to_gemini_request(prompt, &self.config);
        let secs = self.config.timeout_secs;

        let response = timeout(Duration::from_secs(secs), async {
            self.client
                .post(&url)
                .header("x-goog-api-key", &self.config.api_key)
                .json(&body)
                .send()
                .await
        })
        .await
        .map_err(|_| Error::Timeout(secs))??;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::provider_error(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let gemini_resp: GeminiResponse = response.json().await?;
        from_gemini_response(gemini_resp)
    }

    fn backoff(&self, attempt: u32) -> Duration {
        // 1x, 2x, 4x ... of the base delay
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.config
            .backoff_base
            .saturating_mul(factor)
            .min(MAX_BACKOFF)
    }
}

#[async_trait]
impl ModelClient for GeminiProvider {
    fn provider_id(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let max_retries = self.config.max_retries;
        let mut last_error = None;

        for attempt in 0..=max_retries {
            if attempt > 0 {
                let delay = self.backoff(attempt);
                tracing::debug!(
                    attempt,
                    max_retries,
                    delay_ms = delay.as_millis() as u64,
                    "retrying Gemini request"
                );
                tokio::time::sleep(delay).await;
            }

            match self.generate(prompt).await {
                Ok(text) => {
                    tracing::debug!(attempt, chars = text.len(), "Gemini reply received");
                    return Ok(text);
                }
                Err(e) if e.is_retryable() => {
                    tracing::warn!(attempt = attempt + 1, error = %e, "Gemini request failed");
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error
            .unwrap_or_else(|| Error::Other(format!("failed after {} attempts", max_retries + 1))))
    }
}
