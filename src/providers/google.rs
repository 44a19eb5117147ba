/*!
 * Client for the public Google web translation endpoint.
 *
 * Uses the same unauthenticated `translate_a/single` endpoint the
 * googletrans library talks to. The response is a nested JSON array whose
 * first element lists sentence chunks as `[translated, original, ...]`.
 */

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::TranslateProvider;

/// Default endpoint for the web translation service
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the Google web translation endpoint
#[derive(Debug, Clone)]
pub struct GoogleTranslate {
    /// Base URL of the service
    endpoint: String,
    /// HTTP client for making requests
    client: Client,
}

impl GoogleTranslate {
    /// Create a client against the default endpoint
    pub fn new() -> Self {
        Self::with_config(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a client with a custom endpoint and timeout
    pub fn with_config(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        let endpoint = endpoint.into();
        let endpoint = endpoint.trim_end_matches('/').to_string();

        Self {
            endpoint,
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Extract the translated text from the nested response array
    fn extract_translation(value: &serde_json::Value) -> Result<String, ProviderError> {
        let sentences = value
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| ProviderError::ParseError("missing sentence list".to_string()))?;

        let mut translated = String::new();
        for sentence in sentences {
            if let Some(part) = sentence.get(0).and_then(|v| v.as_str()) {
                translated.push_str(part);
            }
        }

        if translated.is_empty() {
            return Err(ProviderError::ParseError(
                "response contained no translated text".to_string(),
            ));
        }

        Ok(translated)
    }
}

impl Default for GoogleTranslate {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslateProvider for GoogleTranslate {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/translate_a/single", self.endpoint);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_language),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(ProviderError::RateLimitExceeded(format!(
                "service throttled request ({})",
                status
            )));
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to get error response text".to_string());
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Self::extract_translation(&value)
    }

    fn name(&self) -> &'static str {
        "google"
    }
}
