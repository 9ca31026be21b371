//! Remote text generation.
//!
//! One request per call, no retries, no streaming and no timeout. Failures
//! come back as [`InferenceError`] values so a caller can never mistake an
//! error for model output.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::InferenceConfig;
use crate::protocol::{ChatRequest, ChatResponse};

/// Failures of a single inference call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InferenceError {
    /// The service answered with a structured error.
    #[error("{0}")]
    Service(String),
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The response body was not the expected JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// The response carried no reply text.
    #[error("No reply")]
    EmptyReply,
}

/// Abstraction over the text generation backend.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Sends one prompt and returns the model's reply text.
    async fn infer(&self, prompt: &str) -> Result<String, InferenceError>;
}

/// Chat-completion client for OpenRouter and compatible endpoints.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    http: Client,
    config: InferenceConfig,
}

impl OpenRouterClient {
    pub fn new(config: InferenceConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: InferenceConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }
}

#[async_trait]
impl InferenceClient for OpenRouterClient {
    async fn infer(&self, prompt: &str) -> Result<String, InferenceError> {
        let body = ChatRequest::user_prompt(&self.config.model, prompt);

        let mut request = self.http.post(&self.config.endpoint).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        info!(
            endpoint = %self.config.endpoint,
            model = %self.config.model,
            prompt_chars = prompt.chars().count(),
            "sending inference request"
        );

        let response = request
            .send()
            .await
            .map_err(|err| InferenceError::Transport(err.to_string()))?;
        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|err| InferenceError::Transport(err.to_string()))?;

        debug!(status = %status, body = %raw, "inference response");

        let parsed: ChatResponse = serde_json::from_str(&raw).map_err(|err| {
            if status.is_success() {
                InferenceError::MalformedResponse(err.to_string())
            } else {
                InferenceError::Transport(format!("HTTP {status}"))
            }
        })?;

        if let Some(message) = parsed.error_message() {
            warn!(status = %status, message = %message, "inference service error");
            return Err(InferenceError::Service(message));
        }

        parsed
            .reply_text()
            .map(str::to_string)
            .ok_or(InferenceError::EmptyReply)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            InferenceError::Service("Rate limited".into()).to_string(),
            "Rate limited"
        );
        assert_eq!(
            InferenceError::Transport("connection refused".into()).to_string(),
            "request failed: connection refused"
        );
        assert_eq!(InferenceError::EmptyReply.to_string(), "No reply");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let client = OpenRouterClient::new(InferenceConfig {
            endpoint: "http://127.0.0.1:1/v1/chat/completions".into(),
            ..InferenceConfig::default()
        });
        let err = client.infer("hello").await.unwrap_err();
        assert!(matches!(err, InferenceError::Transport(_)));
    }
}
