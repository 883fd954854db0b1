//! OpenAI-Compatible Chat Provider
//!
//! Single-turn calls to any `/chat/completions` endpoint that speaks the
//! OpenAI wire format (Nebius Token Factory by default).

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::ChatProvider;
use crate::config::LlmConfig;
use crate::constants::llm::SYSTEM_PROMPT;
use crate::types::utils::char_len;
use crate::types::{LensError, Result};

/// Chat provider with secure API key handling
pub struct OpenAiCompatibleProvider {
    /// API key stored securely - never exposed in logs or debug output
    api_key: SecretString,
    api_base: String,
    model: String,
    temperature: f32,
    max_tokens: usize,
    client: reqwest::Client,
}

impl std::fmt::Debug for OpenAiCompatibleProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatibleProvider")
            .field("api_key", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl OpenAiCompatibleProvider {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = config.require_api_key()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LensError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: SecretString::from(api_key.to_string()),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            client,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }

    fn build_request<'a>(&'a self, prompt: &'a str) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAiCompatibleProvider {
    async fn chat(&self, prompt: &str) -> Result<String> {
        info!(
            "Requesting summary (model: {}, temperature: {})",
            self.model, self.temperature
        );

        let start_time = Instant::now();
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.api_key.expose_secret())
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.as_u16() == 401 {
            let body = response.text().await.unwrap_or_default();
            return Err(LensError::llm_auth(&body));
        }
        if status.as_u16() >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(LensError::llm_provider(status.as_u16(), &body));
        }

        let body = response.text().await.map_err(transport_error)?;
        debug!(
            "Model replied in {} ms ({} chars)",
            start_time.elapsed().as_millis(),
            char_len(&body)
        );

        let envelope: Value = serde_json::from_str(&body).map_err(|_| LensError::LlmFormat)?;
        extract_content(&envelope)
    }

    fn name(&self) -> &str {
        "openai-compatible"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

fn transport_error(e: reqwest::Error) -> LensError {
    if e.is_timeout() {
        LensError::LlmTimeout
    } else {
        LensError::Http(e)
    }
}

/// `choices[0].message.content` of a completion envelope
pub fn extract_content(envelope: &Value) -> Result<String> {
    envelope
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(LensError::LlmFormat)
}

// Request types

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: usize,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}
