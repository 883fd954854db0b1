//! LLM Provider Abstraction
//!
//! Defines the [`ChatProvider`] trait: one prompt in, one reply string out.
//! Errors carry the user-facing taxonomy (timeout, auth, provider status,
//! malformed envelope); nothing is retried.

mod openai;

pub use openai::{OpenAiCompatibleProvider, extract_content};

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::LlmConfig;
use crate::types::Result;

#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a single user prompt and return the reply text
    async fn chat(&self, prompt: &str) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model identifier
    fn model(&self) -> &str;
}

/// Shared provider type for concurrent requests
pub type SharedProvider = Arc<dyn ChatProvider>;

/// Create the configured provider. Fails when no API key is configured.
pub fn create_provider(config: &LlmConfig) -> Result<SharedProvider> {
    Ok(Arc::new(OpenAiCompatibleProvider::new(config)?))
}
