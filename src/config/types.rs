//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/repolens/) and project (./repolens.toml) level
//! configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{budget, llm, network};
use crate::types::{LensError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Selection and prompt budgets
    pub analysis: AnalysisConfig,

    /// GitHub API settings
    pub github: GitHubConfig,

    /// LLM provider settings
    pub llm: LlmConfig,

    /// HTTP server settings
    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            analysis: AnalysisConfig::default(),
            github: GitHubConfig::default(),
            llm: LlmConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `LensError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.analysis.max_files == 0 {
            return Err(LensError::Config(
                "analysis.max_files must be greater than 0".to_string(),
            ));
        }
        if self.analysis.max_total_chars == 0 {
            return Err(LensError::Config(
                "analysis.max_total_chars must be greater than 0".to_string(),
            ));
        }
        if self.analysis.max_file_bytes == 0 {
            return Err(LensError::Config(
                "analysis.max_file_bytes must be greater than 0".to_string(),
            ));
        }

        // LLM temperature validation
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(LensError::Config(format!(
                "LLM temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }

        // Timeout validation
        if self.llm.timeout_secs == 0 || self.github.timeout_secs == 0 {
            return Err(LensError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.llm.max_tokens == 0 {
            return Err(LensError::Config(
                "llm.max_tokens must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Analysis Configuration
// =============================================================================

/// Budgets applied while selecting, fetching and prompting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Per-file ceiling: larger declared sizes are skipped, longer content is cut
    pub max_file_bytes: u64,

    /// Ceiling on total file content characters
    pub max_total_chars: usize,

    /// Maximum number of files selected
    pub max_files: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: budget::MAX_FILE_BYTES,
            max_total_chars: budget::MAX_TOTAL_CHARS,
            max_files: budget::MAX_FILES,
        }
    }
}

// =============================================================================
// GitHub Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// REST API base URL
    pub api_base: String,

    /// Raw content base URL
    pub raw_base: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base: network::GITHUB_API_BASE.to_string(),
            raw_base: network::GITHUB_RAW_BASE.to_string(),
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
        }
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

/// OpenAI-compatible chat endpoint settings
///
/// The API key is never serialized to output and is redacted in debug output.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// API key (bearer token)
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// API base URL, without the `/chat/completions` suffix
    pub api_base: String,

    /// Model name
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Temperature for LLM generation
    pub temperature: f32,

    /// Maximum tokens to generate
    pub max_tokens: usize,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: llm::DEFAULT_API_BASE.to_string(),
            model: llm::DEFAULT_MODEL.to_string(),
            timeout_secs: network::DEFAULT_TIMEOUT_SECS,
            temperature: llm::DEFAULT_TEMPERATURE,
            max_tokens: llm::DEFAULT_MAX_TOKENS,
        }
    }
}

impl LlmConfig {
    /// API key, or a configuration error naming where to set it
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                LensError::Config(
                    "LLM API key is not set. Set REPOLENS_LLM__API_KEY or NEBIUS_API_KEY"
                        .to_string(),
                )
            })
    }
}

// =============================================================================
// Server Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: network::DEFAULT_BIND.to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
