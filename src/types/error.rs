//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//! Every failure that reaches a caller carries a category, and the category
//! decides the HTTP status the server reports.
//!
//! ## Error Categories
//!
//! - **BadRequest**: Malformed or unsupported repository URL
//! - **NotFound**: Repository missing or empty
//! - **RateLimit**: GitHub API rate limiting
//! - **Upstream**: GitHub or LLM provider answered with an error
//! - **Timeout**: LLM provider did not answer in time
//! - **Auth**: LLM provider rejected the API key
//! - **Format**: LLM provider envelope was not the expected shape
//! - **Config**: Invalid or incomplete configuration
//!
//! Nothing is retried automatically. Unparseable model output is not an error
//! at all; it degrades to the fallback summary.

use thiserror::Error;

/// Maximum characters of a provider error body kept in messages
pub const MAX_ERROR_BODY_CHARS: usize = 300;

// =============================================================================
// Error Categories
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    BadRequest,
    NotFound,
    RateLimit,
    Upstream,
    Timeout,
    Auth,
    Format,
    Config,
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest => write!(f, "BAD_REQUEST"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::RateLimit => write!(f, "RATE_LIMIT"),
            Self::Upstream => write!(f, "UPSTREAM"),
            Self::Timeout => write!(f, "TIMEOUT"),
            Self::Auth => write!(f, "AUTH"),
            Self::Format => write!(f, "FORMAT"),
            Self::Config => write!(f, "CONFIG"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

impl ErrorCategory {
    /// HTTP status reported to API clients for this category
    pub fn http_status(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Auth => 401,
            Self::RateLimit => 403,
            Self::NotFound => 404,
            Self::Upstream | Self::Format => 502,
            Self::Timeout => 504,
            Self::Config | Self::Internal => 500,
        }
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum LensError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // -------------------------------------------------------------------------
    // Repository Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    InvalidUrl(String),

    #[error("{0}")]
    NotFound(String),

    #[error("GitHub API rate limit exceeded")]
    RateLimited,

    #[error("{0}")]
    Upstream(String),

    // -------------------------------------------------------------------------
    // LLM Errors
    // -------------------------------------------------------------------------
    #[error("LLM provider timed out. Try again or increase the request timeout.")]
    LlmTimeout,

    #[error("Invalid API key: {0}")]
    LlmAuth(String),

    #[error("LLM provider error ({status}): {body}")]
    LlmProvider { status: u16, body: String },

    #[error("Unexpected LLM response format")]
    LlmFormat,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LensError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl LensError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidUrl(_) => ErrorCategory::BadRequest,
            Self::NotFound(_) => ErrorCategory::NotFound,
            Self::RateLimited => ErrorCategory::RateLimit,
            Self::Upstream(_) | Self::Http(_) | Self::LlmProvider { .. } => {
                ErrorCategory::Upstream
            }
            Self::LlmTimeout => ErrorCategory::Timeout,
            Self::LlmAuth(_) => ErrorCategory::Auth,
            Self::LlmFormat => ErrorCategory::Format,
            Self::Config(_) => ErrorCategory::Config,
            Self::Io(_) | Self::Json(_) => ErrorCategory::Internal,
        }
    }

    pub fn http_status(&self) -> u16 {
        self.category().http_status()
    }

    /// Create a provider auth error keeping only the head of the response body
    pub fn llm_auth(body: &str) -> Self {
        Self::LlmAuth(truncate_body(body))
    }

    /// Create a provider HTTP error keeping only the head of the response body
    pub fn llm_provider(status: u16, body: &str) -> Self {
        Self::LlmProvider {
            status,
            body: truncate_body(body),
        }
    }
}

fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::RateLimit.to_string(), "RATE_LIMIT");
        assert_eq!(ErrorCategory::BadRequest.to_string(), "BAD_REQUEST");
        assert_eq!(ErrorCategory::Timeout.to_string(), "TIMEOUT");
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(LensError::InvalidUrl("Invalid GitHub URL".into()).http_status(), 400);
        assert_eq!(LensError::NotFound("Repository not found".into()).http_status(), 404);
        assert_eq!(LensError::RateLimited.http_status(), 403);
        assert_eq!(LensError::Upstream("GitHub API error".into()).http_status(), 502);
        assert_eq!(LensError::LlmTimeout.http_status(), 504);
        assert_eq!(LensError::llm_auth("denied").http_status(), 401);
        assert_eq!(LensError::llm_provider(500, "boom").http_status(), 502);
        assert_eq!(LensError::LlmFormat.http_status(), 502);
        assert_eq!(LensError::Config("missing key".into()).http_status(), 500);
    }

    #[test]
    fn test_provider_body_is_truncated() {
        let body = "x".repeat(1000);
        let err = LensError::llm_provider(503, &body);
        match &err {
            LensError::LlmProvider { status, body } => {
                assert_eq!(*status, 503);
                assert_eq!(body.chars().count(), MAX_ERROR_BODY_CHARS);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("LLM provider error (503): xxx"));
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            LensError::RateLimited.to_string(),
            "GitHub API rate limit exceeded"
        );
        assert_eq!(
            LensError::NotFound("Repository appears to be empty".into()).to_string(),
            "Repository appears to be empty"
        );
        assert_eq!(LensError::LlmFormat.to_string(), "Unexpected LLM response format");
    }
}
