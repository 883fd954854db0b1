//! Global Constants
//!
//! Centralized constants for budgets, scoring and network defaults.
//! All magic numbers should be defined here with documentation.

/// Selection and prompt budgets
pub mod budget {
    /// Files declared larger than this are never selected; fetched content is
    /// capped to this many characters
    pub const MAX_FILE_BYTES: u64 = 200_000;

    /// Ceiling on total file content characters, at fetch and prompt time
    pub const MAX_TOTAL_CHARS: usize = 120_000;

    /// Maximum number of files selected for a summary
    pub const MAX_FILES: usize = 20;
}

/// Tree outline limits
pub mod outline {
    /// Entries listed per outline line
    pub const MAX_OUTLINE_ENTRIES: usize = 12;

    /// Placeholder for an empty outline line
    pub const EMPTY_PLACEHOLDER: &str = "(none)";
}

/// File importance scores (higher = more important)
pub mod scoring {
    pub const IMPORTANT_ROOT_FILE: u32 = 100;
    pub const README: u32 = 95;
    pub const DOCS: u32 = 60;
    pub const SOURCE: u32 = 50;
    pub const ROOT_FILE: u32 = 40;
    pub const OTHER: u32 = 10;
}

/// Summary output defaults
pub mod summary {
    /// Summary used when the model output cannot be parsed
    pub const FALLBACK_SUMMARY: &str =
        "Summary unavailable from LLM response. Review the repository files for details.";

    /// Substituted when the model returns an empty summary
    pub const EMPTY_SUMMARY: &str = "No summary provided.";

    /// Technology label added when a package manifest declares dependencies
    pub const NPM_TECHNOLOGY: &str = "npm";
}

/// HTTP/Network constants
pub mod network {
    /// Default request timeout for GitHub and LLM calls (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

    /// GitHub REST API base URL
    pub const GITHUB_API_BASE: &str = "https://api.github.com";

    /// GitHub raw content base URL
    pub const GITHUB_RAW_BASE: &str = "https://raw.githubusercontent.com";

    /// Only host accepted in repository URLs
    pub const GITHUB_HOST: &str = "github.com";

    /// User agent sent on all outbound requests
    pub const USER_AGENT: &str = concat!("repolens/", env!("CARGO_PKG_VERSION"));

    /// Default bind address for the HTTP server
    pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
}

/// LLM provider defaults
pub mod llm {
    pub const DEFAULT_API_BASE: &str = "https://api.tokenfactory.nebius.com/v1";
    pub const DEFAULT_MODEL: &str = "meta-llama/Llama-3.3-70B-Instruct";
    pub const DEFAULT_TEMPERATURE: f32 = 0.2;
    pub const DEFAULT_MAX_TOKENS: usize = 600;
    pub const SYSTEM_PROMPT: &str = "You are a concise software analyst.";
}
