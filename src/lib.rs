//! RepoLens - LLM Summaries of GitHub Repositories
//!
//! Reads a public GitHub repository through the REST API, picks the files that
//! describe it best within a character budget, and asks an OpenAI-compatible
//! model for a short summary, a technology list and a structure description.
//!
//! ## Quick Start
//!
//! ```ignore
//! use repolens::{ConfigLoader, RepoSummarizer};
//!
//! let config = ConfigLoader::load_with(None)?;
//! let summarizer = RepoSummarizer::from_config(&config)?;
//! let result = summarizer.summarize("https://github.com/psf/requests").await?;
//! println!("{}", result.summary);
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: File selection, tree outline, technology detection
//! - [`ai`]: Prompt assembly, chat provider, reply parsing and fallback
//! - [`github`]: URL parsing and the GitHub REST client
//! - [`summarizer`]: Request-scoped orchestration
//! - [`server`]: HTTP API
//! - [`config`]: Layered configuration

pub mod ai;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod github;
pub mod server;
pub mod summarizer;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{ErrorCategory, LensError, Result};

// Data Model
pub use types::{RepoRef, RepositoryEntry, SummaryResult};

// =============================================================================
// Service Re-exports
// =============================================================================

pub use ai::provider::{ChatProvider, OpenAiCompatibleProvider, SharedProvider};
pub use analyzer::RepositoryAnalyzer;
pub use github::{GitHubClient, RepositorySource, SharedSource, parse_github_url};
pub use summarizer::RepoSummarizer;
