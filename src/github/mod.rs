//! GitHub Collaborator
//!
//! URL parsing plus the [`RepositorySource`] seam used by the summarizer.
//! [`GitHubClient`] is the production implementation; tests substitute
//! in-memory sources.

mod client;
mod url;

pub use client::{GitHubClient, check_api_status};
pub use self::url::parse_github_url;

use async_trait::async_trait;
use std::sync::Arc;

use crate::types::{RepoRef, RepositoryEntry, Result};

/// Read-only access to a hosted repository
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Default branch name from the repository metadata
    async fn default_branch(&self, repo: &RepoRef) -> Result<String>;

    /// Full recursive listing of `branch`; empty when the repository has no tree
    async fn tree(&self, repo: &RepoRef, branch: &str) -> Result<Vec<RepositoryEntry>>;

    /// Raw file content, `None` when the file cannot be fetched
    async fn fetch_file(&self, repo: &RepoRef, branch: &str, path: &str)
    -> Result<Option<String>>;

    /// Source name for logging
    fn name(&self) -> &str;
}

pub type SharedSource = Arc<dyn RepositorySource>;
