//! GitHub REST Client
//!
//! Unauthenticated access to the three endpoints a summary needs: repository
//! metadata, the recursive git tree and raw file contents.

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::RepositorySource;
use crate::config::GitHubConfig;
use crate::constants::network::USER_AGENT;
use crate::types::utils::truncate_chars;
use crate::types::{LensError, RepoRef, RepositoryEntry, Result};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

pub struct GitHubClient {
    api_base: Url,
    raw_base: Url,
    max_file_bytes: u64,
    client: reqwest::Client,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("api_base", &self.api_base.as_str())
            .field("raw_base", &self.raw_base.as_str())
            .field("max_file_bytes", &self.max_file_bytes)
            .finish()
    }
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig, max_file_bytes: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LensError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_base: parse_base("github.api_base", &config.api_base)?,
            raw_base: parse_base("github.raw_base", &config.raw_base)?,
            max_file_bytes,
            client,
        })
    }

    // =========================================================================
    // Endpoints
    // =========================================================================

    pub fn repo_url(&self, repo: &RepoRef) -> Result<Url> {
        join_segments(&self.api_base, ["repos", repo.owner.as_str(), repo.repo.as_str()])
    }

    /// Branch is a single escaped segment, so `feature/x` becomes `feature%2Fx`
    pub fn tree_url(&self, repo: &RepoRef, branch: &str) -> Result<Url> {
        let mut url = join_segments(
            &self.api_base,
            ["repos", repo.owner.as_str(), repo.repo.as_str(), "git", "trees", branch],
        )?;
        url.set_query(Some("recursive=1"));
        Ok(url)
    }

    /// Slashes in branch and path stay path separators
    pub fn raw_url(&self, repo: &RepoRef, branch: &str, path: &str) -> Result<Url> {
        let segments = [repo.owner.as_str(), repo.repo.as_str()]
            .into_iter()
            .chain(branch.split('/'))
            .chain(path.split('/'));
        join_segments(&self.raw_base, segments)
    }

    // =========================================================================
    // Requests
    // =========================================================================

    async fn api_get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
            .await?;

        check_api_status(response.status())?;
        Ok(response.json().await?)
    }
}

/// Map GitHub API status codes to user-facing errors
pub fn check_api_status(status: StatusCode) -> Result<()> {
    match status {
        StatusCode::NOT_FOUND => Err(LensError::NotFound("Repository not found".to_string())),
        StatusCode::FORBIDDEN => Err(LensError::RateLimited),
        s if s.as_u16() >= 400 => Err(LensError::Upstream("GitHub API error".to_string())),
        _ => Ok(()),
    }
}

#[derive(Debug, Deserialize)]
struct RepoInfo {
    #[serde(default)]
    default_branch: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TreeResponse {
    #[serde(default)]
    tree: Option<Vec<RepositoryEntry>>,
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn default_branch(&self, repo: &RepoRef) -> Result<String> {
        let info: RepoInfo = self.api_get(self.repo_url(repo)?).await?;
        info.default_branch
            .filter(|branch| !branch.is_empty())
            .ok_or_else(|| LensError::Upstream("Unable to determine default branch".to_string()))
    }

    async fn tree(&self, repo: &RepoRef, branch: &str) -> Result<Vec<RepositoryEntry>> {
        let payload: TreeResponse = self.api_get(self.tree_url(repo, branch)?).await?;
        Ok(payload.tree.unwrap_or_default())
    }

    async fn fetch_file(&self, repo: &RepoRef, branch: &str, path: &str) -> Result<Option<String>> {
        let url = self.raw_url(repo, branch, path)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        if response.status() != StatusCode::OK {
            debug!("Skipping {} (status {})", path, response.status());
            return Ok(None);
        }

        let text = response.text().await?;
        Ok(Some(cap_file_content(&text, self.max_file_bytes)))
    }

    fn name(&self) -> &str {
        "github"
    }
}

/// Keep at most `max_file_bytes` characters of a fetched file
fn cap_file_content(text: &str, max_file_bytes: u64) -> String {
    let limit = usize::try_from(max_file_bytes).unwrap_or(usize::MAX);
    truncate_chars(text, limit).to_string()
}

fn parse_base(field: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value)
        .map_err(|e| LensError::Config(format!("Invalid {} '{}': {}", field, value, e)))?;
    if url.cannot_be_a_base() {
        return Err(LensError::Config(format!(
            "Invalid {} '{}': not a base URL",
            field, value
        )));
    }
    Ok(url)
}

/// Append escaped path segments to a base URL, keeping any base path
fn join_segments<'a, I>(base: &Url, segments: I) -> Result<Url>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| LensError::Config(format!("Invalid base URL: {}", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
