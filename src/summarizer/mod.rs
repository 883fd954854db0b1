//! Repository Summarizer
//!
//! Request-scoped orchestration of one summary:
//! 1. Parse the URL and resolve the default branch
//! 2. Fetch the recursive tree and select files
//! 3. Fetch selected files sequentially within the character budget
//! 4. Build the prompt, call the model once and parse the reply
//! 5. Merge the reply with locally detected technologies and the outline
//!
//! No state is shared between requests beyond the read-only collaborators.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::ai::provider::{SharedProvider, create_provider};
use crate::ai::validation::resolve_summary;
use crate::analyzer::RepositoryAnalyzer;
use crate::config::Config;
use crate::github::{GitHubClient, SharedSource, parse_github_url};
use crate::types::utils::{char_len, truncate_chars};
use crate::types::{FileSnippets, LensError, RepoRef, Result, ScoredCandidate, SummaryResult};

#[derive(Clone)]
pub struct RepoSummarizer {
    source: SharedSource,
    provider: SharedProvider,
    analyzer: RepositoryAnalyzer,
}

impl std::fmt::Debug for RepoSummarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepoSummarizer")
            .field("source", &self.source.name())
            .field("provider", &self.provider.name())
            .field("model", &self.provider.model())
            .field("analyzer", &self.analyzer)
            .finish()
    }
}

impl RepoSummarizer {
    pub fn new(source: SharedSource, provider: SharedProvider, analyzer: RepositoryAnalyzer) -> Self {
        Self {
            source,
            provider,
            analyzer,
        }
    }

    /// Production wiring: GitHub client plus the configured chat provider.
    /// Fails when the LLM API key is missing.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = GitHubClient::new(&config.github, config.analysis.max_file_bytes)?;
        let provider = create_provider(&config.llm)?;
        Ok(Self::new(
            Arc::new(source),
            provider,
            RepositoryAnalyzer::new(config.analysis.clone()),
        ))
    }

    pub fn analyzer(&self) -> &RepositoryAnalyzer {
        &self.analyzer
    }

    pub async fn summarize(&self, github_url: &str) -> Result<SummaryResult> {
        let start = Instant::now();
        let repo = parse_github_url(github_url)?;
        info!("Summarizing {}", repo);

        let branch = self.source.default_branch(&repo).await?;
        let tree = self.source.tree(&repo, &branch).await?;
        if tree.is_empty() {
            return Err(LensError::NotFound(
                "Repository appears to be empty".to_string(),
            ));
        }
        info!("Fetched tree of {} entries from {} ({})", tree.len(), repo, branch);

        let selected = self.analyzer.select_files(&tree);
        let snippets = self.fetch_snippets(&repo, &branch, &selected).await?;
        info!(
            "Collected {} of {} selected files ({} chars)",
            snippets.len(),
            selected.len(),
            snippets.total_chars()
        );

        let tree_paths: Vec<&str> = tree
            .iter()
            .map(|entry| entry.path.as_str())
            .filter(|path| !path.is_empty())
            .collect();
        let tree_outline = self.analyzer.build_tree_outline(&tree_paths).to_string();
        let prompt = self.analyzer.build_prompt(&tree_outline, &snippets);

        info!(
            "Calling {} (model: {}, prompt: {} chars)",
            self.provider.name(),
            self.provider.model(),
            char_len(&prompt)
        );
        let reply = self.provider.chat(&prompt).await?;
        let outcome = self.analyzer.parse_llm_response(&reply);

        let technologies = self.analyzer.detect_technologies(&tree_paths, &snippets);
        let result = resolve_summary(&outcome, &technologies, &tree_outline);

        info!(
            "Summarized {} in {} ms",
            repo,
            start.elapsed().as_millis()
        );
        Ok(result)
    }

    /// Fetch candidates in order until the character budget is spent.
    ///
    /// Missing and empty files are skipped; each kept file is cut to the
    /// remaining budget, and nothing is fetched once the budget reaches zero.
    async fn fetch_snippets(
        &self,
        repo: &RepoRef,
        branch: &str,
        selected: &[ScoredCandidate],
    ) -> Result<FileSnippets> {
        let max_total_chars = self.analyzer.limits().max_total_chars;
        let mut snippets = FileSnippets::new();
        let mut total_chars = 0usize;

        for candidate in selected {
            let remaining = max_total_chars.saturating_sub(total_chars);
            if remaining == 0 {
                debug!("Character budget exhausted before {}", candidate.path);
                break;
            }

            let Some(content) = self
                .source
                .fetch_file(repo, branch, &candidate.path)
                .await?
            else {
                continue;
            };
            if content.is_empty() {
                continue;
            }

            let trimmed = truncate_chars(&content, remaining);
            total_chars += char_len(trimmed);
            snippets.insert(candidate.path.as_str(), trimmed);
        }

        Ok(snippets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::provider::ChatProvider;
    use crate::config::AnalysisConfig;
    use crate::constants::summary::{EMPTY_SUMMARY, FALLBACK_SUMMARY};
    use crate::github::RepositorySource;
    use crate::types::RepositoryEntry;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // =========================================================================
    // Fakes
    // =========================================================================

    #[derive(Default)]
    struct FakeSource {
        branch: Option<String>,
        tree: Vec<RepositoryEntry>,
        files: HashMap<String, String>,
        fetched: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn new(tree: Vec<RepositoryEntry>, files: &[(&str, &str)]) -> Self {
            Self {
                branch: Some("main".to_string()),
                tree,
                files: files
                    .iter()
                    .map(|(p, c)| (p.to_string(), c.to_string()))
                    .collect(),
                fetched: Mutex::new(Vec::new()),
            }
        }

        fn fetched(&self) -> Vec<String> {
            self.fetched.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RepositorySource for FakeSource {
        async fn default_branch(&self, _repo: &RepoRef) -> Result<String> {
            self.branch
                .clone()
                .ok_or_else(|| LensError::Upstream("Unable to determine default branch".into()))
        }

        async fn tree(&self, _repo: &RepoRef, branch: &str) -> Result<Vec<RepositoryEntry>> {
            assert_eq!(branch, "main");
            Ok(self.tree.clone())
        }

        async fn fetch_file(
            &self,
            _repo: &RepoRef,
            _branch: &str,
            path: &str,
        ) -> Result<Option<String>> {
            self.fetched.lock().unwrap().push(path.to_string());
            Ok(self.files.get(path).cloned())
        }

        fn name(&self) -> &str {
            "fake"
        }
    }

    struct FakeProvider {
        reply: Result<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeProvider {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing(err: LensError) -> Self {
            Self {
                reply: Err(err),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn last_prompt(&self) -> String {
            self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    #[async_trait]
    impl ChatProvider for FakeProvider {
        async fn chat(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(LensError::LlmTimeout) => Err(LensError::LlmTimeout),
                Err(_) => Err(LensError::LlmFormat),
            }
        }

        fn name(&self) -> &str {
            "fake"
        }

        fn model(&self) -> &str {
            "fake-model"
        }
    }

    fn summarizer(
        source: Arc<FakeSource>,
        provider: Arc<FakeProvider>,
        limits: AnalysisConfig,
    ) -> RepoSummarizer {
        RepoSummarizer::new(source, provider, RepositoryAnalyzer::new(limits))
    }

    fn sample_tree() -> Vec<RepositoryEntry> {
        vec![
            RepositoryEntry::blob("README.md", 20),
            RepositoryEntry::blob("Cargo.toml", 30),
            RepositoryEntry::tree("src"),
            RepositoryEntry::blob("src/main.rs", 40),
            RepositoryEntry::blob("logo.png", 10),
        ]
    }

    const URL: &str = "https://github.com/octo/demo";

    // =========================================================================
    // Tests
    // =========================================================================

    #[tokio::test]
    async fn test_summarize_uses_parsed_reply() {
        let source = Arc::new(FakeSource::new(
            sample_tree(),
            &[
                ("README.md", "# Demo"),
                ("Cargo.toml", "[package]"),
                ("src/main.rs", "fn main() {}"),
            ],
        ));
        let provider = Arc::new(FakeProvider::replying(
            r#"Sure! {"summary": "A demo.", "technologies": ["Rust"], "structure": "One binary."}"#,
        ));
        let service = summarizer(source.clone(), provider.clone(), AnalysisConfig::default());

        let result = service.summarize(URL).await.unwrap();
        assert_eq!(result.summary, "A demo.");
        assert_eq!(result.technologies, vec!["Rust"]);
        assert_eq!(result.structure, "One binary.");

        assert_eq!(source.fetched(), vec!["README.md", "Cargo.toml", "src/main.rs"]);
        let prompt = provider.last_prompt();
        assert!(prompt.contains(
            "Top-level directories: src/\nTop-level files: Cargo.toml, README.md, logo.png, src"
        ));
        assert!(prompt.contains("File: Cargo.toml\n[package]"));
    }

    #[tokio::test]
    async fn test_unparseable_reply_falls_back() {
        let source = Arc::new(FakeSource::new(sample_tree(), &[("README.md", "# Demo")]));
        let provider = Arc::new(FakeProvider::replying("I cannot answer that."));
        let service = summarizer(source, provider, AnalysisConfig::default());

        let result = service.summarize(URL).await.unwrap();
        assert_eq!(result.summary, FALLBACK_SUMMARY);
        assert_eq!(result.technologies, vec!["Rust"]);
        assert_eq!(
            result.structure,
            "Top-level directories: src/ Top-level files: Cargo.toml, README.md, logo.png, src"
        );
    }

    #[tokio::test]
    async fn test_partial_reply_gets_defaults() {
        let source = Arc::new(FakeSource::new(sample_tree(), &[]));
        let provider = Arc::new(FakeProvider::replying(r#"{"technologies": []}"#));
        let service = summarizer(source, provider, AnalysisConfig::default());

        let result = service.summarize(URL).await.unwrap();
        assert_eq!(result.summary, EMPTY_SUMMARY);
        assert_eq!(result.technologies, vec!["Rust"]);
        assert_eq!(
            result.structure,
            "Top-level directories: src/\nTop-level files: Cargo.toml, README.md, logo.png, src"
        );
    }

    #[tokio::test]
    async fn test_outline_lists_every_tree_path() {
        let tree = vec![
            RepositoryEntry::blob("README.md", 5),
            RepositoryEntry::tree("src"),
            RepositoryEntry::blob("src/a.py", 5),
        ];
        let source = Arc::new(FakeSource::new(tree, &[]));
        let provider = Arc::new(FakeProvider::replying("no json"));
        let service = summarizer(source, provider.clone(), AnalysisConfig::default());

        let result = service.summarize(URL).await.unwrap();
        assert_eq!(
            result.structure,
            "Top-level directories: src/ Top-level files: README.md, src"
        );
        assert!(
            provider
                .last_prompt()
                .contains("Top-level directories: src/\nTop-level files: README.md, src")
        );
    }

    #[tokio::test]
    async fn test_budget_stops_fetching() {
        let source = Arc::new(FakeSource::new(
            sample_tree(),
            &[
                ("Cargo.toml", "123456"),
                ("README.md", "abcdef"),
                ("src/main.rs", "never"),
            ],
        ));
        let provider = Arc::new(FakeProvider::replying("{}"));
        let limits = AnalysisConfig {
            max_total_chars: 10,
            ..AnalysisConfig::default()
        };
        let service = summarizer(source.clone(), provider.clone(), limits);

        service.summarize(URL).await.unwrap();
        // README.md ranks first (same score, smaller size)
        assert_eq!(source.fetched(), vec!["README.md", "Cargo.toml"]);

        let prompt = provider.last_prompt();
        assert!(prompt.contains("File: README.md\nabcdef"));
        assert!(prompt.ends_with("File: Cargo.toml\n1234"));
        assert!(!prompt.contains("src/main.rs\n"));
    }

    #[tokio::test]
    async fn test_missing_and_empty_files_are_skipped() {
        let source = Arc::new(FakeSource::new(
            sample_tree(),
            &[("README.md", ""), ("src/main.rs", "fn main() {}")],
        ));
        let provider = Arc::new(FakeProvider::replying("{}"));
        let service = summarizer(source.clone(), provider.clone(), AnalysisConfig::default());

        service.summarize(URL).await.unwrap();
        let prompt = provider.last_prompt();
        assert!(!prompt.contains("File: Cargo.toml"));
        assert!(!prompt.contains("File: README.md"));
        assert!(prompt.contains("File: src/main.rs\nfn main() {}"));
    }

    #[tokio::test]
    async fn test_empty_tree_is_not_found() {
        let source = Arc::new(FakeSource::new(Vec::new(), &[]));
        let provider = Arc::new(FakeProvider::replying("{}"));
        let service = summarizer(source, provider.clone(), AnalysisConfig::default());

        let err = service.summarize(URL).await.unwrap_err();
        assert_eq!(err.to_string(), "Repository appears to be empty");
        assert_eq!(err.http_status(), 404);
        assert!(provider.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_default_branch() {
        let source = Arc::new(FakeSource {
            branch: None,
            ..FakeSource::new(sample_tree(), &[])
        });
        let provider = Arc::new(FakeProvider::replying("{}"));
        let service = summarizer(source, provider, AnalysisConfig::default());

        let err = service.summarize(URL).await.unwrap_err();
        assert_eq!(err.to_string(), "Unable to determine default branch");
        assert_eq!(err.http_status(), 502);
    }

    #[tokio::test]
    async fn test_invalid_url_fails_before_any_call() {
        let source = Arc::new(FakeSource::new(sample_tree(), &[]));
        let provider = Arc::new(FakeProvider::replying("{}"));
        let service = summarizer(source.clone(), provider, AnalysisConfig::default());

        let err = service.summarize("https://gitlab.com/octo/demo").await.unwrap_err();
        assert_eq!(err.http_status(), 400);
        assert!(source.fetched().is_empty());
    }

    #[tokio::test]
    async fn test_provider_timeout_propagates() {
        let source = Arc::new(FakeSource::new(sample_tree(), &[]));
        let provider = Arc::new(FakeProvider::failing(LensError::LlmTimeout));
        let service = summarizer(source, provider, AnalysisConfig::default());

        let err = service.summarize(URL).await.unwrap_err();
        assert!(matches!(err, LensError::LlmTimeout));
        assert_eq!(err.http_status(), 504);
    }
}
