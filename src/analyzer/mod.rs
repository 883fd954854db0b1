//! Repository Analyzer Module
//!
//! Pure, request-scoped analysis of a repository listing:
//! - File selection within size and count budgets
//! - Top-level tree outline
//! - Technology detection
//! - Prompt assembly and reply parsing (delegated to [`crate::ai`])
//!
//! Every operation is a function of its inputs; the analyzer only carries the
//! budgets it was constructed with.

pub mod hints;
pub mod outline;
pub mod selector;
pub mod technology;

pub use outline::TreeOutline;
pub use selector::{FileRank, FileSelector, is_skipped_path};
pub use technology::detect_technologies;

use crate::ai::prompt::build_summary_prompt;
use crate::ai::validation::{self, ParseOutcome};
use crate::config::AnalysisConfig;
use crate::types::{FileSnippets, RepositoryEntry, ScoredCandidate, SummaryResult};

#[derive(Debug, Clone, Default)]
pub struct RepositoryAnalyzer {
    limits: AnalysisConfig,
}

impl RepositoryAnalyzer {
    pub fn new(limits: AnalysisConfig) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &AnalysisConfig {
        &self.limits
    }

    /// Files worth fetching, most important first
    pub fn select_files(&self, entries: &[RepositoryEntry]) -> Vec<ScoredCandidate> {
        FileSelector::new(self.limits.max_file_bytes, self.limits.max_files).select(entries)
    }

    pub fn build_tree_outline<I, S>(&self, paths: I) -> TreeOutline
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        TreeOutline::from_paths(paths)
    }

    pub fn detect_technologies<I, S>(&self, paths: I, snippets: &FileSnippets) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        detect_technologies(paths, snippets)
    }

    pub fn build_prompt(&self, tree_outline: &str, snippets: &FileSnippets) -> String {
        build_summary_prompt(tree_outline, snippets, self.limits.max_total_chars)
    }

    pub fn parse_llm_response(&self, text: &str) -> ParseOutcome {
        validation::parse_llm_response(text)
    }

    pub fn build_fallback_summary(
        &self,
        technologies: &[String],
        tree_outline: &str,
    ) -> SummaryResult {
        validation::build_fallback_summary(technologies, tree_outline)
    }
}
