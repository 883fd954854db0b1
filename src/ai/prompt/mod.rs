//! Prompt Builder System
//!
//! Standardized prompt construction for the repository summary request.
//!
//! File contents are budgeted here independently of the fetch stage, so the
//! character ceiling holds even for snippets that were never size-checked.

use tracing::debug;

use crate::types::FileSnippets;
use crate::types::utils::{char_len, truncate_chars};

/// Fixed instructions opening every summary prompt
const SUMMARY_INSTRUCTIONS: &[&str] = &[
    "You are analyzing a GitHub repository. Use the provided files and tree to summarize the project.",
    "Return a JSON object with keys: summary, technologies, structure.",
    "summary: 2-4 sentences. technologies: list of strings. structure: 1-3 sentences.",
    "Avoid markdown in the JSON output.",
];

/// Prompt section types
#[derive(Debug, Clone)]
pub enum PromptSection {
    /// Single line of text
    Line(String),
    /// Header line followed by content
    Titled { header: String, content: String },
    /// File block: separator, path label, content
    File { path: String, content: String },
}

impl PromptSection {
    fn render(&self) -> String {
        match self {
            PromptSection::Line(text) => text.clone(),
            PromptSection::Titled { header, content } => format!("{}\n{}", header, content),
            PromptSection::File { path, content } => {
                format!("\n---\nFile: {}\n{}", path, content)
            }
        }
    }
}

/// Prompt builder for consistent prompt construction
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    sections: Vec<PromptSection>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one line per instruction
    pub fn instructions(mut self, lines: &[&str]) -> Self {
        self.sections
            .extend(lines.iter().map(|line| PromptSection::Line(line.to_string())));
        self
    }

    pub fn line(mut self, text: &str) -> Self {
        self.sections.push(PromptSection::Line(text.to_string()));
        self
    }

    pub fn blank(self) -> Self {
        self.line("")
    }

    /// Add text section with header
    pub fn section(mut self, header: &str, content: &str) -> Self {
        self.sections.push(PromptSection::Titled {
            header: header.to_string(),
            content: content.to_string(),
        });
        self
    }

    /// Add file blocks in order until `max_total_chars` of content is used.
    ///
    /// A file that only partially fits is cut to the remaining budget; files
    /// after the budget is exhausted are omitted.
    pub fn files(mut self, snippets: &FileSnippets, max_total_chars: usize) -> Self {
        let mut total_chars = 0;
        let mut included = 0;

        for snippet in snippets.iter() {
            let remaining = max_total_chars.saturating_sub(total_chars);
            if remaining == 0 {
                break;
            }
            let content = truncate_chars(&snippet.content, remaining);
            total_chars += char_len(content);
            included += 1;
            self.sections.push(PromptSection::File {
                path: snippet.path.clone(),
                content: content.to_string(),
            });
        }

        debug!(
            "Prompt includes {} of {} files ({} chars)",
            included,
            snippets.len(),
            total_chars
        );
        self
    }

    pub fn build(&self) -> String {
        self.sections
            .iter()
            .map(PromptSection::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Build the repository summary prompt
pub fn build_summary_prompt(
    tree_outline: &str,
    snippets: &FileSnippets,
    max_total_chars: usize,
) -> String {
    PromptBuilder::new()
        .instructions(SUMMARY_INSTRUCTIONS)
        .blank()
        .section("Repository tree:", tree_outline)
        .blank()
        .line("Selected files:")
        .files(snippets, max_total_chars)
        .build()
}
