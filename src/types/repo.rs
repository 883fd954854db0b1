//! Repository Data Model
//!
//! Records exchanged between the GitHub collaborator, the analyzer and the
//! summary output. All values are scoped to a single request.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::utils::char_len;

// =============================================================================
// Repository Reference
// =============================================================================

/// Owner/repository pair extracted from a GitHub URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

// =============================================================================
// Tree Entries
// =============================================================================

/// Kind of a tree entry as reported by the hosting API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Blob,
    Tree,
    #[default]
    #[serde(other)]
    Other,
}

/// One file or directory record from the recursive tree listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    #[serde(default)]
    pub path: String,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
    /// Declared size in bytes; 0 when the API omits it
    #[serde(default)]
    pub size: u64,
}

impl RepositoryEntry {
    pub fn blob(path: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Blob,
            size,
        }
    }

    pub fn tree(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Tree,
            size: 0,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::Blob
    }
}

/// File that passed filtering, with its importance score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub path: String,
    pub size: u64,
    pub score: u32,
}

// =============================================================================
// File Snippets
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSnippet {
    pub path: String,
    pub content: String,
}

/// Fetched file contents keyed by path, in selection order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSnippets {
    entries: Vec<FileSnippet>,
}

impl FileSnippets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a snippet, replacing the content of an existing path in place
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        let path = path.into();
        let content = content.into();
        match self.entries.iter_mut().find(|s| s.path == path) {
            Some(existing) => existing.content = content,
            None => self.entries.push(FileSnippet { path, content }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileSnippet> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total content length in characters
    pub fn total_chars(&self) -> usize {
        self.entries.iter().map(|s| char_len(&s.content)).sum()
    }
}

impl<P: Into<String>, C: Into<String>> FromIterator<(P, C)> for FileSnippets {
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        let mut snippets = Self::new();
        for (path, content) in iter {
            snippets.insert(path, content);
        }
        snippets
    }
}

// =============================================================================
// Summary Output
// =============================================================================

/// Final summary returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub technologies: Vec<String>,
    pub structure: String,
}
