//! File Selector
//!
//! Picks the files most likely to explain a repository:
//! 1. Drop non-files, lockfiles, dependency/build directories and binaries
//! 2. Drop files declared larger than the per-file ceiling
//! 3. Rank by position and naming (root manifests and READMEs first)
//! 4. Prefer smaller files among equally ranked ones, keep at most `max_files`

use tracing::debug;

use super::hints;
use crate::constants::scoring;
use crate::types::{RepositoryEntry, ScoredCandidate};

/// Importance tier of a path, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRank {
    ImportantRoot,
    Readme,
    Docs,
    Source,
    Root,
    Other,
}

impl FileRank {
    /// Rank a path; first matching rule wins
    pub fn of(path: &str) -> Self {
        let lowered = path.to_lowercase();
        let base = hints::basename(&lowered);
        let at_root = !lowered.contains('/');

        if at_root && hints::is_important_root_file(base) {
            FileRank::ImportantRoot
        } else if base.starts_with("readme") {
            FileRank::Readme
        } else if lowered.starts_with("docs/") {
            FileRank::Docs
        } else if ["src/", "lib/", "app/"]
            .iter()
            .any(|prefix| lowered.starts_with(prefix))
        {
            FileRank::Source
        } else if at_root {
            FileRank::Root
        } else {
            FileRank::Other
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            FileRank::ImportantRoot => scoring::IMPORTANT_ROOT_FILE,
            FileRank::Readme => scoring::README,
            FileRank::Docs => scoring::DOCS,
            FileRank::Source => scoring::SOURCE,
            FileRank::Root => scoring::ROOT_FILE,
            FileRank::Other => scoring::OTHER,
        }
    }
}

pub struct FileSelector {
    max_file_bytes: u64,
    max_files: usize,
}

impl FileSelector {
    pub fn new(max_file_bytes: u64, max_files: usize) -> Self {
        Self {
            max_file_bytes,
            max_files,
        }
    }

    /// Select and order the files to fetch
    pub fn select(&self, entries: &[RepositoryEntry]) -> Vec<ScoredCandidate> {
        let mut candidates: Vec<ScoredCandidate> = entries
            .iter()
            .filter(|entry| entry.is_file() && !entry.path.is_empty())
            .filter(|entry| !is_skipped_path(&entry.path))
            .filter(|entry| entry.size == 0 || entry.size <= self.max_file_bytes)
            .map(|entry| ScoredCandidate {
                path: entry.path.clone(),
                size: entry.size,
                score: FileRank::of(&entry.path).score(),
            })
            .collect();

        let eligible = candidates.len();

        // Stable sort keeps tree order for identical (score, size) pairs
        candidates.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.size.cmp(&b.size)));
        candidates.truncate(self.max_files);

        debug!(
            "Selected {} of {} eligible files ({} entries in tree)",
            candidates.len(),
            eligible,
            entries.len()
        );

        candidates
    }
}

/// Lockfiles, dependency/build/VCS directories and binary files
pub fn is_skipped_path(path: &str) -> bool {
    let lowered = path.to_lowercase();
    if hints::is_skipped_file_name(hints::basename(&lowered)) {
        return true;
    }
    if hints::has_skipped_dir_prefix(&lowered) {
        return true;
    }
    hints::extension(&lowered).is_some_and(hints::is_binary_extension)
}
