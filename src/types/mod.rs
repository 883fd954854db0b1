//! Core Types
//!
//! Shared data model and error types.

pub mod error;
pub mod repo;
pub mod utils;

pub use error::{ErrorCategory, LensError, Result};
pub use repo::{
    EntryKind, FileSnippet, FileSnippets, RepoRef, RepositoryEntry, ScoredCandidate,
    SummaryResult,
};
