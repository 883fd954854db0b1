//! Tree Outline Builder
//!
//! Two-line digest of the repository's top level, used in prompts and as the
//! structure fallback.

use std::collections::BTreeSet;
use std::fmt;

use crate::constants::outline::{EMPTY_PLACEHOLDER, MAX_OUTLINE_ENTRIES};

/// Top-level directories (with trailing `/`) and files, sorted and capped
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreeOutline {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

impl TreeOutline {
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut directories = BTreeSet::new();
        let mut files = BTreeSet::new();

        for path in paths {
            let path = path.as_ref();
            match path.split_once('/') {
                Some((top, _)) => {
                    directories.insert(format!("{top}/"));
                }
                None => {
                    files.insert(path.to_string());
                }
            }
        }

        Self {
            directories: directories.into_iter().take(MAX_OUTLINE_ENTRIES).collect(),
            files: files.into_iter().take(MAX_OUTLINE_ENTRIES).collect(),
        }
    }

    /// Outline on a single line, for the fallback structure text
    pub fn flattened(&self) -> String {
        self.to_string().replace('\n', " ")
    }
}

impl fmt::Display for TreeOutline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Top-level directories: {}\nTop-level files: {}",
            join_or_placeholder(&self.directories),
            join_or_placeholder(&self.files)
        )
    }
}

fn join_or_placeholder(items: &[String]) -> String {
    if items.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        items.join(", ")
    }
}
