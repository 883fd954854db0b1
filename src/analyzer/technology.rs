//! Technology Detector
//!
//! Best-effort technology signals from file names, extensions and package
//! manifests. Used to cross-check the model's answer and as its fallback.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::debug;

use super::hints;
use crate::constants::summary::NPM_TECHNOLOGY;
use crate::types::FileSnippets;

/// Sorted, deduplicated technologies found in the tree and fetched snippets
pub fn detect_technologies<I, S>(paths: I, snippets: &FileSnippets) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut found: BTreeSet<&'static str> = BTreeSet::new();

    for path in paths {
        let lowered = path.as_ref().to_lowercase();
        if let Some(tech) = hints::tech_for_filename(hints::basename(&lowered)) {
            found.insert(tech);
        }
        if let Some(tech) = hints::extension(&lowered).and_then(hints::tech_for_extension) {
            found.insert(tech);
        }
    }

    for snippet in snippets.iter() {
        if snippet.path.to_lowercase().ends_with(hints::PACKAGE_MANIFEST)
            && declares_dependencies(&snippet.path, &snippet.content)
        {
            found.insert(NPM_TECHNOLOGY);
        }
    }

    found.into_iter().map(String::from).collect()
}

fn declares_dependencies(path: &str, content: &str) -> bool {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(manifest)) => {
            manifest.contains_key("dependencies") || manifest.contains_key("devDependencies")
        }
        Ok(_) => false,
        Err(e) => {
            debug!("Ignoring unparseable manifest {}: {}", path, e);
            false
        }
    }
}
