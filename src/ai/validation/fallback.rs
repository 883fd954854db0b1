//! Summary Fallback
//!
//! Final assembly of a [`SummaryResult`] from a parse outcome. The result always
//! carries a non-empty summary and structure.

use tracing::warn;

use super::response::{ParseOutcome, SummaryFields};
use crate::constants::summary::{EMPTY_SUMMARY, FALLBACK_SUMMARY};
use crate::types::SummaryResult;

/// Deterministic summary used when the model reply is unusable
pub fn build_fallback_summary(technologies: &[String], tree_outline: &str) -> SummaryResult {
    SummaryResult {
        summary: FALLBACK_SUMMARY.to_string(),
        technologies: technologies.to_vec(),
        structure: tree_outline.replace('\n', " "),
    }
}

/// Combine the parsed reply with locally detected data.
///
/// - No result or an empty object → fallback summary
/// - `technologies` must be a non-empty array, otherwise `detected` is used
/// - Empty summary/structure are replaced by a default text and the outline
pub fn resolve_summary(
    outcome: &ParseOutcome,
    detected: &[String],
    tree_outline: &str,
) -> SummaryResult {
    let Some(fields) = outcome.fields().filter(|fields| !fields.is_empty()) else {
        warn!("Model reply could not be parsed, using fallback summary");
        return build_fallback_summary(detected, tree_outline);
    };

    let fields = SummaryFields::from_map(fields);

    let technologies = match fields.technologies {
        Some(techs) if !techs.is_empty() => techs,
        _ => detected.to_vec(),
    };

    SummaryResult {
        summary: non_empty_or(fields.summary, EMPTY_SUMMARY),
        technologies,
        structure: non_empty_or(fields.structure, tree_outline),
    }
}

fn non_empty_or(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}
