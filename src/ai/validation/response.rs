//! Response Parsing
//!
//! Turns raw model text into a summary mapping:
//! 1. Strict JSON parse of the whole text
//! 2. Parse of the greedy `{ ... }` span embedded in surrounding prose
//! 3. No result, which callers answer with the fallback summary
//!
//! Failing to parse model text is an expected outcome, so it is reported as
//! [`ParseOutcome::NoResult`] rather than an error.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::types::utils::{json_text_field, json_to_text};

/// First `{` through last `}`, across newlines
static OBJECT_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("Invalid OBJECT_SPAN regex"));

/// Which stage produced a parsed mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    Strict,
    Fragment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Parsed {
        fields: Map<String, Value>,
        stage: ParseStage,
    },
    NoResult,
}

impl ParseOutcome {
    pub fn fields(&self) -> Option<&Map<String, Value>> {
        match self {
            ParseOutcome::Parsed { fields, .. } => Some(fields),
            ParseOutcome::NoResult => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, ParseOutcome::Parsed { .. })
    }
}

/// Parse model output; only JSON objects count as a result
pub fn parse_llm_response(text: &str) -> ParseOutcome {
    if let Some(fields) = parse_object(text) {
        return ParseOutcome::Parsed {
            fields,
            stage: ParseStage::Strict,
        };
    }
    debug!("Strict parse of model output failed, searching for embedded object");

    let fragment = OBJECT_SPAN.find(text).map(|m| m.as_str());

    if let Some(fields) = fragment.and_then(parse_object) {
        return ParseOutcome::Parsed {
            fields,
            stage: ParseStage::Fragment,
        };
    }

    debug!("No JSON object recoverable from model output");
    ParseOutcome::NoResult
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(fields)) => Some(fields),
        _ => None,
    }
}

// =============================================================================
// Field Extraction
// =============================================================================

/// Recognized fields of a parsed summary, coerced to text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummaryFields {
    /// Trimmed summary, empty when missing
    pub summary: String,
    /// Trimmed structure, empty when missing
    pub structure: String,
    /// Present only when the field is a JSON array
    pub technologies: Option<Vec<String>>,
}

impl SummaryFields {
    pub fn from_map(fields: &Map<String, Value>) -> Self {
        let technologies = fields
            .get("technologies")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(json_to_text).collect());

        Self {
            summary: json_text_field(fields, "summary"),
            structure: json_text_field(fields, "structure"),
            technologies,
        }
    }
}
