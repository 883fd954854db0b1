//! AI Response Validation
//!
//! Parsing and fallback handling for model replies:
//! - Strict and embedded-object JSON parsing
//! - Field extraction with lenient coercion
//! - Deterministic fallback when nothing usable comes back

mod fallback;
mod response;

pub use fallback::{build_fallback_summary, resolve_summary};
pub use response::{ParseOutcome, ParseStage, SummaryFields, parse_llm_response};
