//! AI Integration Module
//!
//! - `prompt`: Summary prompt assembly under a character budget
//! - `provider`: Chat provider abstraction and the OpenAI-compatible client
//! - `validation`: Reply parsing and fallback summaries

pub mod prompt;
pub mod provider;
pub mod validation;
