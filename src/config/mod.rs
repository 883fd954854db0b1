//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/repolens/config.toml)
//! 3. Project config (./repolens.toml)
//! 4. Explicit config file (`--config`)
//! 5. Legacy provider variables (NEBIUS_*)
//! 6. Environment variables (REPOLENS_*)

mod loader;
mod types;

pub use loader::{ConfigLoader, legacy_llm_overrides};
pub use types::*;
