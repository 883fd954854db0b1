//! Config Command
//!
//! Inspect repolens configuration.
//!
//! Usage:
//!   repolens config show [--format toml|json]
//!   repolens config path

use std::path::Path;

use super::ConfigFormat;
use crate::config::ConfigLoader;
use crate::types::Result;

/// Show the merged effective configuration
pub fn show(explicit: Option<&Path>, format: ConfigFormat) -> Result<()> {
    ConfigLoader::show_config(explicit, format == ConfigFormat::Json)
}

/// Show configuration paths
pub fn path(explicit: Option<&Path>) -> Result<()> {
    ConfigLoader::show_path(explicit);
    Ok(())
}
