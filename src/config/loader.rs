//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/repolens/config.toml)
//! 3. Project config (./repolens.toml)
//! 4. Explicit config file (`--config`)
//! 5. Legacy provider variables (NEBIUS_API_KEY, NEBIUS_API_BASE, NEBIUS_MODEL)
//! 6. Environment variables (REPOLENS_* prefix, `__` between sections)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde_json::{Map, Value};
use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::types::{LensError, Result};

const ENV_PREFIX: &str = "REPOLENS_";
const PROJECT_CONFIG_FILE: &str = "repolens.toml";

/// Legacy key names, tried in order
const LEGACY_API_KEY_VARS: &[&str] = &["NEBIUS_API_KEY", "NUBEUS_API_KEY"];
const LEGACY_API_BASE_VAR: &str = "NEBIUS_API_BASE";
const LEGACY_MODEL_VAR: &str = "NEBIUS_MODEL";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain:
    /// defaults → global → project → explicit file → legacy env → env vars
    pub fn load_with(explicit: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Merge global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        // Merge project config
        let project_path = Self::project_config_path();
        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(LensError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            debug!("Loading config from: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Serialized::defaults(legacy_llm_overrides(|name| {
            env::var(name).ok()
        })));

        // e.g. REPOLENS_LLM__MODEL -> llm.model
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<Config> {
        let config: Config = figment
            .extract()
            .map_err(|e| LensError::Config(format!("Configuration error: {}", e)))?;

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/repolens/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join("repolens"))
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(PROJECT_CONFIG_FILE)
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Show config file paths
    pub fn show_path(explicit: Option<&Path>) {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:   {} {}", exists, global.display());
        } else {
            println!("  Global:   (not available)");
        }

        let project = Self::project_config_path();
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project:  {} {}", exists, project.display());

        if let Some(path) = explicit {
            let exists = if path.exists() { "✓" } else { "✗" };
            println!("  Explicit: {} {}", exists, path.display());
        }

        println!();
        println!("  Environment: {}<SECTION>__<KEY>", ENV_PREFIX);
    }

    /// Render the effective configuration (API key omitted)
    pub fn render(config: &Config, as_json: bool) -> Result<String> {
        if as_json {
            Ok(serde_json::to_string_pretty(config)?)
        } else {
            toml::to_string_pretty(config).map_err(|e| LensError::Config(e.to_string()))
        }
    }

    /// Show current effective configuration
    pub fn show_config(explicit: Option<&Path>, as_json: bool) -> Result<()> {
        let config = Self::load_with(explicit)?;
        println!("{}", Self::render(&config, as_json)?);
        Ok(())
    }
}

/// LLM settings taken from the legacy provider variables, shaped as a partial
/// config document (`{"llm": {...}}`) holding only the values that are set
pub fn legacy_llm_overrides<F>(lookup: F) -> Value
where
    F: Fn(&str) -> Option<String>,
{
    let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    let mut llm = Map::new();
    if let Some(key) = LEGACY_API_KEY_VARS.iter().find_map(|&name| present(name)) {
        llm.insert("api_key".to_string(), Value::String(key));
    }
    if let Some(base) = present(LEGACY_API_BASE_VAR) {
        llm.insert("api_base".to_string(), Value::String(base));
    }
    if let Some(model) = present(LEGACY_MODEL_VAR) {
        llm.insert("model".to_string(), Value::String(model));
    }

    let mut root = Map::new();
    if !llm.is_empty() {
        root.insert("llm".to_string(), Value::Object(llm));
    }
    Value::Object(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_load_with_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("repolens.toml");
        std::fs::write(
            &path,
            r#"
[analysis]
max_files = 5

[llm]
model = "custom-model"

[server]
bind = "0.0.0.0:9000"
"#,
        )
        .unwrap();

        let config = ConfigLoader::load_with(Some(&path)).unwrap();
        assert_eq!(config.analysis.max_files, 5);
        assert_eq!(config.analysis.max_total_chars, 120_000);
        assert_eq!(config.llm.model, "custom-model");
        assert_eq!(config.server.bind, "0.0.0.0:9000");
    }

    #[test]
    fn test_load_with_validates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        std::fs::write(&path, "[llm]\ntemperature = 5.0\n").unwrap();

        let err = ConfigLoader::load_with(Some(&path)).unwrap_err();
        assert!(matches!(err, LensError::Config(_)));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = ConfigLoader::load_with(Some(Path::new("/nonexistent/repolens.toml")))
            .unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_legacy_overrides() {
        let value = legacy_llm_overrides(lookup_from(&[
            ("NEBIUS_API_KEY", "primary"),
            ("NUBEUS_API_KEY", "secondary"),
            ("NEBIUS_MODEL", "legacy-model"),
        ]));
        assert_eq!(value["llm"]["api_key"], "primary");
        assert_eq!(value["llm"]["model"], "legacy-model");
        assert!(value["llm"].get("api_base").is_none());
    }

    #[test]
    fn test_legacy_secondary_key_name() {
        let value = legacy_llm_overrides(lookup_from(&[
            ("NEBIUS_API_KEY", ""),
            ("NUBEUS_API_KEY", "secondary"),
        ]));
        assert_eq!(value["llm"]["api_key"], "secondary");
    }

    #[test]
    fn test_legacy_overrides_empty() {
        let value = legacy_llm_overrides(lookup_from(&[]));
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn test_legacy_layer_merges_into_config() {
        let overrides = legacy_llm_overrides(lookup_from(&[("NEBIUS_API_KEY", "k")]));
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Serialized::defaults(overrides))
            .extract()
            .unwrap();
        assert_eq!(config.llm.api_key.as_deref(), Some("k"));
        assert_eq!(config.llm.model, "meta-llama/Llama-3.3-70B-Instruct");
    }

    #[test]
    fn test_render_omits_api_key() {
        let mut config = Config::default();
        config.llm.api_key = Some("sk-hidden".to_string());

        let toml_text = ConfigLoader::render(&config, false).unwrap();
        assert!(toml_text.contains("[analysis]"));
        assert!(!toml_text.contains("sk-hidden"));

        let json_text = ConfigLoader::render(&config, true).unwrap();
        assert!(json_text.contains("\"max_files\": 20"));
        assert!(!json_text.contains("sk-hidden"));
    }
}
