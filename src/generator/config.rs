//! Generator configuration
//!
//! Generation defaults can be tuned per project via a TOML file that sits
//! alongside the module spec (`routegen.toml`). Every field is optional:
//!
//! ```toml
//! core = "8.x"
//! default_permission = "access content"
//! default_role = "authenticated"
//! form_class = '\Drupal\module\Form\FormClassName'
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up next to the module spec.
pub const CONFIG_FILE_NAME: &str = "routegen.toml";

/// Defaults applied while generating a module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Value of the `core` key in the info file
    pub core: String,
    /// Permission required by `permission` access when the item names none
    pub default_permission: String,
    /// Role required by `role` access when the item names none
    pub default_role: String,
    /// Class referenced by `_form` for `form` controllers
    pub form_class: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            core: "8.x".to_string(),
            default_permission: "access content".to_string(),
            default_role: "authenticated".to_string(),
            form_class: r"\Drupal\module\Form\FormClassName".to_string(),
        }
    }
}

/// Load generator configuration from a TOML file
///
/// Returns `Ok(Some(config))` if the file exists and parses,
/// `Ok(None)` if it doesn't exist (not an error),
/// `Err` if it exists but fails to parse.
pub fn load_generator_config(config_path: &Path) -> anyhow::Result<Option<GeneratorConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path).with_context(|| {
        format!(
            "Failed to read generator config: {}",
            config_path.display()
        )
    })?;

    let config: GeneratorConfig = toml::from_str(&contents).with_context(|| {
        format!(
            "Failed to parse generator config: {}",
            config_path.display()
        )
    })?;

    Ok(Some(config))
}

/// Resolve the config path
///
/// Priority:
/// 1. Explicitly provided path (via CLI)
/// 2. `routegen.toml` alongside the spec
/// 3. None (defaults)
pub fn resolve_config_path(explicit_path: Option<&Path>, spec_path: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!(path = %path.display(), "Config file not found, falling back to auto-detection");
    }

    let config_path = spec_path.parent()?.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Resolve and load the config for `spec_path`, falling back to defaults.
pub fn load_config_for_spec(
    explicit_path: Option<&Path>,
    spec_path: &Path,
) -> anyhow::Result<GeneratorConfig> {
    match resolve_config_path(explicit_path, spec_path) {
        Some(path) => {
            let config = load_generator_config(&path)?.unwrap_or_default();
            tracing::debug!(path = %path.display(), "Loaded generator config");
            Ok(config)
        }
        None => Ok(GeneratorConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_generator_config(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "default_permission = \"administer site configuration\"\n").unwrap();
        let config = load_generator_config(&path).unwrap().unwrap();
        assert_eq!(config.default_permission, "administer site configuration");
        assert_eq!(config.default_role, "authenticated");
        assert_eq!(config.core, "8.x");
    }

    #[test]
    fn test_invalid_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "core = [").unwrap();
        let err = load_generator_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse generator config"));
    }

    #[test]
    fn test_auto_detect_next_to_spec() {
        let dir = tempfile::tempdir().unwrap();
        let spec = dir.path().join("module.yaml");
        assert!(resolve_config_path(None, &spec).is_none());
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "core = \"9.x\"\n").unwrap();
        let config = load_config_for_spec(None, &spec).unwrap();
        assert_eq!(config.core, "9.x");
    }
}
