use super::types::ModuleSpec;
use anyhow::Context;
use std::path::Path;

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false)
}

/// Load a [`ModuleSpec`] from a YAML (`.yaml`/`.yml`) or JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_module_spec(path: &Path) -> anyhow::Result<ModuleSpec> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read module spec: {}", path.display()))?;
    let spec = if is_yaml(path) {
        parse_module_spec_yaml(&content)
    } else {
        serde_json::from_str::<ModuleSpec>(&content).map_err(anyhow::Error::from)
    }
    .with_context(|| format!("Failed to parse module spec: {}", path.display()))?;
    tracing::debug!(
        module = %spec.root_name,
        router_items = spec.router_items.len(),
        "Loaded module spec"
    );
    Ok(spec)
}

/// Parse a [`ModuleSpec`] from a YAML string.
///
/// # Errors
///
/// Returns an error if the YAML does not describe a module spec.
pub fn parse_module_spec_yaml(content: &str) -> anyhow::Result<ModuleSpec> {
    Ok(serde_yaml::from_str(content)?)
}
