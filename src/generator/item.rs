use super::access::AccessType;
use super::controller::ControllerType;
use super::error::GenerateError;
use crate::ids::{self, RouteId};
use crate::spec::{MenuLinkSpec, ModuleSpec, RouterItemSpec};
use std::collections::HashMap;

/// A router item after validation: tags resolved to closed types and all
/// identifiers derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterItem {
    /// Position in `router_items`, used in error locations
    pub index: usize,
    pub path: String,
    pub route_id: RouteId,
    /// Derived controller class name (meaningful for `controller` items)
    pub class_name: String,
    pub title: String,
    pub controller: ControllerType,
    pub access: AccessType,
    pub menu_link: Option<MenuLinkSpec>,
    /// `{placeholder}` names from the path
    pub parameters: Vec<String>,
}

pub(crate) fn item_location(index: usize) -> String {
    format!("router_items[{index}]")
}

impl RouterItem {
    /// Validate a raw router item and derive its identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Configuration`] for unknown tags, missing
    /// fields, an unusable path, or a menu link without a title.
    pub fn from_spec(
        index: usize,
        module: &str,
        spec: &RouterItemSpec,
    ) -> Result<Self, GenerateError> {
        let location = item_location(index);
        let path_err = |e: ids::PathError| {
            GenerateError::config(&location, format!("invalid path '{}': {e}", spec.path))
        };
        let route_id = ids::route_id(module, &spec.path).map_err(path_err)?;
        let class_name = ids::controller_class_name(&spec.path).map_err(path_err)?;
        let title = match spec.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => ids::default_title(&spec.path).map_err(path_err)?,
        };
        let controller = ControllerType::from_spec(&spec.controller, &location)?;
        let access = AccessType::from_spec(&spec.access, &location)?;
        if let Some(link) = &spec.menu_link {
            if link.title.trim().is_empty() {
                return Err(GenerateError::config(&location, "menu_link requires a title"));
            }
        }
        Ok(RouterItem {
            index,
            path: spec.path.clone(),
            route_id,
            class_name,
            title,
            controller,
            access,
            menu_link: spec.menu_link.clone(),
            parameters: ids::path_parameters(&spec.path),
        })
    }
}

fn is_machine_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Validate the module-level fields of a spec.
///
/// # Errors
///
/// Returns [`GenerateError::Configuration`] if `base` is not `module` or
/// `root_name` is not a machine name.
pub fn validate_module(spec: &ModuleSpec) -> Result<(), GenerateError> {
    if spec.base != "module" {
        return Err(GenerateError::config(
            "base",
            format!("unsupported component base '{}' (only 'module' is generated)", spec.base),
        ));
    }
    if !is_machine_name(&spec.root_name) {
        return Err(GenerateError::config(
            "root_name",
            format!(
                "'{}' is not a machine name (lowercase letters, digits and underscores, \
                starting with a letter)",
                spec.root_name
            ),
        ));
    }
    Ok(())
}

/// Validate every router item of `spec`, failing on the first error.
///
/// # Errors
///
/// Returns [`GenerateError::Configuration`] for the first invalid item, or
/// [`GenerateError::DerivationCollision`] when two items derive the same
/// route id.
pub fn validate_router_items(spec: &ModuleSpec) -> Result<Vec<RouterItem>, GenerateError> {
    validate_module(spec)?;
    let mut seen: HashMap<RouteId, String> = HashMap::new();
    let mut items = Vec::with_capacity(spec.router_items.len());
    for (index, raw) in spec.router_items.iter().enumerate() {
        let item = RouterItem::from_spec(index, &spec.root_name, raw)?;
        if let Some(first) = seen.get(&item.route_id) {
            return Err(GenerateError::DerivationCollision {
                route_id: item.route_id.to_string(),
                first: first.clone(),
                second: item.path.clone(),
            });
        }
        tracing::debug!(
            route_id = %item.route_id,
            class = %item.class_name,
            path = %item.path,
            "Derived router item"
        );
        seen.insert(item.route_id.clone(), item.path.clone());
        items.push(item);
    }
    Ok(items)
}
