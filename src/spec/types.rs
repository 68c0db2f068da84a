use serde::{Deserialize, Serialize};

/// A module-level specification as supplied by the caller.
///
/// Deserialized from YAML or JSON. Router item variants stay untyped here
/// (tags are plain strings) so that unknown tags surface as a
/// [`GenerateError::Configuration`](crate::generator::GenerateError) naming
/// the offending item rather than as an opaque parse error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleSpec {
    /// Component base; only `module` is generated.
    #[serde(default = "default_base")]
    pub base: String,
    /// Machine name of the module, e.g. `test_module`.
    pub root_name: String,
    /// Human-readable module name used in the info file.
    #[serde(default)]
    pub readable_name: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    /// Optional package grouping on the modules admin page.
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub router_items: Vec<RouterItemSpec>,
    /// Whether to generate a README.md.
    #[serde(default)]
    pub readme: bool,
}

fn default_base() -> String {
    "module".to_string()
}

/// One declared route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouterItemSpec {
    /// URL path, may contain `{parameter}` placeholders.
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub controller: ControllerSpec,
    pub access: AccessSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_link: Option<MenuLinkSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ControllerSpec {
    pub controller_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_view_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_form_mode: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessSpec {
    pub access_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_access_operation: Option<String>,
    /// Overrides the configured default permission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    /// Overrides the configured default role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuLinkSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parent menu link plugin id, e.g. `system.admin_config`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl ControllerSpec {
    /// Shorthand for a spec carrying only a tag.
    pub fn of_type(controller_type: &str) -> Self {
        ControllerSpec {
            controller_type: controller_type.to_string(),
            entity_type_id: None,
            entity_view_mode: None,
            entity_form_mode: None,
        }
    }
}

impl AccessSpec {
    /// Shorthand for a spec carrying only a tag.
    pub fn of_type(access_type: &str) -> Self {
        AccessSpec {
            access_type: access_type.to_string(),
            entity_type_id: None,
            entity_access_operation: None,
            permission: None,
            role: None,
        }
    }
}
