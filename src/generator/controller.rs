//! Controller type resolution.
//!
//! Maps the `controller_type` tag of a router item onto the route default
//! that names its handler:
//!
//! | Tag           | Default key     | Value                                     |
//! |---------------|-----------------|-------------------------------------------|
//! | `controller`  | `_controller`   | `\Drupal\{module}\Controller\{Class}::{method}` |
//! | `form`        | `_form`         | configured form class                     |
//! | `entity_view` | `_entity_view`  | `{entity_type_id}.{entity_view_mode}`     |
//! | `entity_form` | `_entity_form`  | `{entity_type_id}.{entity_form_mode}`     |
//! | `entity_list` | `_entity_list`  | `{entity_type_id}`                        |

use super::config::GeneratorConfig;
use super::error::GenerateError;
use crate::spec::ControllerSpec;

/// Kind of handler backing a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerType {
    /// A generated controller class method
    Controller,
    /// A form class
    Form,
    EntityView {
        entity_type_id: String,
        view_mode: String,
    },
    EntityForm {
        entity_type_id: String,
        form_mode: String,
    },
    EntityList {
        entity_type_id: String,
    },
}

/// One `defaults` entry naming the route handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefault {
    pub key: &'static str,
    pub value: String,
}

pub(crate) fn required(
    value: &Option<String>,
    field: &str,
    tag: &str,
    location: &str,
) -> Result<String, GenerateError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(GenerateError::config(
            location,
            format!("'{tag}' requires '{field}'"),
        )),
    }
}

impl ControllerType {
    /// Build the typed controller from its raw spec.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Configuration`] for an unknown tag or a
    /// missing entity field.
    pub fn from_spec(spec: &ControllerSpec, location: &str) -> Result<Self, GenerateError> {
        let tag = spec.controller_type.as_str();
        match tag {
            "controller" => Ok(ControllerType::Controller),
            "form" => Ok(ControllerType::Form),
            "entity_view" => Ok(ControllerType::EntityView {
                entity_type_id: required(&spec.entity_type_id, "entity_type_id", tag, location)?,
                view_mode: required(&spec.entity_view_mode, "entity_view_mode", tag, location)?,
            }),
            "entity_form" => Ok(ControllerType::EntityForm {
                entity_type_id: required(&spec.entity_type_id, "entity_type_id", tag, location)?,
                form_mode: required(&spec.entity_form_mode, "entity_form_mode", tag, location)?,
            }),
            "entity_list" => Ok(ControllerType::EntityList {
                entity_type_id: required(&spec.entity_type_id, "entity_type_id", tag, location)?,
            }),
            other => Err(GenerateError::config(
                location,
                format!(
                    "unknown controller_type '{other}' (expected one of: controller, form, \
                    entity_view, entity_form, entity_list)"
                ),
            )),
        }
    }

    /// The route default key this type emits.
    pub fn default_key(&self) -> &'static str {
        match self {
            ControllerType::Controller => "_controller",
            ControllerType::Form => "_form",
            ControllerType::EntityView { .. } => "_entity_view",
            ControllerType::EntityForm { .. } => "_entity_form",
            ControllerType::EntityList { .. } => "_entity_list",
        }
    }

    /// Whether this type is backed by a generated controller class.
    pub fn needs_class(&self) -> bool {
        matches!(self, ControllerType::Controller)
    }

    /// Resolve the route default.
    ///
    /// `handler` is the `Class::method` reference assigned by the class
    /// emitter; it is only consulted for [`ControllerType::Controller`].
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Configuration`] if a controller item has no
    /// assigned handler.
    pub fn route_default(
        &self,
        handler: Option<&str>,
        config: &GeneratorConfig,
        location: &str,
    ) -> Result<RouteDefault, GenerateError> {
        let value = match self {
            ControllerType::Controller => handler
                .ok_or_else(|| GenerateError::config(location, "no controller method assigned"))?
                .to_string(),
            ControllerType::Form => config.form_class.clone(),
            ControllerType::EntityView {
                entity_type_id,
                view_mode,
            } => format!("{entity_type_id}.{view_mode}"),
            ControllerType::EntityForm {
                entity_type_id,
                form_mode,
            } => format!("{entity_type_id}.{form_mode}"),
            ControllerType::EntityList { entity_type_id } => entity_type_id.clone(),
        };
        Ok(RouteDefault {
            key: self.default_key(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(tag: &str, mode_field: &str) -> ControllerSpec {
        let mut spec = ControllerSpec::of_type(tag);
        spec.entity_type_id = Some("node".to_string());
        match mode_field {
            "view" => spec.entity_view_mode = Some("teaser".to_string()),
            "form" => spec.entity_form_mode = Some("edit".to_string()),
            _ => {}
        }
        spec
    }

    fn resolve(spec: &ControllerSpec) -> RouteDefault {
        ControllerType::from_spec(spec, "router_items[0]")
            .unwrap()
            .route_default(Some("X::content"), &GeneratorConfig::default(), "router_items[0]")
            .unwrap()
    }

    #[test]
    fn test_entity_defaults() {
        let view = resolve(&entity("entity_view", "view"));
        assert_eq!((view.key, view.value.as_str()), ("_entity_view", "node.teaser"));
        let form = resolve(&entity("entity_form", "form"));
        assert_eq!((form.key, form.value.as_str()), ("_entity_form", "node.edit"));
        let list = resolve(&entity("entity_list", ""));
        assert_eq!((list.key, list.value.as_str()), ("_entity_list", "node"));
    }

    #[test]
    fn test_form_uses_configured_class() {
        let form = resolve(&ControllerSpec::of_type("form"));
        assert_eq!(form.key, "_form");
        assert_eq!(form.value, r"\Drupal\module\Form\FormClassName");
    }

    #[test]
    fn test_controller_uses_assigned_handler() {
        let ctl = resolve(&ControllerSpec::of_type("controller"));
        assert_eq!((ctl.key, ctl.value.as_str()), ("_controller", "X::content"));
        let missing = ControllerType::Controller.route_default(
            None,
            &GeneratorConfig::default(),
            "router_items[0]",
        );
        assert!(missing.is_err());
    }

    #[test]
    fn test_unknown_tag_is_configuration_error() {
        let err = ControllerType::from_spec(&ControllerSpec::of_type("page"), "router_items[3]")
            .unwrap_err();
        match err {
            GenerateError::Configuration { location, message } => {
                assert_eq!(location, "router_items[3]");
                assert!(message.contains("unknown controller_type 'page'"));
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_entity_field() {
        let mut spec = ControllerSpec::of_type("entity_view");
        spec.entity_type_id = Some("node".to_string());
        let err = ControllerType::from_spec(&spec, "router_items[0]").unwrap_err();
        assert!(err.to_string().contains("'entity_view' requires 'entity_view_mode'"));
    }
}
