//! Access rule resolution.
//!
//! Maps the `access_type` tag of a router item onto at most one route
//! requirement. `access` emits nothing.

use super::config::GeneratorConfig;
use super::controller::required;
use super::error::GenerateError;
use crate::spec::AccessSpec;

/// Kind of authorization check guarding a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessType {
    /// `_permission`; `None` uses the configured default
    Permission(Option<String>),
    /// `_role`; `None` uses the configured default
    Role(Option<String>),
    EntityAccess {
        entity_type_id: String,
        operation: String,
    },
    /// No requirement is emitted
    Access,
}

/// One `requirements` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub key: &'static str,
    pub value: String,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl AccessType {
    /// Build the typed access rule from its raw spec.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Configuration`] for an unknown tag or when
    /// `entity_access` lacks its entity type or operation.
    pub fn from_spec(spec: &AccessSpec, location: &str) -> Result<Self, GenerateError> {
        let tag = spec.access_type.as_str();
        match tag {
            "permission" => Ok(AccessType::Permission(non_empty(&spec.permission))),
            "role" => Ok(AccessType::Role(non_empty(&spec.role))),
            "entity_access" => Ok(AccessType::EntityAccess {
                entity_type_id: required(&spec.entity_type_id, "entity_type_id", tag, location)?,
                operation: required(
                    &spec.entity_access_operation,
                    "entity_access_operation",
                    tag,
                    location,
                )?,
            }),
            "access" => Ok(AccessType::Access),
            other => Err(GenerateError::config(
                location,
                format!(
                    "unknown access_type '{other}' (expected one of: permission, role, \
                    entity_access, access)"
                ),
            )),
        }
    }

    /// Resolve the requirement, if any.
    pub fn requirement(&self, config: &GeneratorConfig) -> Option<Requirement> {
        match self {
            AccessType::Permission(permission) => Some(Requirement {
                key: "_permission",
                value: permission
                    .clone()
                    .unwrap_or_else(|| config.default_permission.clone()),
            }),
            AccessType::Role(role) => Some(Requirement {
                key: "_role",
                value: role.clone().unwrap_or_else(|| config.default_role.clone()),
            }),
            AccessType::EntityAccess {
                entity_type_id,
                operation,
            } => Some(Requirement {
                key: "_entity_access",
                value: format!("{entity_type_id}.{operation}"),
            }),
            AccessType::Access => None,
        }
    }
}
