//! Route emission.
//!
//! Builds one [`RouteRecord`] per router item and merges them into a
//! routing document keyed by route id, preserving input order.

use super::classes::ControllerClassPlan;
use super::config::GeneratorConfig;
use super::error::GenerateError;
use super::item::{item_location, RouterItem};
use crate::ids::RouteId;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

/// One entry of `{module}.routing.yml`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteRecord {
    pub path: String,
    /// Handler key (`_controller`, `_form`, ...) followed by `_title`
    pub defaults: Mapping,
    /// Omitted when the access type emits no requirement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Mapping>,
}

/// The routing document, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RoutingDocument {
    routes: Vec<(RouteId, RouteRecord)>,
}

impl RoutingDocument {
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn get(&self, id: &str) -> Option<&RouteRecord> {
        self.routes
            .iter()
            .find(|(route_id, _)| route_id.as_str() == id)
            .map(|(_, record)| record)
    }

    pub fn routes(&self) -> impl Iterator<Item = (&RouteId, &RouteRecord)> {
        self.routes.iter().map(|(id, record)| (id, record))
    }

    /// Add a record.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::DerivationCollision`] if `id` is already
    /// present.
    pub fn insert(&mut self, id: RouteId, record: RouteRecord) -> Result<(), GenerateError> {
        if let Some((_, existing)) = self.routes.iter().find(|(r, _)| *r == id) {
            return Err(GenerateError::DerivationCollision {
                route_id: id.to_string(),
                first: existing.path.clone(),
                second: record.path,
            });
        }
        self.routes.push((id, record));
        Ok(())
    }

    /// Serialize as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Serialize`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, GenerateError> {
        keyed_yaml(&self.routes)
    }
}

/// Serialize `(id, record)` pairs as a YAML mapping keyed by id.
pub(crate) fn keyed_yaml<T: Serialize>(entries: &[(RouteId, T)]) -> Result<String, GenerateError> {
    let mut doc = Mapping::new();
    for (id, record) in entries {
        doc.insert(Value::String(id.to_string()), serde_yaml::to_value(record)?);
    }
    Ok(serde_yaml::to_string(&doc)?)
}

/// Build the route record for one item.
///
/// # Errors
///
/// Returns [`GenerateError::Configuration`] if a controller item has no
/// method in `plan`.
pub fn route_record(
    item: &RouterItem,
    plan: &ControllerClassPlan,
    config: &GeneratorConfig,
) -> Result<RouteRecord, GenerateError> {
    let location = item_location(item.index);
    let handler = item
        .controller
        .route_default(plan.handler_for(item.index), config, &location)?;

    let mut defaults = Mapping::new();
    defaults.insert(Value::from(handler.key), Value::from(handler.value));
    defaults.insert(Value::from("_title"), Value::from(item.title.clone()));

    let requirements = item.access.requirement(config).map(|req| {
        let mut map = Mapping::new();
        map.insert(Value::from(req.key), Value::from(req.value));
        map
    });

    Ok(RouteRecord {
        path: item.path.clone(),
        defaults,
        requirements,
    })
}

/// Emit the routing document for `items`.
///
/// # Errors
///
/// See [`route_record`] and [`RoutingDocument::insert`].
pub fn emit_routes(
    items: &[RouterItem],
    plan: &ControllerClassPlan,
    config: &GeneratorConfig,
) -> Result<RoutingDocument, GenerateError> {
    let mut doc = RoutingDocument::default();
    for item in items {
        doc.insert(item.route_id.clone(), route_record(item, plan, config)?)?;
    }
    Ok(doc)
}
