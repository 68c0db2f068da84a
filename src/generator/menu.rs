//! Menu link emission.

use super::error::GenerateError;
use super::item::RouterItem;
use super::routes::keyed_yaml;
use crate::ids::RouteId;
use serde::Serialize;

/// One entry of `{module}.links.menu.yml`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MenuLinkRecord {
    pub title: String,
    pub route_name: RouteId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// Menu links keyed by the route id they point at.
#[derive(Debug, Clone, Default)]
pub struct MenuLinksDocument {
    links: Vec<(RouteId, MenuLinkRecord)>,
}

impl MenuLinksDocument {
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn get(&self, id: &str) -> Option<&MenuLinkRecord> {
        self.links
            .iter()
            .find(|(link_id, _)| link_id.as_str() == id)
            .map(|(_, record)| record)
    }

    /// Serialize as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Serialize`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, GenerateError> {
        keyed_yaml(&self.links)
    }
}

/// Emit a link for every item that declares `menu_link`.
pub fn emit_menu_links(items: &[RouterItem]) -> MenuLinksDocument {
    let links = items
        .iter()
        .filter_map(|item| {
            item.menu_link.as_ref().map(|link| {
                (
                    item.route_id.clone(),
                    MenuLinkRecord {
                        title: link.title.trim().to_string(),
                        route_name: item.route_id.clone(),
                        description: link.description.clone(),
                        parent: link.parent.clone(),
                    },
                )
            })
        })
        .collect();
    MenuLinksDocument { links }
}
