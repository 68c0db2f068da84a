//! Controller class emission.
//!
//! Items of type `controller` are grouped by derived class name. Each group
//! becomes one PHP class with one method per item: the first item gets
//! `content`, later items sharing the class get `content2`, `content3`, ...
//!
//! PHP class names are case-insensitive, so grouping ignores ASCII case
//! (`/a-b` and `/ab` share one class). The group keeps the spelling of its
//! first item.

use super::error::GenerateError;
use super::item::RouterItem;
use super::templates::{php_single_quoted, ControllerClassTemplate, ControllerMethod};
use askama::Template;
use std::collections::HashMap;

/// Base name of the first method in every class.
pub const CONTENT_METHOD: &str = "content";

/// One planned class: its name and the items contributing methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedClass {
    pub class_name: String,
    /// `(item index, method name)` in input order
    pub methods: Vec<(usize, String)>,
}

/// Method assignment for every controller item in a module.
#[derive(Debug, Clone, Default)]
pub struct ControllerClassPlan {
    module: String,
    classes: Vec<PlannedClass>,
    handlers: HashMap<usize, String>,
}

/// Relative path of a controller class file.
pub fn class_file_path(class_name: &str) -> String {
    format!("src/Controller/{class_name}.php")
}

fn method_name(position: usize) -> String {
    if position == 0 {
        CONTENT_METHOD.to_string()
    } else {
        format!("{CONTENT_METHOD}{}", position + 1)
    }
}

impl ControllerClassPlan {
    /// Group the controller items of `items` by case-folded class name, in
    /// first-seen order.
    pub fn new(module: &str, items: &[RouterItem]) -> Self {
        let mut classes: Vec<PlannedClass> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();
        let mut handlers = HashMap::new();

        for item in items.iter().filter(|i| i.controller.needs_class()) {
            let key = item.class_name.to_ascii_lowercase();
            let slot = *by_name.entry(key).or_insert_with(|| {
                classes.push(PlannedClass {
                    class_name: item.class_name.clone(),
                    methods: Vec::new(),
                });
                classes.len() - 1
            });
            let class = &mut classes[slot];
            let method = method_name(class.methods.len());
            handlers.insert(
                item.index,
                format!(
                    "\\Drupal\\{module}\\Controller\\{}::{method}",
                    class.class_name
                ),
            );
            class.methods.push((item.index, method));
        }

        ControllerClassPlan {
            module: module.to_string(),
            classes,
            handlers,
        }
    }

    /// Fully-qualified `Class::method` reference for the item at `index`.
    pub fn handler_for(&self, index: usize) -> Option<&str> {
        self.handlers.get(&index).map(String::as_str)
    }

    pub fn classes(&self) -> &[PlannedClass] {
        &self.classes
    }

    /// Name of the class the item at `index` was planned into.
    pub fn class_for(&self, index: usize) -> Option<&str> {
        self.classes
            .iter()
            .find(|c| c.methods.iter().any(|(i, _)| *i == index))
            .map(|c| c.class_name.as_str())
    }

    /// Render every planned class as `(relative path, PHP source)`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Render`] if a template fails.
    pub fn render(&self, items: &[RouterItem]) -> Result<Vec<(String, String)>, GenerateError> {
        let by_index: HashMap<usize, &RouterItem> = items.iter().map(|i| (i.index, i)).collect();
        let mut files = Vec::with_capacity(self.classes.len());
        for class in &self.classes {
            let methods = class
                .methods
                .iter()
                .filter_map(|(index, name)| by_index.get(index).map(|item| (item, name)))
                .map(|(item, name)| ControllerMethod {
                    name: name.clone(),
                    route_id: item.route_id.to_string(),
                    parameters: item.parameters.clone(),
                    arguments: item
                        .parameters
                        .iter()
                        .map(|p| format!("${p}"))
                        .collect::<Vec<_>>()
                        .join(", "),
                    markup: php_single_quoted(&item.title),
                })
                .collect();
            let source = ControllerClassTemplate {
                module: self.module.clone(),
                class_name: class.class_name.clone(),
                methods,
            }
            .render()?;
            tracing::debug!(class = %class.class_name, methods = class.methods.len(), "Rendered controller class");
            files.push((class_file_path(&class.class_name), source));
        }
        Ok(files)
    }
}
