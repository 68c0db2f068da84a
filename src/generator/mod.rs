//! # Generator Module
//!
//! The generator turns a [`ModuleSpec`](crate::spec::ModuleSpec) into the
//! files of a Drupal module.
//!
//! ## Overview
//!
//! Each router item is validated into a typed [`RouterItem`], then feeds
//! four collections keyed by derived identifiers:
//!
//! - **Routes** - one record per item in `{module}.routing.yml`
//! - **Controller classes** - one PHP class per distinct derived class name
//! - **Menu links** - one record per item declaring `menu_link`
//! - **Info / README** - module metadata
//!
//! ## Architecture
//!
//! ```text
//! ModuleSpec → validate (RouterItem) → class plan → routes / menu / classes → GeneratedFileSet
//! ```
//!
//! Generation is a pure function: the same spec and config always produce
//! the same file set. Writing to disk is a separate step.
//!
//! ## Generated Structure
//!
//! ```text
//! test_module/
//! ├── test_module.info.yml
//! ├── test_module.routing.yml        # if any router items
//! ├── test_module.links.menu.yml     # if any item declares a menu link
//! ├── README.md                      # if readme: true
//! └── src/
//!     └── Controller/
//!         └── *Controller.php        # one per distinct class name
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use drupal_routegen::generator::{generate_module_files, GeneratorConfig};
//! use drupal_routegen::spec::load_module_spec;
//!
//! let spec = load_module_spec("module.yaml".as_ref())?;
//! let files = generate_module_files(&spec, &GeneratorConfig::default())?;
//! for path in files.paths() {
//!     println!("{path}");
//! }
//! ```
//!
//! ## Template Customization
//!
//! Templates are located in the `templates/` directory:
//!
//! - `controller.php.txt` - Controller class template
//! - `README.md.txt` - Module README template

mod access;
mod classes;
mod config;
mod controller;
mod error;
mod item;
mod menu;
mod project;
mod routes;
mod templates;
#[cfg(test)]
mod tests;

pub use access::{AccessType, Requirement};
pub use classes::{class_file_path, ControllerClassPlan, PlannedClass, CONTENT_METHOD};
pub use config::{
    load_config_for_spec, load_generator_config, resolve_config_path, GeneratorConfig,
    CONFIG_FILE_NAME,
};
pub use controller::{ControllerType, RouteDefault};
pub use error::GenerateError;
pub use item::{validate_module, validate_router_items, RouterItem};
pub use menu::{emit_menu_links, MenuLinkRecord, MenuLinksDocument};
pub use project::*;
pub use routes::{emit_routes, route_record, RouteRecord, RoutingDocument};
pub use templates::{php_single_quoted, ControllerMethod};
