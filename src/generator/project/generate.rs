use serde::Serialize;

use crate::generator::classes::ControllerClassPlan;
use crate::generator::config::GeneratorConfig;
use crate::generator::error::GenerateError;
use crate::generator::item::{validate_router_items, RouterItem};
use crate::generator::menu::emit_menu_links;
use crate::generator::routes::emit_routes;
use crate::generator::templates::{ReadmeRoute, ReadmeTemplate};
use crate::spec::ModuleSpec;

use super::files::{FileKind, GeneratedFileSet};
use askama::Template;

const DEFAULT_DESCRIPTION: &str = "TODO: Description of module";

/// Contents of `{module}.info.yml`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InfoFile {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub core: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
}

fn readable_name(spec: &ModuleSpec) -> String {
    spec.readable_name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| spec.root_name.clone())
}

fn description(spec: &ModuleSpec) -> String {
    spec.short_description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string())
}

/// Build the info file for `spec`.
pub fn info_file(spec: &ModuleSpec, config: &GeneratorConfig) -> InfoFile {
    InfoFile {
        name: readable_name(spec),
        kind: spec.base.clone(),
        description: description(spec),
        core: config.core.clone(),
        package: spec.package.clone(),
    }
}

/// Generate every file of the module described by `spec`.
///
/// This is a pure function of `spec` and `config`; nothing is written to
/// disk (see [`GeneratedFileSet::write_to`]).
///
/// # Errors
///
/// Fails fast on the first invalid router item, on a route id collision,
/// or if rendering or serialization fails.
pub fn generate_module_files(
    spec: &ModuleSpec,
    config: &GeneratorConfig,
) -> Result<GeneratedFileSet, GenerateError> {
    let items = validate_router_items(spec)?;
    generate_module_files_from_items(spec, &items, config)
}

/// Generate the module files from router items already produced by
/// [`validate_router_items`] for the same `spec`.
///
/// # Errors
///
/// Fails if rendering or serialization fails.
pub fn generate_module_files_from_items(
    spec: &ModuleSpec,
    items: &[RouterItem],
    config: &GeneratorConfig,
) -> Result<GeneratedFileSet, GenerateError> {
    let module = spec.root_name.as_str();
    let mut files = GeneratedFileSet::new();

    files.insert(
        format!("{module}.info.yml"),
        FileKind::Info,
        serde_yaml::to_string(&info_file(spec, config))?,
    );

    if !items.is_empty() {
        let plan = ControllerClassPlan::new(module, items);
        let routing = emit_routes(items, &plan, config)?;
        files.insert(
            format!("{module}.routing.yml"),
            FileKind::Routing,
            routing.to_yaml()?,
        );

        for (path, source) in plan.render(items)? {
            files.insert(path, FileKind::Controller, source);
        }

        let menu = emit_menu_links(items);
        if !menu.is_empty() {
            files.insert(
                format!("{module}.links.menu.yml"),
                FileKind::MenuLinks,
                menu.to_yaml()?,
            );
        }
    }

    if spec.readme {
        let readme = ReadmeTemplate {
            module: module.to_string(),
            name: readable_name(spec),
            description: description(spec),
            routes: items
                .iter()
                .map(|i| ReadmeRoute {
                    route_id: i.route_id.to_string(),
                    path: i.path.clone(),
                    title: i.title.clone(),
                })
                .collect(),
        }
        .render()?;
        files.insert("README.md", FileKind::Readme, readme);
    }

    tracing::info!(
        module,
        router_items = items.len(),
        files = files.len(),
        "Generated module files"
    );
    Ok(files)
}
