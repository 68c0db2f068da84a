//! # Module Spec Linter
//!
//! Reports every problem in a module spec at once, where generation stops
//! at the first one.
//!
//! ## Checks Performed
//!
//! 1. **Module fields** - `base` must be `module`, `root_name` a machine name
//! 2. **Paths** - must start with `/` and have at least one segment
//! 3. **Controller and access types** - known tags with their required fields
//! 4. **Route id collisions** - two items deriving the same route id
//! 5. **Menu links** - must have a title
//! 6. **Shared controller classes** - items grouped into one class (info)
//! 7. **Default titles** - items relying on the derived title (info)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use drupal_routegen::linter::{lint_module_spec, print_lint_issues};
//!
//! let issues = lint_module_spec(&spec);
//! print_lint_issues(&issues);
//! ```

use crate::generator::{validate_module, AccessType, ControllerType, GenerateError};
use crate::ids;
use crate::spec::ModuleSpec;
use std::collections::HashMap;
use std::fmt;


/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Error - Will cause code generation to fail
    Error,
    /// Warning - May cause issues but won't block generation
    Warning,
    /// Info - Worth knowing about the generated output
    Info,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Error => write!(f, "error"),
            LintSeverity::Warning => write!(f, "warning"),
            LintSeverity::Info => write!(f, "info"),
        }
    }
}

/// A lint issue found in a module spec
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Where the issue occurred (e.g., "router_items[2]", "root_name")
    pub location: String,
    /// Severity of the issue
    pub severity: LintSeverity,
    /// Type of lint issue (e.g., "unknown_controller_type", "route_id_collision")
    pub kind: String,
    /// Human-readable description of the problem
    pub message: String,
    /// Optional suggestion for how to fix it
    pub suggestion: Option<String>,
}

impl LintIssue {
    /// Create a new lint issue
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion for fixing the issue
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

fn config_issue(kind: &str, err: GenerateError) -> LintIssue {
    match err {
        GenerateError::Configuration { location, message } => {
            LintIssue::new(location, LintSeverity::Error, kind, message)
        }
        other => LintIssue::new("", LintSeverity::Error, kind, other.to_string()),
    }
}

/// Lint a module spec
///
/// # Returns
///
/// All issues found, in spec order.
pub fn lint_module_spec(spec: &ModuleSpec) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    if let Err(e) = validate_module(spec) {
        issues.push(config_issue("invalid_module", e));
    }

    let mut route_ids: HashMap<String, (usize, String)> = HashMap::new();
    // Keyed case-insensitively, as PHP resolves class names; value keeps the
    // first spelling.
    let mut classes: HashMap<String, (String, Vec<usize>)> = HashMap::new();

    for (index, item) in spec.router_items.iter().enumerate() {
        let location = format!("router_items[{index}]");

        match ids::route_id(&spec.root_name, &item.path) {
            Ok(route_id) => {
                let route_id = route_id.to_string();
                if let Some((first, first_path)) = route_ids.get(&route_id) {
                    issues.push(
                        LintIssue::new(
                            &location,
                            LintSeverity::Error,
                            "route_id_collision",
                            format!(
                                "'{}' derives route id '{route_id}', already used by \
                                router_items[{first}] ('{first_path}')",
                                item.path
                            ),
                        )
                        .with_suggestion("Change one of the paths so their normalized segments differ"),
                    );
                } else {
                    route_ids.insert(route_id, (index, item.path.clone()));
                }
            }
            Err(e) => {
                let mut issue = LintIssue::new(
                    &location,
                    LintSeverity::Error,
                    "invalid_path",
                    format!("invalid path '{}': {e}", item.path),
                );
                if e == ids::PathError::MissingLeadingSlash {
                    issue = issue.with_suggestion(format!("Use '/{}'", item.path));
                }
                issues.push(issue);
                continue;
            }
        }

        match ControllerType::from_spec(&item.controller, &location) {
            Ok(controller) => {
                if controller.needs_class() {
                    if let Ok(class_name) = ids::controller_class_name(&item.path) {
                        classes
                            .entry(class_name.to_ascii_lowercase())
                            .or_insert_with(|| (class_name, Vec::new()))
                            .1
                            .push(index);
                    }
                }
            }
            Err(e) => issues.push(config_issue("invalid_controller", e)),
        }

        if let Err(e) = AccessType::from_spec(&item.access, &location) {
            issues.push(config_issue("invalid_access", e));
        }

        if let Some(link) = &item.menu_link {
            if link.title.trim().is_empty() {
                issues.push(LintIssue::new(
                    &location,
                    LintSeverity::Error,
                    "menu_link_title",
                    "menu_link requires a title",
                ));
            }
            if !ids::path_parameters(&item.path).is_empty() {
                issues.push(
                    LintIssue::new(
                        &location,
                        LintSeverity::Warning,
                        "menu_link_with_parameters",
                        format!(
                            "static menu link points at '{}', which has route parameters",
                            item.path
                        ),
                    )
                    .with_suggestion("Supply route_parameters in the generated menu link by hand"),
                );
            }
        }

        if item.title.as_deref().map(str::trim).unwrap_or("").is_empty() {
            if let Ok(title) = ids::default_title(&item.path) {
                issues.push(
                    LintIssue::new(
                        &location,
                        LintSeverity::Info,
                        "default_title",
                        format!("no title given; '{title}' will be used"),
                    )
                    .with_suggestion("Add a 'title' to the router item"),
                );
            }
        }
    }

    let mut shared: Vec<_> = classes
        .into_values()
        .filter(|(_, v)| v.len() > 1)
        .collect();
    shared.sort_by_key(|(_, v)| v[0]);
    for (class_name, indices) in shared {
        let members = indices
            .iter()
            .map(|i| format!("router_items[{i}]"))
            .collect::<Vec<_>>()
            .join(", ");
        issues.push(LintIssue::new(
            format!("class:{class_name}"),
            LintSeverity::Info,
            "shared_controller_class",
            format!("{members} share controller class {class_name}; one method each"),
        ));
    }

    issues
}

/// Print lint issues to stderr, grouped by severity
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        eprintln!("✅ No issues found");
        return;
    }
    for severity in [LintSeverity::Error, LintSeverity::Warning, LintSeverity::Info] {
        for issue in issues.iter().filter(|i| i.severity == severity) {
            eprintln!(
                "[{}] {} ({}): {}",
                issue.severity, issue.location, issue.kind, issue.message
            );
            if let Some(suggestion) = &issue.suggestion {
                eprintln!("    💡 {suggestion}");
            }
        }
    }
}

/// Number of error-severity issues.
pub fn error_count(issues: &[LintIssue]) -> usize {
    issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Error)
        .count()
}
