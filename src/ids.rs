//! Identifier derivation for router items.
//!
//! Every generated artifact is cross-referenced through identifiers derived
//! from the router item's URL path:
//!
//! | Path                   | Route id                        | Controller class                |
//! |------------------------|---------------------------------|---------------------------------|
//! | `/my/path`             | `test_module.my.path`           | `MyPathController`              |
//! | `/my/other-path`       | `test_module.my.other_path`     | `MyOtherPathController`         |
//! | `/my/{parameter}/path` | `test_module.my.parameter.path` | `MyParameterPathController`     |
//! | `/my/path/controller`  | `test_module.my.path.controller`| `MyPathControllerController`    |
//!
//! All functions here are pure: the same path always yields the same ids.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

#[allow(clippy::expect_used)]
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid placeholder regex"));

/// Canonical dotted route identifier, e.g. `test_module.my.other_path`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct RouteId(String);

impl RouteId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RouteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RouteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for RouteId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Why a path cannot be used to derive identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path does not begin with `/`.
    MissingLeadingSlash,
    /// The path has no non-empty segment (e.g. `/` or `//`).
    NoSegments,
}

impl Display for PathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::MissingLeadingSlash => write!(f, "path must start with '/'"),
            PathError::NoSegments => write!(f, "path must contain at least one segment"),
        }
    }
}

/// Split a path into its normalized segments: braces stripped, empty
/// segments dropped.
///
/// # Errors
///
/// Returns a [`PathError`] if the path does not start with `/` or has no
/// segments.
pub fn path_segments(path: &str) -> Result<Vec<String>, PathError> {
    let rest = path
        .strip_prefix('/')
        .ok_or(PathError::MissingLeadingSlash)?;
    let segments: Vec<String> = rest
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| s.replace(['{', '}'], ""))
        .filter(|s| !s.is_empty())
        .collect();
    if segments.is_empty() {
        return Err(PathError::NoSegments);
    }
    Ok(segments)
}

/// Derive the route id for `path` within `module`.
///
/// # Errors
///
/// See [`path_segments`].
pub fn route_id(module: &str, path: &str) -> Result<RouteId, PathError> {
    let segments = path_segments(path)?;
    let mut id = module.to_string();
    for segment in segments {
        id.push('.');
        id.push_str(&segment.to_lowercase().replace('-', "_"));
    }
    Ok(RouteId(id))
}

/// Split a segment into words on every character outside `[A-Za-z0-9]`.
fn words(segment: &str) -> impl Iterator<Item = &str> {
    segment
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Prefix for class names whose first word starts with a digit, since a PHP
/// identifier cannot.
pub const DIGIT_CLASS_PREFIX: &str = "Path";

/// Derive the controller class name for `path`.
///
/// Words are the ASCII alphanumeric runs of each segment, capitalised and
/// joined, so the result is always a valid PHP identifier (`/sitemap.xml`
/// gives `SitemapXmlController`, `/404` gives `Path404Controller`).
///
/// # Errors
///
/// See [`path_segments`].
pub fn controller_class_name(path: &str) -> Result<String, PathError> {
    let segments = path_segments(path)?;
    let mut name: String = segments
        .iter()
        .flat_map(|s| words(s).map(capitalize).collect::<Vec<_>>())
        .collect();
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert_str(0, DIGIT_CLASS_PREFIX);
    }
    name.push_str("Controller");
    Ok(name)
}

/// Title used when a router item has none: the first segment in
/// lowerCamelCase followed by `Page` (`/my/path` → `myPage`).
///
/// # Errors
///
/// See [`path_segments`].
pub fn default_title(path: &str) -> Result<String, PathError> {
    let segments = path_segments(path)?;
    let mut title = String::new();
    for (i, word) in words(&segments[0]).enumerate() {
        if i == 0 {
            title.push_str(&word.to_lowercase());
        } else {
            title.push_str(&capitalize(word));
        }
    }
    title.push_str("Page");
    Ok(title)
}

/// Names of the `{placeholder}` parameters in `path`, in order.
pub fn path_parameters(path: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(path)
        .map(|c| c[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_id_normalizes_segments() {
        assert_eq!(
            route_id("test_module", "/my/path").unwrap().as_str(),
            "test_module.my.path"
        );
        assert_eq!(
            route_id("test_module", "/my/other-path").unwrap().as_str(),
            "test_module.my.other_path"
        );
        assert_eq!(
            route_id("test_module", "/my/{parameter}/path")
                .unwrap()
                .as_str(),
            "test_module.my.parameter.path"
        );
    }

    #[test]
    fn test_controller_class_name() {
        assert_eq!(controller_class_name("/my/path").unwrap(), "MyPathController");
        assert_eq!(
            controller_class_name("/my/other-path").unwrap(),
            "MyOtherPathController"
        );
        assert_eq!(
            controller_class_name("/my/{parameter}/path").unwrap(),
            "MyParameterPathController"
        );
        assert_eq!(
            controller_class_name("/my/path/controller").unwrap(),
            "MyPathControllerController"
        );
    }

    #[test]
    fn test_controller_class_name_is_php_identifier() {
        assert_eq!(
            controller_class_name("/sitemap.xml").unwrap(),
            "SitemapXmlController"
        );
        assert_eq!(controller_class_name("/404").unwrap(), "Path404Controller");
        assert_eq!(
            controller_class_name("/feeds/rss~2.0").unwrap(),
            "FeedsRss20Controller"
        );
        assert_eq!(controller_class_name("/a1b").unwrap(), "A1bController");
        for path in ["/sitemap.xml", "/404", "/my/{node}.json", "/x+y/@me"] {
            let name = controller_class_name(path).unwrap();
            assert!(name.starts_with(|c: char| c.is_ascii_alphabetic()), "{name}");
            assert!(name.chars().all(|c| c.is_ascii_alphanumeric()), "{name}");
        }
    }

    #[test]
    fn test_default_title() {
        assert_eq!(default_title("/my/path").unwrap(), "myPage");
        assert_eq!(default_title("/admin-tools/x").unwrap(), "adminToolsPage");
        assert_eq!(default_title("/{node}/edit").unwrap(), "nodePage");
        assert_eq!(default_title("/sitemap.xml").unwrap(), "sitemapXmlPage");
    }

    #[test]
    fn test_invalid_paths() {
        assert_eq!(route_id("m", "my/path"), Err(PathError::MissingLeadingSlash));
        assert_eq!(route_id("m", "/"), Err(PathError::NoSegments));
        assert_eq!(controller_class_name("//"), Err(PathError::NoSegments));
    }

    #[test]
    fn test_path_parameters() {
        assert_eq!(path_parameters("/my/{parameter}/path"), vec!["parameter"]);
        assert_eq!(
            path_parameters("/node/{node}/revisions/{node_revision}"),
            vec!["node", "node_revision"]
        );
        assert!(path_parameters("/my/path").is_empty());
    }
}
