use std::fmt;

/// Generation error
///
/// Returned by [`generate_module_files`](super::generate_module_files). Any
/// error aborts the whole run: a partially generated module is not a valid
/// deliverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The module spec or a router item is invalid
    ///
    /// Covers unknown controller/access tags, missing type-specific fields,
    /// unusable paths, and unsupported component bases.
    Configuration {
        /// Where the problem is, e.g. `router_items[2]` or `root_name`
        location: String,
        /// What is wrong
        message: String,
    },
    /// Two router items derive the same route id
    DerivationCollision {
        /// The colliding route id
        route_id: String,
        /// Path of the item that claimed the id first
        first: String,
        /// Path of the item that collided with it
        second: String,
    },
    /// A template failed to render
    Render(String),
    /// A YAML document failed to serialize
    Serialize(String),
}

impl GenerateError {
    pub(crate) fn config(location: impl Into<String>, message: impl Into<String>) -> Self {
        GenerateError::Configuration {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Configuration { location, message } => {
                write!(f, "Configuration error at {location}: {message}")
            }
            GenerateError::DerivationCollision {
                route_id,
                first,
                second,
            } => {
                write!(
                    f,
                    "Route id collision: '{second}' derives '{route_id}', \
                    which is already used by '{first}'"
                )
            }
            GenerateError::Render(e) => write!(f, "Template rendering failed: {e}"),
            GenerateError::Serialize(e) => write!(f, "YAML serialization failed: {e}"),
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<askama::Error> for GenerateError {
    fn from(e: askama::Error) -> Self {
        GenerateError::Render(e.to_string())
    }
}

impl From<serde_yaml::Error> for GenerateError {
    fn from(e: serde_yaml::Error) -> Self {
        GenerateError::Serialize(e.to_string())
    }
}
