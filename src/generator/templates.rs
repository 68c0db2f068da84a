use askama::Template;

/// One controller method in a generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerMethod {
    /// PHP method name, e.g. `content`
    pub name: String,
    /// Route the method serves
    pub route_id: String,
    /// Route parameters, in path order
    pub parameters: Vec<String>,
    /// Rendered argument list, e.g. `$node, $revision`
    pub arguments: String,
    /// Placeholder markup, already escaped for a single-quoted PHP string
    pub markup: String,
}

/// Template data for a PHP controller class file
#[derive(Template)]
#[template(path = "controller.php.txt", escape = "none")]
pub struct ControllerClassTemplate {
    /// Module machine name, used in the namespace
    pub module: String,
    /// Short class name
    pub class_name: String,
    pub methods: Vec<ControllerMethod>,
}

/// Route row for the README table
#[derive(Debug, Clone)]
pub struct ReadmeRoute {
    pub route_id: String,
    pub path: String,
    pub title: String,
}

/// Template data for the module README.md
#[derive(Template)]
#[template(path = "README.md.txt", escape = "none")]
pub struct ReadmeTemplate {
    pub module: String,
    pub name: String,
    pub description: String,
    pub routes: Vec<ReadmeRoute>,
}

/// Escape `s` for use inside a single-quoted PHP string.
pub fn php_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
