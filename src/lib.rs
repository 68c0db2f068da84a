//! # drupal-routegen
//!
//! **drupal-routegen** generates the routing layer of a Drupal module from a
//! declarative list of router items: `{module}.routing.yml`, controller
//! classes under `src/Controller/`, `{module}.links.menu.yml`, plus the
//! module's `.info.yml` and an optional README.
//!
//! ## Architecture
//!
//! - **[`spec`]** - Module spec types and YAML/JSON loading
//! - **[`ids`]** - Route id, class name and default title derivation
//! - **[`generator`]** - Controller/access resolution, route, menu link and
//!   class emitters, file set assembly and writing
//! - **[`linter`]** - Reports every problem in a module spec at once
//! - **[`cli`]** - The `drupal-routegen` command line
//! - **[`logging`]** - `tracing` subscriber setup
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(drupal-routegen)
//!     participant Spec as spec::load_module_spec
//!     participant Gen as generator::generate_module_files
//!     participant FS as File System
//!
//!     User->>CLI: drupal-routegen generate --spec module.yaml
//!     CLI->>Spec: load_module_spec("module.yaml")
//!     Spec-->>CLI: ModuleSpec
//!     CLI->>Gen: generate_module_files(&spec, &config)
//!     Gen->>Gen: validate router items (RouterItem)
//!     Gen->>Gen: plan controller classes
//!     Gen->>Gen: emit routes, menu links, classes
//!     Gen-->>CLI: GeneratedFileSet
//!     CLI->>FS: write_to(output_dir)
//!     CLI-->>User: ✅ Wrote N file(s)
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use drupal_routegen::generator::{generate_module_files, GeneratorConfig};
//! use drupal_routegen::spec::parse_module_spec_yaml;
//!
//! let spec = parse_module_spec_yaml(r#"
//! root_name: test_module
//! router_items:
//!   - path: /my/path
//!     controller: { controller_type: controller }
//!     access: { access_type: permission }
//! "#)?;
//! let files = generate_module_files(&spec, &GeneratorConfig::default())?;
//! assert!(files.contains("src/Controller/MyPathController.php"));
//! ```

pub mod cli;
pub mod generator;
pub mod ids;
pub mod linter;
pub mod logging;
pub mod spec;

pub use generator::{generate_module_files, GenerateError, GeneratedFileSet, GeneratorConfig};
pub use spec::{load_module_spec, ModuleSpec, RouterItemSpec};
