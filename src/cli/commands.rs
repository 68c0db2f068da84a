use crate::generator::{
    generate_module_files, generate_module_files_from_items, load_config_for_spec,
    validate_router_items, ControllerClassPlan, GenerationScope, WriteOptions,
};
use crate::linter::{error_count, lint_module_spec, print_lint_issues, LintSeverity};
use crate::spec::load_module_spec;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// Command-line interface for drupal-routegen
#[derive(Parser)]
#[command(name = "drupal-routegen")]
#[command(about = "Generate Drupal module routing, menu links and controllers from router items", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate module files from a module spec
    Generate {
        /// Path to the module spec (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Output directory for the module (default: ./{root_name})
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite existing files
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Show what would be written without writing files
        #[arg(long, default_value_t = false)]
        dry_run: bool,

        /// Limit generation to specific files (comma-separated or repeated)
        #[arg(long, value_enum, num_args = 1.., value_delimiter = ',')]
        only: Option<Vec<OnlyPart>>,

        /// Path to generator config (default: routegen.toml next to the spec)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Lint a module spec
    ///
    /// Reports every problem at once: unknown controller/access types,
    /// missing fields, bad paths, route id collisions, menu link issues.
    Lint {
        /// Path to the module spec (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
    /// Print derived route ids, classes and handlers without writing files
    Inspect {
        /// Path to the module spec (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Path to generator config (default: routegen.toml next to the spec)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Files that can be selectively generated
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OnlyPart {
    /// `{module}.info.yml`
    Info,
    /// `{module}.routing.yml`
    Routing,
    /// `src/Controller/*.php`
    Controllers,
    /// `{module}.links.menu.yml`
    Menu,
    /// `README.md`
    Readme,
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if the spec cannot be loaded, generation fails, files
/// cannot be written, or `lint --fail-on-error` finds errors.
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            spec,
            output,
            force,
            dry_run,
            only,
            config,
        } => {
            let module_spec = load_module_spec(&spec)?;
            let generator_config = load_config_for_spec(config.as_deref(), &spec)?;
            let files = generate_module_files(&module_spec, &generator_config)?;
            let output = output.unwrap_or_else(|| PathBuf::from(&module_spec.root_name));
            let options = WriteOptions {
                force,
                dry_run,
                scope: map_only_to_scope(only.as_deref()),
            };
            let summary = files.write_to(&output, &options)?;
            let verb = if dry_run { "Would write" } else { "Wrote" };
            println!(
                "✅ {verb} {} file(s) to {} ({} skipped, {} out of scope)",
                summary.written.len(),
                output.display(),
                summary.skipped.len(),
                summary.out_of_scope.len()
            );
            for path in &summary.skipped {
                println!("⚠️  Skipped existing {path} (use --force to overwrite)");
            }
            Ok(())
        }
        Commands::Lint {
            spec,
            fail_on_error,
            errors_only,
        } => {
            let module_spec = load_module_spec(&spec)?;
            let mut issues = lint_module_spec(&module_spec);
            if errors_only {
                issues.retain(|i| i.severity == LintSeverity::Error);
            }
            print_lint_issues(&issues);
            let errors = error_count(&issues);
            if fail_on_error && errors > 0 {
                anyhow::bail!("{errors} lint error(s) in {}", spec.display());
            }
            Ok(())
        }
        Commands::Inspect { spec, config } => inspect(&spec, config.as_deref()),
    }
}

fn inspect(spec: &Path, config: Option<&Path>) -> anyhow::Result<()> {
    let module_spec = load_module_spec(spec)?;
    let generator_config = load_config_for_spec(config, spec)?;
    let items = validate_router_items(&module_spec)?;
    let files = generate_module_files_from_items(&module_spec, &items, &generator_config)?;
    let plan = ControllerClassPlan::new(&module_spec.root_name, &items);
    for item in &items {
        let class = plan.class_for(item.index).unwrap_or("-");
        println!(
            "{:<40} {:<30} {:<14} {}",
            item.route_id,
            item.path,
            item.controller.default_key(),
            class
        );
    }
    println!();
    for path in files.paths() {
        println!("📄 {path}");
    }
    Ok(())
}

/// Convert CLI `--only` parts to a `GenerationScope`
///
/// If `only` is `None`, all parts are enabled.
pub(crate) fn map_only_to_scope(only: Option<&[OnlyPart]>) -> GenerationScope {
    let Some(parts) = only else {
        return GenerationScope::all();
    };
    let mut scope = GenerationScope::none();
    for p in parts {
        match p {
            OnlyPart::Info => scope.info = true,
            OnlyPart::Routing => scope.routing = true,
            OnlyPart::Controllers => scope.controllers = true,
            OnlyPart::Menu => scope.menu = true,
            OnlyPart::Readme => scope.readme = true,
        }
    }
    scope
}
