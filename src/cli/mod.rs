//! # CLI Module
//!
//! Command-line interface for the `drupal-routegen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! ```bash
//! drupal-routegen generate --spec module.yaml --output modules/test_module
//! ```
//!
//! Options:
//! - `--spec <FILE>` - Module spec (required)
//! - `--output <DIR>` - Output directory (default: `./{root_name}`)
//! - `--force` - Overwrite existing files
//! - `--dry-run` - Report without writing
//! - `--only <PARTS>` - `info`, `routing`, `controllers`, `menu`, `readme`
//! - `--config <FILE>` - Generator config (default: `routegen.toml` next to the spec)
//!
//! ### `lint`
//!
//! ```bash
//! drupal-routegen lint --spec module.yaml --fail-on-error
//! ```
//!
//! ### `inspect`
//!
//! ```bash
//! drupal-routegen inspect --spec module.yaml
//! ```

mod commands;


pub use commands::{run_cli, Cli, Commands, OnlyPart};
