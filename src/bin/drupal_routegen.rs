use clap::Parser;
use drupal_routegen::cli::{run_cli, Cli};
use drupal_routegen::logging::{init_logging_with_config, LogConfig};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_logging_with_config(&LogConfig::from_env()) {
        eprintln!("warning: {e:#}");
    }
    if let Err(e) = run_cli(cli) {
        eprintln!("❌ {e:#}");
        std::process::exit(1);
    }
}
