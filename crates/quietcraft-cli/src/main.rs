//! Quiet Craft - quote pricing and form checks
//!
//! A CLI front end for the site's quote calculator and form validation.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use quietcraft_app::config::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(verbose: bool, default_filter: &str) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let loaded = Config::config_path().and_then(|path| Config::load_from(&path).map(|config| (config, path)));
    let (config, config_path) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(cli.verbose, &config.log_level);

    if let Err(e) = commands::execute(cli, config, &config_path) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
