mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod source;

use std::io::IsTerminal;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Config;

fn init_logging(debug: bool) {
    // RUST_LOG wins; otherwise `info`, or `debug` with --debug
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    init_logging(cli.debug);
    if let Some(path) = &config.path {
        info!("Loaded config from {}", path.display());
    }

    if let Err(e) = app::run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
