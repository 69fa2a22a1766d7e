//! # sidp
//!
//! Command-line entry point.

#![forbid(unsafe_code)]

use clap::Parser;
use sidp_cli::{
    cli::{Cli, Command},
    commands::{run_config, run_generate},
    config::{load_config, log_filter},
    output::error,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            error(&format!("Failed to load configuration: {e}"));
            std::process::exit(e.exit_code());
        }
    };

    let filter = log_filter(cli.verbose, std::env::var("RUST_LOG").ok(), &config);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Command::Generate(args) => run_generate(args, &config, cli.output),
        Command::Config(cmd) => run_config(cmd, &config),
    };

    if let Err(e) = result {
        error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
