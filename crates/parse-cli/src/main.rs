//! parse - CLI tool for exploring a Parse REST API.
//!
//! This is a thin wrapper over the `parse-rest` library, intended for manual
//! exploration and debugging against an application.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{dump, get, hooks, query};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let connection = &cli.connection;
    match cli.command {
        Commands::Query(args) => query::run(connection, args).await,
        Commands::Dump(args) => dump::run(connection, args).await,
        Commands::Get(args) => get::run(connection, args).await,
        Commands::Hooks(args) => hooks::run_hooks(connection, args).await,
        Commands::Triggers(args) => hooks::run_triggers(connection, args).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
