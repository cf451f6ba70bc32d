//! Falcon CLI - AI market insights dashboard
//!
//! Usage:
//!   falcon serve --port 3000              Start web server
//!   falcon ask --select gold -i "notes"   Run one session in the terminal
//!   falcon catalog                        List commodities
//!   falcon config                         Show effective configuration

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve {
            port,
            host,
            static_dir,
        } => {
            commands::cmd_serve(&config, host.as_deref(), port, static_dir.as_deref()).await
        }
        Commands::Ask {
            select,
            insights,
            question,
            mode,
            seed,
            json,
        } => commands::cmd_ask(
            &config,
            &commands::AskOptions {
                select,
                insights,
                question,
                mode,
                seed,
            },
            json,
        ),
        Commands::Catalog => commands::cmd_catalog(),
        Commands::Config => commands::cmd_config(&config),
    }
}
