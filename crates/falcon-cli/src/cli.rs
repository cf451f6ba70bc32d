//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Falcon - AI market insights dashboard
#[derive(Parser)]
#[command(name = "falcon")]
#[command(about = "Market insights dashboard for commodity analysts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.local/share/falcon/config/dashboard.toml,
    /// then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Run one dashboard session and print the result card
    Ask {
        /// Commodity id to toggle (repeatable, applied in order)
        #[arg(short, long = "select")]
        select: Vec<String>,

        /// Daily insights text
        #[arg(short, long)]
        insights: Option<String>,

        /// Question text
        #[arg(short, long)]
        question: Option<String>,

        /// Ask mode: question, insights (overrides config)
        #[arg(short, long)]
        mode: Option<String>,

        /// Seed for reproducible chart values
        #[arg(long)]
        seed: Option<u64>,

        /// Print the state snapshot as JSON instead of the card
        #[arg(long)]
        json: bool,
    },

    /// List the commodity catalog
    Catalog,

    /// Show the effective configuration
    Config,
}
