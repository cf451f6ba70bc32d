//! Shared command utilities and simple listings
//!
//! This module contains:
//! - `load_config` - Shared utility to resolve the dashboard config
//! - `cmd_catalog` - List the commodity catalog
//! - `cmd_config` - Show the effective configuration

use std::path::Path;

use anyhow::{Context, Result};
use falcon_core::config::default_config_path;
use falcon_core::{DashboardConfig, CATALOG};

/// Load config from `path`, the data dir override, or built-in defaults
pub fn load_config(path: Option<&Path>) -> Result<DashboardConfig> {
    DashboardConfig::load_from(path).context("Failed to load dashboard config")
}

pub fn cmd_catalog() -> Result<()> {
    println!();
    println!("📦 Commodities");
    println!("   ─────────────────────────────────");
    for commodity in CATALOG.iter() {
        println!("   {:<14} {}", commodity.id, commodity.label);
    }
    println!();
    Ok(())
}

pub fn cmd_config(config: &DashboardConfig) -> Result<()> {
    println!();
    println!("⚙️  Falcon Config");
    println!("   ─────────────────────────────────");
    match &config.source {
        Some(path) => println!("   Source: {}", path.display()),
        None => {
            println!("   Source: built-in defaults");
            if let Some(path) = default_config_path() {
                println!("   Override: {} (not found)", path.display());
            }
        }
    }
    println!();
    println!("   Ask mode:           {}", config.ask_mode);
    println!("   Catalog validation: {}", config.validation);
    println!(
        "   Server:             http://{}:{}",
        config.server.host, config.server.port
    );
    if !config.server.allowed_origins.is_empty() {
        println!(
            "   Allowed origins:    {}",
            config.server.allowed_origins.join(", ")
        );
    }
    println!();
    Ok(())
}
