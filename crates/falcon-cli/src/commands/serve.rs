//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use falcon_core::{DashboardConfig, SessionSettings};

pub async fn cmd_serve(
    config: &DashboardConfig,
    host: Option<&str>,
    port: Option<u16>,
    static_dir: Option<&Path>,
) -> Result<()> {
    let host = host.unwrap_or(&config.server.host);
    let port = port.unwrap_or(config.server.port);

    println!("🚀 Starting Falcon web server...");
    println!("   Listening: http://{}:{}", host, port);
    println!("   Ask mode: {}", config.ask_mode);
    println!("   Catalog validation: {}", config.validation);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let server_config = falcon_server::ServerConfig {
        allowed_origins: config.server.allowed_origins.clone(),
        session: SessionSettings::from(config),
    };

    let static_dir = match static_dir {
        Some(dir) => Some(
            dir.to_str()
                .context("Static directory path is not valid UTF-8")?,
        ),
        None => None,
    };

    falcon_server::serve(host, port, static_dir, server_config).await
}
