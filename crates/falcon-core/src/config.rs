//! Dashboard configuration
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/falcon/config/dashboard.toml)
//! 2. Embedded defaults (compiled into binary)
//!
//! `FALCON_ASK_MODE` and `FALCON_CATALOG_VALIDATION` are applied on top.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::CatalogValidation;
use crate::dashboard::AskMode;
use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/dashboard.toml");

/// Environment variable overriding `[ask] mode`
pub const ASK_MODE_ENV: &str = "FALCON_ASK_MODE";

/// Environment variable overriding `[catalog] validation`
pub const CATALOG_VALIDATION_ENV: &str = "FALCON_CATALOG_VALIDATION";

/// Resolved dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub ask_mode: AskMode,
    pub validation: CatalogValidation,
    pub server: ServerSettings,
    /// File the config was read from (None = embedded defaults)
    pub source: Option<PathBuf>,
}

/// `[server]` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origins: vec![],
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            ask_mode: AskMode::default(),
            validation: CatalogValidation::default(),
            server: ServerSettings::default(),
            source: None,
        }
    }
}

impl DashboardConfig {
    /// Load from the default override location, falling back to embedded defaults
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load from `path` if given, otherwise as [`DashboardConfig::load`].
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// override is not.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                read_config(path)?
            }
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => read_config(&path)?,
                None => parse_config(DEFAULT_CONFIG)?,
            },
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Apply environment overrides
    fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(
            std::env::var(ASK_MODE_ENV).ok().as_deref(),
            std::env::var(CATALOG_VALIDATION_ENV).ok().as_deref(),
        )
    }

    fn apply_overrides(&mut self, ask_mode: Option<&str>, validation: Option<&str>) -> Result<()> {
        if let Some(mode) = ask_mode.filter(|s| !s.is_empty()) {
            self.ask_mode = mode
                .parse()
                .map_err(|e| Error::Config(format!("{}: {}", ASK_MODE_ENV, e)))?;
        }
        if let Some(validation) = validation.filter(|s| !s.is_empty()) {
            self.validation = validation
                .parse()
                .map_err(|e| Error::Config(format!("{}: {}", CATALOG_VALIDATION_ENV, e)))?;
        }
        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("falcon").join("config").join("dashboard.toml"))
}

fn read_config(path: &Path) -> Result<DashboardConfig> {
    let content = fs::read_to_string(path)?;
    let mut config = parse_config(&content)?;
    config.source = Some(path.to_path_buf());
    Ok(config)
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    ask: Option<RawAsk>,
    catalog: Option<RawCatalog>,
    server: Option<RawServer>,
}

#[derive(Debug, Deserialize)]
struct RawAsk {
    mode: Option<AskMode>,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    validation: Option<CatalogValidation>,
}

#[derive(Debug, Deserialize)]
struct RawServer {
    host: Option<String>,
    port: Option<u16>,
    allowed_origins: Option<Vec<String>>,
}

/// Parse config from TOML content; missing keys keep their defaults
fn parse_config(content: &str) -> Result<DashboardConfig> {
    let raw: RawConfig = toml::from_str(content)?;

    let mut config = DashboardConfig::default();

    if let Some(mode) = raw.ask.and_then(|a| a.mode) {
        config.ask_mode = mode;
    }
    if let Some(validation) = raw.catalog.and_then(|c| c.validation) {
        config.validation = validation;
    }
    if let Some(server) = raw.server {
        if let Some(host) = server.host {
            config.server.host = host;
        }
        if let Some(port) = server.port {
            config.server.port = port;
        }
        if let Some(origins) = server.allowed_origins {
            config.server.allowed_origins = origins;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_default_config() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.ask_mode, AskMode::Insights);
        assert_eq!(config.validation, CatalogValidation::Permissive);
        assert_eq!(config.server.port, 3000);
        assert!(config.server.allowed_origins.is_empty());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config("[ask]\nmode = \"question\"\n").unwrap();
        assert_eq!(config.ask_mode, AskMode::Question);
        assert_eq!(config.validation, CatalogValidation::Permissive);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_invalid_mode_rejected() {
        let err = parse_config("[ask]\nmode = \"sometimes\"\n").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[catalog]\nvalidation = \"strict\"\n\n[server]\nport = 8080\nallowed_origins = [\"http://localhost:5173\"]"
        )
        .unwrap();

        let config = read_config(file.path()).unwrap();
        assert_eq!(config.validation, CatalogValidation::Strict);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.allowed_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.source.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DashboardConfig::load_from(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_default_path_under_local_data_dir() {
        if let Some(base) = dirs::data_local_dir() {
            let path = default_config_path().unwrap();
            assert!(path.starts_with(&base));
            assert!(path.ends_with("falcon/config/dashboard.toml"));
        }
    }

    #[test]
    fn test_overrides() {
        let mut config = DashboardConfig::default();
        config
            .apply_overrides(Some("question"), Some("strict"))
            .unwrap();
        assert_eq!(config.ask_mode, AskMode::Question);
        assert_eq!(config.validation, CatalogValidation::Strict);

        // Empty values are ignored
        config.apply_overrides(Some(""), None).unwrap();
        assert_eq!(config.ask_mode, AskMode::Question);

        assert!(config.apply_overrides(Some("bogus"), None).is_err());
    }
}
