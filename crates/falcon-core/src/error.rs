//! Error types for Falcon

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown commodity: {0}")]
    UnknownCommodity(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
