//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `ask` - Run a one-shot dashboard session in the terminal
//! - `common` - Shared utilities (load_config) and the catalog/config listings
//! - `serve` - Web server command

pub mod ask;
pub mod common;
pub mod serve;

// Re-export command functions for main.rs
pub use ask::*;
pub use common::*;
pub use serve::*;
