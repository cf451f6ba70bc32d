//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod catalog;
pub mod dashboard;

// Re-export all handlers for use in router
pub use catalog::*;
pub use dashboard::*;
