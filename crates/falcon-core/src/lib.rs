//! Falcon Core Library
//!
//! Shared functionality for the Falcon market insights dashboard:
//! - Commodity catalog and selection set
//! - Dashboard state with pure update functions (toggle, text, ask)
//! - Chart series generation behind a pluggable value source
//! - Result card and full-page view rendering
//! - Layered TOML configuration

pub mod catalog;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod render;
pub mod selection;
pub mod session;
pub mod view;

pub use catalog::{CatalogValidation, Commodity, CATALOG};
pub use chart::{
    ChartPoint, ChartSeries, Month, RandomSource, SeededSource, SequenceSource, ValueSource,
};
pub use config::{DashboardConfig, ServerSettings};
pub use dashboard::{AskMode, AskOutcome, DashboardState, ResultView};
pub use error::{Error, Result};
pub use render::{render_card, Chip, ResultCard};
pub use selection::SelectionSet;
pub use session::{Session, SessionSettings};
pub use view::DashboardView;
