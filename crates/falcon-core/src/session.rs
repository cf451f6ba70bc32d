//! A single interactive dashboard session
//!
//! Wraps a [`DashboardState`] together with the settings and value source
//! that the pure update functions need, so front ends (server, CLI) only
//! deal with one object.

use tracing::info;

use crate::catalog::CatalogValidation;
use crate::chart::{RandomSource, ValueSource};
use crate::config::DashboardConfig;
use crate::dashboard::{self, AskMode, AskOutcome, DashboardState};
use crate::error::Result;

/// Session settings that shape how updates behave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSettings {
    pub ask_mode: AskMode,
    pub validation: CatalogValidation,
}

impl From<&DashboardConfig> for SessionSettings {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            ask_mode: config.ask_mode,
            validation: config.validation,
        }
    }
}

/// Owns the state of one dashboard session
pub struct Session {
    state: DashboardState,
    settings: SessionSettings,
    source: Box<dyn ValueSource>,
}

impl Session {
    /// Create a session drawing chart values from unseeded randomness
    pub fn new(settings: SessionSettings) -> Self {
        Self::with_source(settings, Box::new(RandomSource))
    }

    /// Create a session with an explicit value source (for testing or `--seed`)
    pub fn with_source(settings: SessionSettings, source: Box<dyn ValueSource>) -> Self {
        info!(
            ask_mode = %settings.ask_mode,
            validation = %settings.validation,
            "Dashboard session started"
        );
        Self {
            state: DashboardState::new(),
            settings,
            source,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    pub fn toggle(&mut self, id: &str) -> Result<&DashboardState> {
        let next = dashboard::toggle(self.state.clone(), id, self.settings.validation)?;
        self.state = next;
        Ok(&self.state)
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &DashboardState {
        self.state = dashboard::set_text(std::mem::take(&mut self.state), text);
        &self.state
    }

    pub fn set_question(&mut self, text: impl Into<String>) -> &DashboardState {
        self.state = dashboard::set_question(std::mem::take(&mut self.state), text);
        &self.state
    }

    pub fn ask(&mut self) -> AskOutcome {
        let (next, outcome) = dashboard::ask(
            std::mem::take(&mut self.state),
            self.settings.ask_mode,
            self.source.as_mut(),
        );
        self.state = next;
        outcome
    }
}
