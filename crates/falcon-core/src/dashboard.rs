//! Dashboard state and its update functions
//!
//! All state lives in a [`DashboardState`] value. Each update function takes
//! the current state by value and returns the next one, so transitions can be
//! tested without a rendering surface:
//!
//! ```text
//! Idle --ask (valid)--> Showing --ask (valid)--> Showing (series replaced)
//! ```
//!
//! There is no transition back to `Idle`; a result stays until the next
//! successful ask overwrites it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{self, CatalogValidation};
use crate::chart::{ChartSeries, ValueSource};
use crate::error::{Error, Result};
use crate::selection::SelectionSet;

/// Which input gates the Ask trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AskMode {
    /// Valid when the question text is non-blank
    Question,
    /// Valid when a commodity is selected or the insight text is non-blank
    #[default]
    Insights,
}

impl AskMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AskMode::Question => "question",
            AskMode::Insights => "insights",
        }
    }
}

impl fmt::Display for AskMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AskMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "question" => Ok(AskMode::Question),
            "insights" => Ok(AskMode::Insights),
            _ => Err(format!("Unknown ask mode: {}", s)),
        }
    }
}

/// What an ask did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AskOutcome {
    /// A new result replaced the previous one
    Shown,
    /// Input did not meet the non-empty predicate; state is unchanged
    ValidationSkipped,
}

impl AskOutcome {
    pub fn is_shown(&self) -> bool {
        matches!(self, AskOutcome::Shown)
    }
}

/// Data produced by a successful ask
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub series: ChartSeries,
    /// Selections as they were when the ask fired
    pub selections: SelectionSet,
    pub visible: bool,
}

/// Complete session state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    pub selections: SelectionSet,
    pub insight_text: String,
    pub question: String,
    pub result: Option<ResultView>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The result to show, if any
    pub fn visible_result(&self) -> Option<&ResultView> {
        self.result.as_ref().filter(|r| r.visible)
    }
}

/// Flip `id` in the selection.
///
/// Under [`CatalogValidation::Strict`] an id outside the catalog is rejected
/// and the state is left as it was.
pub fn toggle(
    mut state: DashboardState,
    id: &str,
    validation: CatalogValidation,
) -> Result<DashboardState> {
    if validation == CatalogValidation::Strict && !catalog::contains(id) {
        return Err(Error::UnknownCommodity(id.to_string()));
    }
    let selected = state.selections.toggle(id);
    debug!(id, selected, count = state.selections.len(), "Toggled commodity");
    Ok(state)
}

/// Replace the insight text
pub fn set_text(mut state: DashboardState, text: impl Into<String>) -> DashboardState {
    state.insight_text = text.into();
    debug!(len = state.insight_text.len(), "Insight text updated");
    state
}

/// Replace the question text
pub fn set_question(mut state: DashboardState, text: impl Into<String>) -> DashboardState {
    state.question = text.into();
    debug!(len = state.question.len(), "Question updated");
    state
}

/// Whether `text` has nothing but whitespace or byte-order marks
fn is_blank(text: &str) -> bool {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// Whether an ask would succeed right now
pub fn can_ask(state: &DashboardState, mode: AskMode) -> bool {
    match mode {
        AskMode::Question => !is_blank(&state.question),
        AskMode::Insights => !state.selections.is_empty() || !is_blank(&state.insight_text),
    }
}

/// Fire the Ask trigger.
///
/// On valid input a fresh series is drawn and the current selections are
/// snapshotted into a visible result. On invalid input the state is returned
/// untouched with [`AskOutcome::ValidationSkipped`].
pub fn ask(
    mut state: DashboardState,
    mode: AskMode,
    source: &mut dyn ValueSource,
) -> (DashboardState, AskOutcome) {
    if !can_ask(&state, mode) {
        debug!(mode = %mode, "Ask skipped: input did not pass validation");
        return (state, AskOutcome::ValidationSkipped);
    }

    let series = ChartSeries::generate(source);
    state.result = Some(ResultView {
        series,
        selections: state.selections.clone(),
        visible: true,
    });
    debug!(
        mode = %mode,
        selections = state.selections.len(),
        "Ask produced a new result"
    );
    (state, AskOutcome::Shown)
}
