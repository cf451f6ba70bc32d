//! Dashboard session handlers
//!
//! Every mutating endpoint returns the updated state snapshot.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{AppError, AppState};
use falcon_core::{AskOutcome, DashboardState, DashboardView, ResultCard};

/// Request body for toggling a commodity
#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub id: String,
}

/// Request body for replacing a text field
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

/// Response for POST /api/ask
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub outcome: AskOutcome,
    pub state: DashboardState,
}

/// GET /api/state - Current state snapshot
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<DashboardState> {
    let session = state.session.lock().await;
    Json(session.state().clone())
}

/// POST /api/toggle - Select or deselect a commodity
pub async fn toggle_commodity(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<DashboardState>, AppError> {
    let mut session = state.session.lock().await;
    let snapshot = session.toggle(&req.id)?.clone();
    Ok(Json(snapshot))
}

/// POST /api/text - Replace the daily insights text
pub async fn set_insight_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> Json<DashboardState> {
    let mut session = state.session.lock().await;
    Json(session.set_text(req.text).clone())
}

/// POST /api/question - Replace the question text
pub async fn set_question(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> Json<DashboardState> {
    let mut session = state.session.lock().await;
    Json(session.set_question(req.text).clone())
}

/// POST /api/ask - Fire the Ask trigger
///
/// Invalid input is not an error: the response carries
/// `"outcome": "validation_skipped"` and the unchanged state.
pub async fn ask(State(state): State<Arc<AppState>>) -> Json<AskResponse> {
    let mut session = state.session.lock().await;
    let outcome = session.ask();

    match outcome {
        AskOutcome::Shown => info!(
            selections = session.state().selections.len(),
            "Generated new market insight"
        ),
        AskOutcome::ValidationSkipped => warn!(
            ask_mode = %session.settings().ask_mode,
            "Ask skipped: nothing to analyze"
        ),
    }

    Json(AskResponse {
        outcome,
        state: session.state().clone(),
    })
}

/// GET /api/card - Rendered result card, or null when nothing is shown
pub async fn get_card(State(state): State<Arc<AppState>>) -> Json<Option<ResultCard>> {
    let session = state.session.lock().await;
    Json(falcon_core::render_card(session.state().result.as_ref()))
}

/// GET /api/view - Full dashboard page view
pub async fn get_view(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    let session = state.session.lock().await;
    Json(DashboardView::build_now(session.state()))
}
