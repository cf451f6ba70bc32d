//! Catalog and health handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppState, HealthResponse};
use falcon_core::{Commodity, CATALOG};

/// GET /api/health - Liveness plus the active session settings
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        ask_mode: state.config.session.ask_mode,
        validation: state.config.session.validation,
    })
}

/// GET /api/catalog - List commodities in declared order
pub async fn list_catalog() -> Json<&'static [Commodity]> {
    Json(&CATALOG)
}
