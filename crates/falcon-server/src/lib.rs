//! Falcon Web Server
//!
//! Axum-based REST API for the Falcon market insights dashboard.
//!
//! The server owns exactly one dashboard session. Every request applies a
//! single update under the session lock, so the latest completed request wins.
//!
//! Hardening carried over for any browser front end:
//! - Restrictive CORS policy
//! - Security headers (CSP, nosniff, frame denial)
//! - Sanitized error responses

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::sync::Mutex;
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tracing::{error, info};

use falcon_core::{AskMode, CatalogValidation, Session, SessionSettings};

mod handlers;

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
    /// How the session validates toggles and gates asks
    pub session: SessionSettings,
}

/// Shared application state
pub struct AppState {
    pub session: Mutex<Session>,
    pub config: ServerConfig,
}

/// Create the application router with a randomly seeded session
pub fn create_router(static_dir: Option<&str>, config: ServerConfig) -> Router {
    let session = Session::new(config.session);
    create_router_with_session(session, static_dir, config)
}

/// Create the application router around an existing session (for testing)
pub fn create_router_with_session(
    session: Session,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> Router {
    let state = Arc::new(AppState {
        session: Mutex::new(session),
        config: config.clone(),
    });

    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/catalog", get(handlers::list_catalog))
        // Dashboard session
        .route("/state", get(handlers::get_state))
        .route("/toggle", post(handlers::toggle_commodity))
        .route("/text", post(handlers::set_insight_text))
        .route("/question", post(handlers::set_question))
        .route("/ask", post(handlers::ask))
        // Rendered views
        .route("/card", get(handlers::get_card))
        .route("/view", get(handlers::get_view));

    // Build CORS layer
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    // CSP: restrict scripts to same-origin, allow inline styles
    let csp_value = HeaderValue::from_static(
        "default-src 'self'; script-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; connect-src 'self'; frame-ancestors 'none'",
    );

    let mut app = Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            csp_value,
        ));

    // Serve static files if directory provided
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

/// Start the server
pub async fn serve(
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    info!(
        ask_mode = %config.session.ask_mode,
        validation = %config.session.validation,
        "Dashboard session settings"
    );

    let app = create_router(static_dir, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<falcon_core::Error> for AppError {
    fn from(err: falcon_core::Error) -> Self {
        if matches!(err, falcon_core::Error::UnknownCommodity(_)) {
            return Self::bad_request(&err.to_string());
        }
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err.into()),
        }
    }
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ask_mode: AskMode,
    pub validation: CatalogValidation,
}

#[cfg(test)]
mod tests;
