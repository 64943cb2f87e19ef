//! HTTP API module
//! 
//! This module contains the control endpoints for the stopwatch and the
//! read-only views of its display.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/start", post(start_handler))
        .route("/pause-or-resume", post(pause_or_resume_handler))
        .route("/action", post(action_handler))
        .route("/stop", post(stop_handler))
        .route("/display/visible", post(visible_handler))
        .route("/display/background", post(background_handler))
        .route("/frame", get(frame_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
