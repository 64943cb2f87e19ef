//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use chrono::Local;
use tracing::{error, info};

use crate::{
    format::format_clock,
    state::{monotonic_now, ActionOutcome, AppState, Frame, RefreshMode},
};
use super::responses::{ActionResponse, DisplayResponse, HealthResponse, StatusResponse};

fn action_reply(
    action: &str,
    result: Result<ActionOutcome, String>,
) -> Result<Json<ActionResponse>, StatusCode> {
    match result {
        Ok(outcome) => {
            info!("{} endpoint called - phase now {:?}", action, outcome.timer.phase);
            Ok(Json(ActionResponse::from_outcome(action, outcome)))
        }
        Err(e) => {
            error!("Failed to handle {}: {}", action, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /start - Start a stopped timer
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>, StatusCode> {
    action_reply("start", state.on_start())
}

/// Handle POST /pause-or-resume - Pause a running timer or resume a paused one
pub async fn pause_or_resume_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>, StatusCode> {
    action_reply("pause-or-resume", state.on_pause_or_resume())
}

/// Handle POST /action - Press the contextual Start/Pause/Resume button
pub async fn action_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>, StatusCode> {
    action_reply("action", state.on_action())
}

/// Handle POST /stop - Reset the timer
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>, StatusCode> {
    action_reply("stop", state.on_stop())
}

fn switch_mode(state: &AppState, mode: RefreshMode) -> Result<Json<DisplayResponse>, StatusCode> {
    match state.set_mode(mode) {
        Ok(display) => {
            let period_ms = state.settings.rates.period(mode).as_secs_f64() * 1000.0;
            Ok(Json(DisplayResponse::new(&display, period_ms)))
        }
        Err(e) => {
            error!("Failed to switch display mode: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /display/visible - Refresh at the active cadence
pub async fn visible_handler(State(state): State<Arc<AppState>>) -> Result<Json<DisplayResponse>, StatusCode> {
    switch_mode(&state, RefreshMode::Active)
}

/// Handle POST /display/background - Refresh at the background cadence
pub async fn background_handler(State(state): State<Arc<AppState>>) -> Result<Json<DisplayResponse>, StatusCode> {
    switch_mode(&state, RefreshMode::Background)
}

/// Handle GET /frame - Return the most recently rendered frame
pub async fn frame_handler(State(state): State<Arc<AppState>>) -> Json<Frame> {
    Json(state.latest_frame())
}

/// Handle GET /status - Return the timer, the wall clock and display details
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.get_timer_snapshot(monotonic_now()) {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let display = match state.get_display_state() {
        Ok(d) => d,
        Err(e) => {
            error!("Failed to get display state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let period_ms = state.settings.rates.period(display.mode).as_secs_f64() * 1000.0;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
        clock: format_clock(&Local::now(), state.settings.clock_style),
        display: DisplayResponse::new(&display, period_ms),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
