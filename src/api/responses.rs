//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{ActionOutcome, DisplayState, RefreshMode, TimerSnapshot, Transition};

/// API response structure for timer action endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Transition that took effect, absent when the action was ignored
    pub transition: Option<Transition>,
    pub timer: TimerSnapshot,
}

impl ActionResponse {
    /// Build a response from the outcome of an action
    pub fn from_outcome(action: &str, outcome: ActionOutcome) -> Self {
        let (status, message) = match outcome.transition {
            Some(transition) => ("applied", format!("{} applied: timer {:?}", action, transition)),
            None => ("ignored", format!("{} ignored while {:?}", action, outcome.timer.phase)),
        };

        Self {
            status: status.to_string(),
            message: message.to_lowercase(),
            timestamp: Utc::now(),
            transition: outcome.transition,
            timer: outcome.timer,
        }
    }
}

/// Response for display mode changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayResponse {
    pub mode: RefreshMode,
    pub visible: bool,
    pub ticks: u64,
    pub period_ms: f64,
}

impl DisplayResponse {
    pub fn new(display: &DisplayState, period_ms: f64) -> Self {
        Self {
            mode: display.mode,
            visible: display.is_visible(),
            ticks: display.ticks,
            period_ms,
        }
    }
}

/// Status response with the timer and both clocks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerSnapshot,
    pub clock: String,
    pub display: DisplayResponse,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
