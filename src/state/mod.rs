//! State management module
//! 
//! This module contains the stopwatch timer, the display state and the shared
//! application state that ties them to the presentation layer.

pub mod app_state;
pub mod display_state;
pub mod timer_state;

// Re-export main types
pub use app_state::{monotonic_now, ActionOutcome, AppState, DisplaySettings, Frame};
pub use display_state::{DisplayState, RefreshMode, RefreshRates};
pub use timer_state::{ButtonLabel, Phase, TimerSnapshot, TimerState, Transition};
