//! Stopwatch Clock - A single-screen stopwatch display
//! 
//! This library tracks elapsed time across start, pause, resume and stop
//! actions and renders a live wall clock next to a millisecond elapsed counter.

pub mod config;
pub mod format;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use format::{format_clock, format_elapsed, FormatError};
pub use state::{AppState, TimerState};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
