//! Background tasks module
//! 
//! This module contains the periodic refresh driver and the terminal renderer
//! that run alongside the HTTP server.

pub mod refresh;
pub mod terminal;

// Re-export main functions
pub use refresh::refresh_task;
pub use terminal::{render_line, terminal_task};
