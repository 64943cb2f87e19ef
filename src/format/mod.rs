//! Time formatting module
//! 
//! Renders elapsed durations and wall-clock instants into display strings.

pub mod clock;
pub mod elapsed;
pub mod error;

// Re-export main types and functions
pub use clock::{format_clock, ClockStyle};
pub use elapsed::{format_elapsed, DecimalSeparator, ELAPSED_PLACEHOLDER};
pub use error::FormatError;
