//! Wall-clock formatter producing `HH:MM:SS.mmm`

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// Hour cycle used by the wall clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockStyle {
    #[default]
    TwentyFourHour,
    TwelveHour,
}

/// Format an instant as hours, minutes, seconds and milliseconds in the
/// instant's own time zone.
pub fn format_clock<Tz>(instant: &DateTime<Tz>, style: ClockStyle) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    // Leap seconds are reported as nanosecond values past 1_000_000_000
    let millis = (instant.nanosecond() / 1_000_000).min(999);

    match style {
        ClockStyle::TwentyFourHour => {
            format!("{}.{:03}", instant.format("%H:%M:%S"), millis)
        }
        ClockStyle::TwelveHour => {
            format!("{}.{:03} {}", instant.format("%I:%M:%S"), millis, instant.format("%p"))
        }
    }
}
